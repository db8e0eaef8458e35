//! Pointer planes and traceback for the three-plane global aligner
//!
//! The DP keeps one pointer plane per score plane; each cell records which
//! plane produced the winning predecessor. Traceback walks the pointers from
//! the bottom-right corner back to (0, 0), emitting one aligned column per
//! step.

/// Plane tag stored in the pointer matrices.
///
/// The names follow the CRISPResso2 matrices: `M` ends in a match/mismatch
/// column, `I` ends with a gap in the reference (the column consumes a read
/// base), `J` ends with a gap in the read (the column consumes a reference
/// base). `Unset` marks cells no valid path reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    M,
    I,
    J,
    Unset,
}

/// Flat pointer plane over the (rows x cols) DP grid, one byte per cell.
pub struct PointerMatrix {
    data: Vec<Plane>,
    cols: usize,
}

impl PointerMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![Plane::Unset; rows * cols],
            cols,
        }
    }

    /// Fallible constructor used by the aligner so an oversized grid
    /// surfaces as `ResourceExhausted` instead of aborting.
    pub fn try_new(rows: usize, cols: usize) -> crate::error::AlignResult<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(rows * cols)
            .map_err(|_| crate::error::AlignError::resource_exhausted(rows, cols))?;
        data.resize(rows * cols, Plane::Unset);
        Ok(Self { data, cols })
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Plane {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, plane: Plane) {
        self.data[row * self.cols + col] = plane;
    }
}

/// Result of a traceback walk: the two gap-padded sequences (reference
/// first) and the number of identical columns.
pub struct TracebackResult {
    pub aligned_ref: Vec<u8>,
    pub aligned_read: Vec<u8>,
    pub matches: usize,
}

pub const GAP: u8 = b'-';

/// Walk the pointer planes from (ref_len, read_len) back to the origin.
///
/// In plane `M` the step emits one base from each sequence and moves
/// diagonally; in plane `J` it emits a reference base against a gap and
/// moves up; in plane `I` it emits a read base against a gap and moves
/// left. The emitted strings are reversed before returning.
///
/// Panics if the walk reaches an `Unset` pointer or a plane whose step
/// would index before the start of a sequence; both indicate a corrupted
/// fill and never occur on valid input.
pub fn traceback(
    reference: &[u8],
    read: &[u8],
    ptr_m: &PointerMatrix,
    ptr_i: &PointerMatrix,
    ptr_j: &PointerMatrix,
    start: Plane,
) -> TracebackResult {
    let mut aligned_ref = Vec::with_capacity(reference.len() + read.len());
    let mut aligned_read = Vec::with_capacity(reference.len() + read.len());
    let mut matches = 0usize;

    let mut i = reference.len();
    let mut j = read.len();
    let mut plane = start;

    while i > 0 || j > 0 {
        match plane {
            Plane::M if i > 0 && j > 0 => {
                let rc = reference[i - 1];
                let qc = read[j - 1];
                aligned_ref.push(rc);
                aligned_read.push(qc);
                if rc == qc {
                    matches += 1;
                }
                plane = ptr_m.get(i, j);
                i -= 1;
                j -= 1;
            }
            Plane::J if i > 0 => {
                aligned_ref.push(reference[i - 1]);
                aligned_read.push(GAP);
                plane = ptr_j.get(i, j);
                i -= 1;
            }
            Plane::I if j > 0 => {
                aligned_ref.push(GAP);
                aligned_read.push(read[j - 1]);
                plane = ptr_i.get(i, j);
                j -= 1;
            }
            _ => {
                panic!(
                    "traceback reached an invalid state at ({}, {}) in plane {:?}",
                    i, j, plane
                );
            }
        }
    }

    aligned_ref.reverse();
    aligned_read.reverse();

    TracebackResult {
        aligned_ref,
        aligned_read,
        matches,
    }
}
