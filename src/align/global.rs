//! Three-plane global alignment with affine gaps and gap incentives
//!
//! This is a faithful reimplementation of CRISPResso2's global aligner
//! (CRISPResso2/CRISPResso2Align.pyx global_align), kept recurrence-for-
//! recurrence and tie-break-for-tie-break so the traceback is byte
//! compatible with the reference tool. Downstream CRISPR quantification is
//! sensitive to which of several equal-score alignments is returned, so the
//! comparison order here is load bearing.
//!
//! Three score planes over the (|ref|+1) x (|read|+1) grid:
//! - `m`: alignments ending in a match/mismatch column;
//! - `i`: alignments ending with a gap in the reference (column consumes a
//!   read base) - the incentive for the current reference column is added
//!   on every cell, so a run of reference gaps keeps collecting it;
//! - `j`: alignments ending with a gap in the read (column consumes a
//!   reference base) - the incentive is added only on the open transition,
//!   so a run crossing an incentive column is not double credited.
//!
//! Terminal gaps are free to open: in the last row and last column the open
//! transition is charged `gap_extend` instead of `gap_open`, which makes a
//! leading or trailing gap of length k cost k * gap_extend.

use super::matrix::ScoringMatrix;
use super::result::{round3, AlignedPair};
use super::traceback::{traceback, Plane, PointerMatrix, GAP};
use crate::error::{AlignError, AlignResult};
use crate::sequence::prepare;

/// Pick the winning plane among the three candidates.
///
/// Nested comparisons in preference order m, then j, then i: a tie keeps
/// the earlier-listed plane alive, so equal-score alignments resolve the
/// way the reference resolves them (an m/i tie stays in m, which is what
/// places an ambiguous insertion at its leftmost position). Used for the
/// M recurrence and for picking the traceback start plane at the corner.
#[inline(always)]
fn best_plane(m_val: i32, i_val: i32, j_val: i32) -> (Plane, i32) {
    if m_val >= j_val {
        if m_val >= i_val {
            (Plane::M, m_val)
        } else {
            (Plane::I, i_val)
        }
    } else if j_val >= i_val {
        (Plane::J, j_val)
    } else {
        (Plane::I, i_val)
    }
}

/// One flat score plane, allocated fallibly.
fn try_score_plane(rows: usize, cols: usize) -> AlignResult<Vec<i32>> {
    let mut v = Vec::new();
    v.try_reserve_exact(rows * cols)
        .map_err(|_| AlignError::resource_exhausted(rows, cols))?;
    v.resize(rows * cols, 0);
    Ok(v)
}

/// Globally align `read` against `reference` with affine gap penalties and
/// a position-specific gap incentive.
///
/// `gap_incentive` must have length `reference.len() + 1`; entry `k` is
/// added when a gap is opened at reference column `k` (and on every
/// reference-gap cell in column `k`). Gap penalties are supplied as
/// negative numbers. Inputs are case-insensitive and must not contain `-`.
///
/// Returns the gap-padded pair plus the match percentage rounded to three
/// decimals. Deterministic; either sequence may be empty.
pub fn global_align(
    read: &[u8],
    reference: &[u8],
    matrix: &ScoringMatrix,
    gap_incentive: &[i32],
    gap_open: i32,
    gap_extend: i32,
) -> AlignResult<AlignedPair> {
    if gap_incentive.len() != reference.len() + 1 {
        return Err(AlignError::incentive_length(
            gap_incentive.len(),
            reference.len() + 1,
        ));
    }

    let reference = prepare(reference)?;
    let read = prepare(read)?;

    let ref_len = reference.len();
    let read_len = read.len();

    // The score floor below degenerates to 0 when either side is empty, so
    // the all-gap answers are produced directly.
    if ref_len == 0 || read_len == 0 {
        return Ok(empty_side_alignment(&reference, &read));
    }

    let rows = ref_len + 1;
    let cols = read_len + 1;
    let idx = |i: usize, j: usize| i * cols + j;

    let mut m = try_score_plane(rows, cols)?;
    let mut gi = try_score_plane(rows, cols)?;
    let mut gj = try_score_plane(rows, cols)?;
    let mut ptr_m = PointerMatrix::try_new(rows, cols)?;
    let mut ptr_i = PointerMatrix::try_new(rows, cols)?;
    let mut ptr_j = PointerMatrix::try_new(rows, cols)?;

    // Score floor guaranteed to lose against any real path.
    let s_min = gap_open * read_len as i32 * ref_len as i32;

    // Row 0: only leading gaps in the reference are live.
    for j in 1..cols {
        m[idx(0, j)] = s_min;
        ptr_m.set(0, j, Plane::I);
        gi[idx(0, j)] = gap_extend * j as i32 + gap_incentive[0];
        ptr_i.set(0, j, Plane::I);
        gj[idx(0, j)] = s_min;
    }
    // Column 0: only leading gaps in the read are live.
    for i in 1..rows {
        m[idx(i, 0)] = s_min;
        ptr_m.set(i, 0, Plane::J);
        gj[idx(i, 0)] = gap_extend * i as i32 + gap_incentive[0];
        ptr_j.set(i, 0, Plane::J);
        gi[idx(i, 0)] = s_min;
    }

    // Row-major fill, i outer and j inner; the only order satisfying the
    // [i-1, j-1], [i-1, j] and [i, j-1] dependencies.
    for i in 1..rows {
        let rc = reference[i - 1];
        for j in 1..cols {
            // Terminal gaps open for the price of an extension.
            let open_cost = if i == ref_len || j == read_len {
                gap_extend
            } else {
                gap_open
            };

            // Gap in the reference: consumes read[j-1].
            let open = open_cost + m[idx(i, j - 1)];
            let extend = gap_extend + gi[idx(i, j - 1)];
            let (val, from) = if open > extend {
                (open, Plane::M)
            } else {
                (extend, Plane::I)
            };
            gi[idx(i, j)] = val + gap_incentive[i];
            ptr_i.set(i, j, from);

            // Gap in the read: consumes reference[i-1]; incentive only on
            // the open transition.
            let open = open_cost + m[idx(i - 1, j)] + gap_incentive[i - 1];
            let extend = gap_extend + gj[idx(i - 1, j)];
            let (val, from) = if open > extend {
                (open, Plane::M)
            } else {
                (extend, Plane::J)
            };
            gj[idx(i, j)] = val;
            ptr_j.set(i, j, from);

            // Match/mismatch column.
            let (from, best) = best_plane(
                m[idx(i - 1, j - 1)],
                gi[idx(i - 1, j - 1)],
                gj[idx(i - 1, j - 1)],
            );
            m[idx(i, j)] = best + matrix.score(rc, read[j - 1]);
            ptr_m.set(i, j, from);
        }
    }

    let corner = idx(ref_len, read_len);
    let (start, corner_score) = best_plane(m[corner], gi[corner], gj[corner]);

    if std::env::var("CRISPALIGN_DEBUG_DP").is_ok() {
        eprintln!(
            "[DP] grid={}x{} corner m={} i={} j={} start={:?} score={}",
            rows, cols, m[corner], gi[corner], gj[corner], start, corner_score
        );
    }

    let walked = traceback(&reference, &read, &ptr_m, &ptr_i, &ptr_j, start);

    let aligned_len = walked.aligned_ref.len();
    let match_percentage = if aligned_len == 0 {
        0.0
    } else {
        round3(100.0 * walked.matches as f64 / aligned_len as f64)
    };

    Ok(AlignedPair {
        reference: walked.aligned_ref,
        read: walked.aligned_read,
        match_percentage,
        matches: walked.matches,
    })
}

/// Alignment when at least one side is empty: a run of gap columns against
/// the other sequence (or two empty strings), 0% matches.
fn empty_side_alignment(reference: &[u8], read: &[u8]) -> AlignedPair {
    let (aligned_ref, aligned_read) = if reference.is_empty() {
        (vec![GAP; read.len()], read.to_vec())
    } else {
        (reference.to_vec(), vec![GAP; reference.len()])
    };
    AlignedPair {
        reference: aligned_ref,
        read: aligned_read,
        match_percentage: 0.0,
        matches: 0,
    }
}
