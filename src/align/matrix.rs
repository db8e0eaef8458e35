//! Nucleotide scoring matrix - CRISPResso2 compatible
//!
//! CRISPResso2 builds its EDNAFULL-like table with `make_matrix`, a dense
//! score table indexed by raw base codes so that lookup during the DP is a
//! single load. We keep the same shape: a 256x256 table covering the whole
//! byte range, with only the ordered pairs over {A, T, C, G, N} written and
//! every other cell left at 0. Unknown or wider-alphabet bases therefore
//! score neutral instead of trapping.
//!
//! Reference: CRISPResso2/CRISPResso2Align.pyx make_matrix()

/// Width of one matrix row (full byte range, raw-code indexing).
pub const MATRIX_DIM: usize = 256;

/// Canonical bases that receive match/mismatch scores.
pub const CANONICAL: [u8; 4] = [b'A', b'T', b'C', b'G'];

/// Dense (base code x base code) score table.
///
/// Constructed once, immutable afterwards, shared read-only across
/// alignments.
#[derive(Clone)]
pub struct ScoringMatrix {
    scores: Vec<i32>,
}

impl ScoringMatrix {
    /// Build the table from the four CRISPResso2 scoring parameters.
    ///
    /// - identical canonical bases -> `match_score`
    /// - different canonical bases -> `mismatch_score`
    /// - canonical vs N (either order) -> `n_mismatch_score`
    /// - N vs N -> `n_match_score`
    pub fn make_matrix(
        match_score: i32,
        mismatch_score: i32,
        n_mismatch_score: i32,
        n_match_score: i32,
    ) -> Self {
        let mut scores = vec![0i32; MATRIX_DIM * MATRIX_DIM];

        for &a in &CANONICAL {
            for &b in &CANONICAL {
                scores[a as usize * MATRIX_DIM + b as usize] = if a == b {
                    match_score
                } else {
                    mismatch_score
                };
            }
            scores[a as usize * MATRIX_DIM + b'N' as usize] = n_mismatch_score;
            scores[b'N' as usize * MATRIX_DIM + a as usize] = n_mismatch_score;
        }
        scores[b'N' as usize * MATRIX_DIM + b'N' as usize] = n_match_score;

        Self { scores }
    }

    /// Score for an ordered base pair, indexed by raw byte code.
    #[inline(always)]
    pub fn score(&self, a: u8, b: u8) -> i32 {
        self.scores[a as usize * MATRIX_DIM + b as usize]
    }
}

impl Default for ScoringMatrix {
    /// CRISPResso2 argument defaults: 5 / -4 / -2 / -1.
    fn default() -> Self {
        Self::make_matrix(5, -4, -2, -1)
    }
}
