//! Scoring configuration and gap-incentive construction

use crate::align::ScoringMatrix;

/// Scoring specification for amplicon alignment.
///
/// Defaults carry the CRISPResso2 argument defaults: EDNAFULL-like base
/// scores (5 / -4 / -2 / -1) with gap open -20 and gap extend -2. Gap
/// penalties are negative; the incentive weight is positive.
#[derive(Debug, Clone, Copy)]
pub struct AlignScoringSpec {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub n_mismatch_score: i32,
    pub n_match_score: i32,
    pub gap_open: i32,
    pub gap_extend: i32,
}

impl Default for AlignScoringSpec {
    fn default() -> Self {
        Self {
            match_score: 5,
            mismatch_score: -4,
            n_mismatch_score: -2,
            n_match_score: -1,
            gap_open: -20,
            gap_extend: -2,
        }
    }
}

impl AlignScoringSpec {
    /// Build the scoring matrix for this spec.
    pub fn matrix(&self) -> ScoringMatrix {
        ScoringMatrix::make_matrix(
            self.match_score,
            self.mismatch_score,
            self.n_mismatch_score,
            self.n_match_score,
        )
    }
}

/// Build a gap-incentive vector biasing gaps toward predicted cut sites.
///
/// The vector has length `ref_len + 1`; for each cut point (the 0-based
/// offset of the base immediately left of the cleavage position) `weight`
/// is added at slot `cut + 1`, so gaps opened at the cleavage column
/// collect the bonus. Cut points at or beyond `ref_len` are ignored.
pub fn cut_site_incentive(ref_len: usize, cut_points: &[usize], weight: i32) -> Vec<i32> {
    let mut incentive = vec![0i32; ref_len + 1];
    for &cut in cut_points {
        if cut < ref_len {
            incentive[cut + 1] += weight;
        }
    }
    incentive
}
