//! Error types for the alignment core

use thiserror::Error;

/// Errors surfaced by the aligner and the variant extractor.
///
/// Input validation fails before any DP plane is allocated; allocation
/// failure is reported with the requested grid dimensions. Pointer-plane
/// corruption during traceback is a contract violation and panics instead
/// of returning (it must never occur on valid input).
#[derive(Error, Debug)]
pub enum AlignError {
    #[error("gap incentive length {got} does not match reference length + 1 (expected {expected})")]
    IncentiveLength { got: usize, expected: usize },

    #[error("input sequence contains the gap character '-'")]
    GapInInput,

    #[error("aligned sequences differ in length ({ref_len} vs {read_len})")]
    UnequalAlignedLength { ref_len: usize, read_len: usize },

    #[error("aligned column {column} is a gap in both sequences")]
    GapOnlyColumn { column: usize },

    #[error("cannot allocate DP planes for a {rows} x {cols} grid")]
    ResourceExhausted { rows: usize, cols: usize },
}

impl AlignError {
    pub fn incentive_length(got: usize, expected: usize) -> Self {
        Self::IncentiveLength { got, expected }
    }

    pub fn resource_exhausted(rows: usize, cols: usize) -> Self {
        Self::ResourceExhausted { rows, cols }
    }
}

/// Result type for core alignment operations.
pub type AlignResult<T> = Result<T, AlignError>;
