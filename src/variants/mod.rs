//! Indel and substitution extraction from an aligned pair
//!
//! Converts a gap-padded alignment into the variant report CRISPResso2
//! derives in find_indels_substitutions: per-event coordinates and sizes
//! for insertions, deletions and substitutions, each in an unfiltered
//! `all_*` flavor and a windowed flavor restricted to a caller-supplied
//! set of reference coordinates.
//!
//! Coordinate conventions: deletion intervals are half-open `[start, end)`
//! in reference coordinates; an insertion's `start` is the reference
//! coordinate immediately left of the gap run and `end` the coordinate
//! immediately right of it. `ref_positions` maps every aligned column to a
//! reference coordinate, with insertion columns flagged by the negated
//! coordinate (`-idx`, and `-1` while no reference base has been consumed).

use rustc_hash::FxHashSet;

use crate::align::traceback::GAP;
use crate::error::{AlignError, AlignResult};

/// Variant report over one aligned pair.
///
/// The `all_*` lists are unfiltered; the unprefixed lists keep only events
/// touching the inclusion window. Insertion position lists carry both
/// endpoints of each run (flattened pairs); `all_insertion_left_positions`
/// keeps just the left endpoints. The three counts summarize the windowed
/// lists: `substitution_n` counts events, `deletion_n` and `insertion_n`
/// sum sizes.
#[derive(Debug, Clone, Default)]
pub struct VariantReport {
    pub all_insertion_positions: Vec<isize>,
    pub all_insertion_left_positions: Vec<isize>,
    pub insertion_positions: Vec<isize>,
    pub all_insertion_coordinates: Vec<(isize, isize)>,
    pub insertion_coordinates: Vec<(isize, isize)>,
    pub all_insertion_sizes: Vec<usize>,
    pub insertion_sizes: Vec<usize>,

    pub all_deletion_positions: Vec<isize>,
    pub deletion_positions: Vec<isize>,
    pub all_deletion_coordinates: Vec<(isize, isize)>,
    pub deletion_coordinates: Vec<(isize, isize)>,
    /// Signed: a deletion closed against a trailing insertion column can
    /// record a non-positive width (see the trailing-close rule below).
    pub all_deletion_sizes: Vec<isize>,
    pub deletion_sizes: Vec<isize>,

    pub all_substitution_positions: Vec<isize>,
    pub substitution_positions: Vec<isize>,
    pub all_substitution_values: Vec<u8>,
    pub substitution_values: Vec<u8>,

    pub ref_positions: Vec<isize>,

    pub insertion_n: usize,
    pub deletion_n: isize,
    pub substitution_n: usize,
}

/// Build an inclusion set covering the half-open reference range
/// `[start, end)`.
pub fn include_range(start: usize, end: usize) -> FxHashSet<isize> {
    (start as isize..end as isize).collect()
}

/// Scan an aligned pair and report insertions, deletions and
/// substitutions, partitioned by `include_idx`.
///
/// Single pass over the columns. A substitution is a column where both
/// bases are real and differ, unless the read base is `N`. An insertion is
/// a run of reference gaps, closed when the next reference base arrives; a
/// run still open at the final column is left unreported, as the reference
/// does. A deletion is a run of read gaps; one still open at the final
/// column is closed against `ref_positions` of that column even when the
/// column is an insertion column (negative sentinel), again preserving the
/// reference behavior.
pub fn find_variants(
    aligned_ref: &[u8],
    aligned_read: &[u8],
    include_idx: &FxHashSet<isize>,
) -> AlignResult<VariantReport> {
    if aligned_ref.len() != aligned_read.len() {
        return Err(AlignError::UnequalAlignedLength {
            ref_len: aligned_ref.len(),
            read_len: aligned_read.len(),
        });
    }
    if let Some(column) = (0..aligned_ref.len()).find(|&c| aligned_ref[c] == GAP && aligned_read[c] == GAP)
    {
        return Err(AlignError::GapOnlyColumn { column });
    }

    let mut report = VariantReport::default();
    let seq_len = aligned_ref.len();

    let mut idx: isize = 0;
    let mut start_insertion: isize = -1;
    let mut current_insertion_size: usize = 0;
    let mut start_deletion: isize = -1;

    for c in 0..seq_len {
        let rc = aligned_ref[c];
        let qc = aligned_read[c];

        if rc != GAP {
            report.ref_positions.push(idx);

            if qc != GAP && rc != qc && qc != b'N' {
                report.all_substitution_positions.push(idx);
                report.all_substitution_values.push(qc);
                if include_idx.contains(&idx) {
                    report.substitution_positions.push(idx);
                    report.substitution_values.push(qc);
                }
            }

            if start_insertion != -1 {
                report.all_insertion_left_positions.push(start_insertion);
                report.all_insertion_positions.push(start_insertion);
                report.all_insertion_positions.push(idx);
                report.all_insertion_coordinates.push((start_insertion, idx));
                report.all_insertion_sizes.push(current_insertion_size);
                if include_idx.contains(&start_insertion) && include_idx.contains(&idx) {
                    report.insertion_coordinates.push((start_insertion, idx));
                    report.insertion_positions.push(start_insertion);
                    report.insertion_positions.push(idx);
                    report.insertion_sizes.push(current_insertion_size);
                }
                start_insertion = -1;
            }
            current_insertion_size = 0;
            idx += 1;
        } else {
            // Insertion column: does not map to the reference.
            report
                .ref_positions
                .push(if idx == 0 { -1 } else { -idx });
            if idx > 0 && start_insertion == -1 {
                start_insertion = idx - 1;
            }
            current_insertion_size += 1;
        }

        // Deletion runs are tracked independently of the branch above.
        if qc == GAP {
            if start_deletion == -1 {
                // The first two aligned columns anchor a deletion at 0.
                start_deletion = if c > 1 { report.ref_positions[c] } else { 0 };
            }
        } else if start_deletion != -1 {
            let end_deletion = report.ref_positions[c];
            close_deletion(&mut report, include_idx, start_deletion, end_deletion);
            start_deletion = -1;
        }
    }

    if start_deletion != -1 {
        let end_deletion = report.ref_positions[seq_len - 1];
        close_deletion(&mut report, include_idx, start_deletion, end_deletion);
    }

    report.substitution_n = report.substitution_positions.len();
    report.deletion_n = report.deletion_sizes.iter().sum();
    report.insertion_n = report.insertion_sizes.iter().sum();

    Ok(report)
}

fn close_deletion(
    report: &mut VariantReport,
    include_idx: &FxHashSet<isize>,
    start: isize,
    end: isize,
) {
    report.all_deletion_positions.extend(start..end);
    report.all_deletion_coordinates.push((start, end));
    report.all_deletion_sizes.push(end - start);
    if (start..end).any(|p| include_idx.contains(&p)) {
        report.deletion_positions.extend(start..end);
        report.deletion_coordinates.push((start, end));
        report.deletion_sizes.push(end - start);
    }
}
