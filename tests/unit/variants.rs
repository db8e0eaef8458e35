//! Variant extraction over aligned pairs

use crispalign::variants::{find_variants, include_range, VariantReport};
use rustc_hash::FxHashSet;

fn full_window(ref_len: usize) -> FxHashSet<isize> {
    include_range(0, ref_len)
}

#[test]
fn test_mixed_events() {
    // substitution at 1, deletion [4, 6), insertion after 6
    let aligned_ref = b"ATCGATC-G";
    let aligned_read = b"AGCG--CTG";
    let r = find_variants(aligned_ref, aligned_read, &full_window(8)).unwrap();
    assert_eq!(r.all_substitution_positions, vec![1]);
    assert_eq!(r.all_substitution_values, vec![b'G']);
    assert_eq!(r.all_deletion_coordinates, vec![(4, 6)]);
    assert_eq!(r.all_insertion_coordinates, vec![(6, 7)]);
    assert_eq!(r.substitution_n, 1);
    assert_eq!(r.deletion_n, 2);
    assert_eq!(r.insertion_n, 1);
}

#[test]
fn test_gap_widths_sum_to_gap_columns() {
    // two deletion runs; interval widths must add up to the read gap count
    let aligned_ref = b"AAAAAAAATTTTCCCC";
    let aligned_read = b"AAAA----TTTT--CC";
    let r = find_variants(aligned_ref, aligned_read, &full_window(16)).unwrap();
    assert_eq!(r.all_deletion_coordinates, vec![(4, 8), (12, 14)]);
    let width_sum: isize = r
        .all_deletion_coordinates
        .iter()
        .map(|(s, e)| e - s)
        .sum();
    let gap_columns = aligned_read.iter().filter(|&&b| b == b'-').count() as isize;
    assert_eq!(width_sum, gap_columns);
    assert_eq!(r.deletion_n, gap_columns);
}

#[test]
fn test_insertion_sizes_sum_to_ref_gap_columns() {
    let aligned_ref = b"AT--CG-TAC";
    let aligned_read = b"ATGGCGCTAC";
    let r = find_variants(aligned_ref, aligned_read, &full_window(7)).unwrap();
    let size_sum: usize = r.all_insertion_sizes.iter().sum();
    let gap_columns = aligned_ref.iter().filter(|&&b| b == b'-').count();
    assert_eq!(size_sum, gap_columns);
    assert_eq!(r.all_insertion_coordinates, vec![(1, 2), (3, 4)]);
}

#[test]
fn test_windowed_lists_are_subsets() {
    let aligned_ref = b"ATCGATC-GTTA";
    let aligned_read = b"AGCG--CTGTTC";
    let all = full_window(11);
    let narrow: FxHashSet<isize> = include_range(3, 7);

    let r_all = find_variants(aligned_ref, aligned_read, &all).unwrap();
    let r_narrow = find_variants(aligned_ref, aligned_read, &narrow).unwrap();

    // full window: windowed lists equal the all_ lists
    assert_eq!(r_all.substitution_positions, r_all.all_substitution_positions);
    assert_eq!(r_all.deletion_coordinates, r_all.all_deletion_coordinates);
    assert_eq!(r_all.insertion_coordinates, r_all.all_insertion_coordinates);

    // narrow window: windowed lists are subsets
    for p in &r_narrow.substitution_positions {
        assert!(r_narrow.all_substitution_positions.contains(p));
    }
    for c in &r_narrow.deletion_coordinates {
        assert!(r_narrow.all_deletion_coordinates.contains(c));
    }
    for c in &r_narrow.insertion_coordinates {
        assert!(r_narrow.all_insertion_coordinates.contains(c));
    }
    // the substitution at 1 and the trailing substitution fall outside
    assert!(r_narrow.substitution_positions.len() < r_narrow.all_substitution_positions.len());
}

#[test]
fn test_ref_positions_mapping() {
    let aligned_ref = b"AT-CG";
    let aligned_read = b"ATTCG";
    let r = find_variants(aligned_ref, aligned_read, &full_window(4)).unwrap();
    assert_eq!(r.ref_positions, vec![0, 1, -2, 2, 3]);
}

#[test]
fn test_deletion_closed_against_insertion_column() {
    // A deletion run abutting an insertion column closes against the
    // column's negative sentinel; the recorded interval is empty and the
    // size non-positive. Such pairs never come out of the aligner, but the
    // bookkeeping is deliberate.
    let r = find_variants(b"AA-CC", b"--GCC", &full_window(4)).unwrap();
    assert_eq!(r.all_deletion_coordinates, vec![(0, -2)]);
    assert_eq!(r.all_deletion_sizes, vec![-2]);
    assert!(r.all_deletion_positions.is_empty());
    assert!(r.deletion_coordinates.is_empty());
    assert_eq!(r.deletion_n, 0);
    assert_eq!(r.all_insertion_coordinates, vec![(1, 2)]);
}

#[test]
fn test_substitution_windowing() {
    let window: FxHashSet<isize> = [3].into_iter().collect();
    let r = find_variants(b"ATCGATCG", b"ATCTATTG", &window).unwrap();
    assert_eq!(r.all_substitution_positions, vec![3, 6]);
    assert_eq!(r.substitution_positions, vec![3]);
    assert_eq!(r.substitution_values, vec![b'T']);
    assert_eq!(r.substitution_n, 1);
}

#[test]
fn test_report_default_is_empty() {
    let r = VariantReport::default();
    assert!(r.ref_positions.is_empty());
    assert_eq!(r.insertion_n, 0);
    assert_eq!(r.deletion_n, 0);
    assert_eq!(r.substitution_n, 0);
}
