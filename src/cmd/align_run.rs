//! The `align` pipeline
//!
//! Reads a FASTA of amplicon reads and one amplicon reference, aligns
//! every read against the reference in parallel, extracts variants inside
//! the quantification window, and writes one TSV row per read.

use anyhow::{Context, Result};
use bio::io::fasta;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use super::args::AlignArgs;
use crate::align::global_align;
use crate::common::{write_output, AlignmentRecord};
use crate::config::{cut_site_incentive, AlignScoringSpec};
use crate::variants::{find_variants, include_range};

pub fn run(args: AlignArgs) -> Result<()> {
    if args.num_threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.num_threads)
            .build_global()
            .ok();
    }

    let amplicon_reader = fasta::Reader::from_file(&args.amplicon)?;
    let amplicon = amplicon_reader
        .records()
        .filter_map(|r| r.ok())
        .next()
        .context("amplicon FASTA contains no records")?;
    let amplicon_id = amplicon
        .id()
        .split_whitespace()
        .next()
        .unwrap_or("unknown")
        .to_string();
    let amplicon_seq = amplicon.seq().to_ascii_uppercase();
    let ref_len = amplicon_seq.len();

    let reads_reader = fasta::Reader::from_file(&args.reads)?;
    let reads: Vec<fasta::Record> = reads_reader.records().filter_map(|r| r.ok()).collect();

    if args.verbose {
        eprintln!(
            "Aligning {} reads against {} ({} bp)...",
            reads.len(),
            amplicon_id,
            ref_len
        );
    }

    let spec = AlignScoringSpec {
        match_score: args.match_score,
        mismatch_score: args.mismatch_score,
        n_mismatch_score: args.n_mismatch_score,
        n_match_score: args.n_match_score,
        gap_open: args.gap_open,
        gap_extend: args.gap_extend,
    };
    let matrix = spec.matrix();
    let incentive = cut_site_incentive(ref_len, &args.cut_sites, args.gap_incentive);
    let window = include_range(
        args.window_start.unwrap_or(0),
        args.window_end.unwrap_or(ref_len),
    );

    let bar = ProgressBar::new(reads.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .context("invalid progress bar template")?,
    );

    let records: Result<Vec<AlignmentRecord>> = reads
        .par_iter()
        .map(|read| {
            let read_id = read
                .id()
                .split_whitespace()
                .next()
                .unwrap_or("unknown")
                .to_string();
            let pair = global_align(
                read.seq(),
                &amplicon_seq,
                &matrix,
                &incentive,
                spec.gap_open,
                spec.gap_extend,
            )?;
            let report = find_variants(&pair.reference, &pair.read, &window)?;
            bar.inc(1);
            Ok(AlignmentRecord {
                read_id,
                amplicon_id: amplicon_id.clone(),
                match_percentage: pair.match_percentage,
                aligned_len: pair.len(),
                substitution_n: report.substitution_n,
                deletion_n: report.deletion_n,
                insertion_n: report.insertion_n,
                aligned_ref: String::from_utf8_lossy(&pair.reference).into_owned(),
                aligned_read: String::from_utf8_lossy(&pair.read).into_owned(),
            })
        })
        .collect();
    bar.finish_and_clear();

    let records = records?;
    if args.verbose {
        let modified = records
            .iter()
            .filter(|r| r.substitution_n > 0 || r.deletion_n != 0 || r.insertion_n > 0)
            .count();
        eprintln!("{} / {} reads modified in window", modified, records.len());
    }

    write_output(&records, args.out.as_ref())
}
