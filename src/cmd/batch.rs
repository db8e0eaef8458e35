//! JSON batch alignment
//!
//! Wire-compatible with the CRISPResso2 comparison harness: each case
//! supplies `seqJ` (read), `seqI` (reference), `gapIncentive`, and optional
//! `gapOpen`/`gapExtend`; each answer carries `alignedSeqJ`, `alignedSeqI`
//! and `matchPercentage`. An array input yields an array of indexed
//! envelopes; a single-object input yields one envelope without an index.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use super::args::BatchArgs;
use crate::align::{global_align, ScoringMatrix};

fn default_gap_open() -> i32 {
    -20
}

fn default_gap_extend() -> i32 {
    -2
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignCase {
    pub seq_j: String,
    pub seq_i: String,
    pub gap_incentive: Vec<i32>,
    #[serde(default = "default_gap_open")]
    pub gap_open: i32,
    #[serde(default = "default_gap_extend")]
    pub gap_extend: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseResult {
    pub aligned_seq_j: String,
    pub aligned_seq_i: String,
    pub match_percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct Envelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CaseResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run one case with the default scoring matrix.
pub fn run_case(case: &AlignCase) -> Result<CaseResult> {
    let matrix = ScoringMatrix::default();
    let pair = global_align(
        case.seq_j.as_bytes(),
        case.seq_i.as_bytes(),
        &matrix,
        &case.gap_incentive,
        case.gap_open,
        case.gap_extend,
    )?;
    Ok(CaseResult {
        aligned_seq_j: String::from_utf8_lossy(&pair.read).into_owned(),
        aligned_seq_i: String::from_utf8_lossy(&pair.reference).into_owned(),
        match_percentage: pair.match_percentage,
    })
}

fn envelope(index: Option<usize>, outcome: Result<CaseResult>) -> Envelope {
    match outcome {
        Ok(result) => Envelope {
            index,
            success: true,
            result: Some(result),
            error: None,
        },
        Err(err) => Envelope {
            index,
            success: false,
            result: None,
            error: Some(err.to_string()),
        },
    }
}

pub fn run(args: BatchArgs) -> Result<()> {
    let mut input = String::new();
    match &args.input {
        Some(path) => {
            File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?
                .read_to_string(&mut input)?;
        }
        None => {
            io::stdin().read_to_string(&mut input)?;
        }
    }

    let stdout = io::stdout();
    let mut writer: Box<dyn Write> = if let Some(path) = &args.out {
        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(BufWriter::new(stdout.lock()))
    };

    let value: serde_json::Value = serde_json::from_str(&input).context("invalid JSON input")?;
    if value.is_array() {
        let cases: Vec<AlignCase> = serde_json::from_value(value)?;
        let envelopes: Vec<Envelope> = cases
            .iter()
            .enumerate()
            .map(|(i, case)| envelope(Some(i), run_case(case)))
            .collect();
        serde_json::to_writer(&mut writer, &envelopes)?;
    } else {
        let case: AlignCase = serde_json::from_value(value)?;
        serde_json::to_writer(&mut writer, &envelope(None, run_case(&case)))?;
    }
    writeln!(writer)?;
    Ok(())
}
