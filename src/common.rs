use anyhow::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// One output row of the `align` pipeline: a read aligned against the
/// amplicon plus its windowed variant summary.
#[derive(Debug, Clone)]
pub struct AlignmentRecord {
    pub read_id: String,
    pub amplicon_id: String,
    pub match_percentage: f64,
    pub aligned_len: usize,
    pub substitution_n: usize,
    pub deletion_n: isize,
    pub insertion_n: usize,
    pub aligned_ref: String,
    pub aligned_read: String,
}

/// Write records as tab-separated rows to stdout or a file.
pub fn write_output(records: &[AlignmentRecord], out_path: Option<&PathBuf>) -> Result<()> {
    let stdout = io::stdout();
    let mut writer: Box<dyn Write> = if let Some(path) = out_path {
        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(BufWriter::new(stdout.lock()))
    };

    for rec in records {
        writeln!(
            writer,
            "{}\t{}\t{:.3}\t{}\t{}\t{}\t{}\t{}\t{}",
            rec.read_id,
            rec.amplicon_id,
            rec.match_percentage,
            rec.aligned_len,
            rec.substitution_n,
            rec.deletion_n,
            rec.insertion_n,
            rec.aligned_ref,
            rec.aligned_read
        )?;
    }
    Ok(())
}
