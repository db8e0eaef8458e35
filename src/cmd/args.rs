use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// FASTA file of reads to align
    #[arg(short, long)]
    pub reads: PathBuf,
    /// FASTA file holding the amplicon reference (first record is used)
    #[arg(short, long)]
    pub amplicon: PathBuf,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    // Scoring parameters - CRISPResso2 defaults
    #[arg(long, default_value_t = 5)]
    pub match_score: i32,
    #[arg(long, default_value_t = -4)]
    pub mismatch_score: i32,
    #[arg(long, default_value_t = -2)]
    pub n_mismatch_score: i32,
    #[arg(long, default_value_t = -1)]
    pub n_match_score: i32,
    #[arg(long, default_value_t = -20)]
    pub gap_open: i32,
    #[arg(long, default_value_t = -2)]
    pub gap_extend: i32,
    /// Predicted cut sites (0-based offset of the base left of the cut);
    /// gaps opening at these columns collect the incentive bonus
    #[arg(long = "cut-site")]
    pub cut_sites: Vec<usize>,
    /// Bonus added to the incentive vector at each cut site
    #[arg(long, default_value_t = 1)]
    pub gap_incentive: i32,
    /// Start of the half-open quantification window (reference coords)
    #[arg(long)]
    pub window_start: Option<usize>,
    /// End of the half-open quantification window (reference coords)
    #[arg(long)]
    pub window_end: Option<usize>,
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON input file; stdin when omitted. An array input yields an array
    /// of indexed envelopes, a single object yields one envelope.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}
