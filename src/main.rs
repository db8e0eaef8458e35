use anyhow::Result;
use clap::{Parser, Subcommand};
use crispalign::cmd::args::{AlignArgs, BatchArgs};
use crispalign::cmd::{align_run, batch};

#[derive(Parser)]
#[command(name = "crispalign")]
#[command(version = "0.1.0")]
#[command(about = "CRISPResso2-compatible amplicon aligner and variant extractor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Align FASTA reads against an amplicon and report windowed variants
    Align(AlignArgs),

    /// JSON-in/JSON-out alignment (comparison-harness wire format)
    Batch(BatchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Align(args) => {
            align_run::run(args)?;
        }
        Commands::Batch(args) => {
            batch::run(args)?;
        }
    }
    Ok(())
}
