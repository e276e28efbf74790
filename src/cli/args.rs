//! Command line argument parsing for the Claimcheck CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Claimcheck - verify factual claims from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "claimcheck")]
#[command(about = "Classify factual claims as true, false, or unverifiable")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ClaimcheckArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ClaimcheckArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Verify a single claim
    Verify(VerifyArgs),

    /// Verify claims interactively from standard input
    Interactive(InteractiveArgs),

    /// Show statistics about the training corpus
    #[command(name = "corpus-stats")]
    CorpusStats(CorpusArgs),
}

/// Arguments for verifying a single claim
#[derive(Parser, Debug, Clone)]
pub struct VerifyArgs {
    /// The claim to verify
    #[arg(value_name = "CLAIM")]
    pub claim: String,

    /// Verification strategy
    #[arg(short, long, value_enum, default_value = "local")]
    pub strategy: StrategyKind,

    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Verification strategy
    #[arg(short, long, value_enum, default_value = "local")]
    pub strategy: StrategyKind,

    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Corpus file locations for the local strategy
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// CSV file with true-class news rows
    #[arg(long, value_name = "FILE", default_value = "data/True.csv")]
    pub true_corpus: PathBuf,

    /// CSV file with fake/false-class news rows
    #[arg(long, value_name = "FILE", default_value = "data/Fake.csv")]
    pub fake_corpus: PathBuf,
}

/// Which verification strategy to construct
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// The locally trained statistical classifier
    Local,
    /// The remote completion endpoint
    Remote,
}

/// Output format for results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}
