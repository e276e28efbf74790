//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{ClaimcheckArgs, OutputFormat};
use crate::error::Result;
use crate::result::VerificationResult;

/// Rendered sources are capped at this many entries; the remote strategy
/// may parse more, but callers cap.
const MAX_RENDERED_SOURCES: usize = 3;

/// A verified claim together with its result, for JSON output.
#[derive(Debug, Serialize)]
pub struct ClaimReport<'a> {
    pub claim: &'a str,
    pub verdict: &'a str,
    pub confidence: u8,
    pub explanation: &'a str,
    pub sources: &'a [String],
}

/// Statistics about the loaded corpus and trained model.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStatsReport {
    pub source: String,
    pub total_examples: usize,
    pub true_examples: usize,
    pub false_examples: usize,
    pub vocabulary_size: usize,
}

/// Print a verification result in the requested format.
pub fn output_result(
    claim: &str,
    result: &VerificationResult,
    cli_args: &ClaimcheckArgs,
) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Json => {
            let report = ClaimReport {
                claim,
                verdict: result.verdict.as_str(),
                confidence: result.confidence,
                explanation: &result.explanation,
                sources: &result.sources,
            };
            print_json(&report, cli_args)?;
        }
        OutputFormat::Human => {
            println!();
            println!("Claim:       {claim}");
            println!("Verdict:     {}", result.verdict);
            println!("Confidence:  {}%", result.confidence);
            if !result.explanation.is_empty() {
                println!("Explanation: {}", result.explanation);
            }
            if !result.sources.is_empty() {
                println!("Key areas:");
                for source in result.sources.iter().take(MAX_RENDERED_SOURCES) {
                    println!("  - {source}");
                }
            }
        }
    }

    Ok(())
}

/// Print corpus statistics in the requested format.
pub fn output_corpus_stats(stats: &CorpusStatsReport, cli_args: &ClaimcheckArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Json => print_json(stats, cli_args)?,
        OutputFormat::Human => {
            println!("Corpus source:    {}", stats.source);
            println!("Total examples:   {}", stats.total_examples);
            println!("  true class:     {}", stats.true_examples);
            println!("  false class:    {}", stats.false_examples);
            println!("Vocabulary size:  {}", stats.vocabulary_size);
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, cli_args: &ClaimcheckArgs) -> Result<()> {
    let rendered = if cli_args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
