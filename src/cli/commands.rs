//! Command implementations for the Claimcheck CLI.

use std::io::{self, BufRead, Write};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::RemoteConfig;
use crate::corpus::{CorpusLoader, CorpusSource};
use crate::error::{ClaimcheckError, Result};
use crate::verifier::{self, LocalVerifier, Verifier};

/// Execute a CLI command.
pub fn execute_command(args: ClaimcheckArgs) -> Result<()> {
    match &args.command {
        Command::Verify(verify_args) => verify_claim(verify_args.clone(), &args),
        Command::Interactive(interactive_args) => {
            run_interactive(interactive_args.clone(), &args)
        }
        Command::CorpusStats(corpus_args) => show_corpus_stats(corpus_args.clone(), &args),
    }
}

/// Construct the selected verification strategy.
///
/// The local strategy loads the corpus and trains eagerly, so this is
/// where startup cost lives.
fn build_verifier(
    strategy: StrategyKind,
    corpus: &CorpusArgs,
    cli_args: &ClaimcheckArgs,
) -> Result<Box<dyn Verifier>> {
    match strategy {
        StrategyKind::Local => {
            if cli_args.verbosity() > 1 {
                println!("Training local model...");
            }
            let loader = CorpusLoader::new(&corpus.true_corpus, &corpus.fake_corpus);
            verifier::new_local(&loader.load())
        }
        StrategyKind::Remote => Ok(verifier::new_remote(RemoteConfig::from_env())),
    }
}

/// Trim a raw claim, rejecting empty input before it reaches the core.
fn validated_claim(raw: &str) -> Result<&str> {
    let claim = raw.trim();
    if claim.is_empty() {
        return Err(ClaimcheckError::invalid_input("claim must not be empty"));
    }
    Ok(claim)
}

/// Verify a single claim and print the result.
fn verify_claim(args: VerifyArgs, cli_args: &ClaimcheckArgs) -> Result<()> {
    let claim = validated_claim(&args.claim)?;
    let verifier = build_verifier(args.strategy, &args.corpus, cli_args)?;

    let result = verifier.verify(claim)?;
    output_result(claim, &result, cli_args)
}

/// Read claims from stdin until EOF or a quit command.
fn run_interactive(args: InteractiveArgs, cli_args: &ClaimcheckArgs) -> Result<()> {
    let verifier = build_verifier(args.strategy, &args.corpus, cli_args)?;

    if cli_args.verbosity() > 0 {
        println!("Enter a claim to verify (quit to exit).");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("claim> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };

        let claim = line.trim();
        if claim.is_empty() {
            println!("Please enter a claim.");
            continue;
        }
        if claim.eq_ignore_ascii_case("quit") || claim.eq_ignore_ascii_case("exit") {
            break;
        }

        let result = verifier.verify(claim)?;
        output_result(claim, &result, cli_args)?;
    }

    Ok(())
}

/// Load the corpus, train a model, and report what came out.
fn show_corpus_stats(args: CorpusArgs, cli_args: &ClaimcheckArgs) -> Result<()> {
    let loader = CorpusLoader::new(&args.true_corpus, &args.fake_corpus);
    let training_set = loader.load();
    let (false_examples, true_examples) = training_set.class_counts();

    let local = LocalVerifier::new(&training_set)?;

    let stats = CorpusStatsReport {
        source: match training_set.source() {
            CorpusSource::Files => "files".to_string(),
            CorpusSource::Embedded => "embedded fallback".to_string(),
        },
        total_examples: training_set.len(),
        true_examples,
        false_examples,
        vocabulary_size: local.vocabulary_size(),
    };

    output_corpus_stats(&stats, cli_args)
}
