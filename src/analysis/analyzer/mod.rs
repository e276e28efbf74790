//! Analyzer trait and implementations.
//!
//! Analyzers are the complete text processing pipeline: a tokenizer
//! followed by a filter chain. Two implementations are provided:
//!
//! - [`PipelineAnalyzer`] - custom tokenizer + filter chains
//! - [`StandardAnalyzer`] - regex tokenization, lowercasing, English stop
//!   word removal; the default for claim classification

pub mod pipeline;
pub mod standard;

pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Transforms raw text into a stream of analyzed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a token stream.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer for debugging and logging.
    fn name(&self) -> &str;
}
