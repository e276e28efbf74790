//! Text analysis pipeline for claim and corpus text.
//!
//! Raw text is turned into a token stream by an [`analyzer::Analyzer`],
//! which combines a tokenizer with a chain of token filters:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! The classifier's feature extractor consumes the resulting tokens; it
//! never sees raw text.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::Filter;
pub use tokenizer::Tokenizer;
