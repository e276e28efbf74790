//! Tokenizer trait and implementations.

pub mod regex;

pub use regex::RegexTokenizer;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Splits raw text into a stream of tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer for debugging and logging.
    fn name(&self) -> &'static str;
}
