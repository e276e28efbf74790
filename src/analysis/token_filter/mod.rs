//! Token filter trait and implementations.

pub mod lowercase;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Transforms a token stream, e.g. by normalizing or removing tokens.
pub trait Filter: Send + Sync {
    /// Apply this filter to the token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter for debugging and logging.
    fn name(&self) -> &'static str;
}
