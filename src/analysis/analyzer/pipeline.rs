//! Pipeline analyzer that combines a tokenizer with a chain of filters.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer built from a tokenizer and ordered filters.
///
/// Filters are applied sequentially in the order they were added.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use claimcheck::analysis::analyzer::{Analyzer, PipelineAnalyzer};
/// use claimcheck::analysis::token_filter::{LowercaseFilter, StopFilter};
/// use claimcheck::analysis::tokenizer::RegexTokenizer;
///
/// let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
/// let analyzer = PipelineAnalyzer::new(tokenizer)
///     .add_filter(Arc::new(LowercaseFilter::new()))
///     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])));
///
/// let tokens: Vec<_> = analyzer.analyze("Hello THE world AND test").unwrap().collect();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].text, "hello");
/// assert_eq!(tokens[1].text, "world");
/// assert_eq!(tokens[2].text, "test");
/// ```
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &self.filters.len())
            .finish()
    }
}
