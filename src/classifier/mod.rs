//! Statistical claim classification.
//!
//! The local verification strategy is a supervised text-classification
//! pipeline: a TF-IDF feature extractor composed with a multinomial Naive
//! Bayes classifier, trained once at startup and frozen afterwards.
//!
//! # Architecture
//!
//! - [`TfIdfVectorizer`] - feature extraction over a capped vocabulary
//! - [`MultinomialNb`] - probabilistic classifier exposing per-class
//!   posteriors
//! - [`ClaimClassifier`] - the trained pipeline; owns both and stays
//!   immutable for the process lifetime

pub mod naive_bayes;
pub mod pipeline;
pub mod tfidf;

pub use naive_bayes::MultinomialNb;
pub use pipeline::ClaimClassifier;
pub use tfidf::TfIdfVectorizer;

/// Vocabulary cap when training on the full news corpus.
pub const CORPUS_MAX_FEATURES: usize = 5000;

/// Vocabulary cap when training on the embedded fallback dataset. The
/// small corpus needs a small vocabulary to avoid degenerate sparse
/// features.
pub const FALLBACK_MAX_FEATURES: usize = 100;
