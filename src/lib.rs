//! # Claimcheck
//!
//! A claim verification library for Rust.
//!
//! Claimcheck classifies short natural-language factual claims into a
//! verdict (true, false, partially true, unverifiable) with a confidence
//! score, a supporting explanation, and a short list of topic areas.
//!
//! ## Features
//!
//! - Local verification: a TF-IDF + multinomial Naive Bayes classifier
//!   trained at startup on a labeled news corpus
//! - Remote verification: delegation to an LLM completion endpoint with a
//!   tolerant structured-reply parser
//! - Flexible text analysis pipeline (tokenizer + filter chain)
//! - Embedded fallback corpus so the local strategy always trains

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod result;
pub mod topics;
pub mod verdict;
pub mod verifier;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
