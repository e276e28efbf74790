//! Claim verification strategies.
//!
//! Two interchangeable strategies implement the [`Verifier`] trait:
//!
//! - [`LocalVerifier`]: the statistical classifier trained at startup
//! - [`RemoteVerifier`]: delegation to an LLM completion endpoint
//!
//! Exactly one implementation is constructed per process, selected at
//! startup; there is no runtime switching.
//!
//! # Example
//!
//! ```rust,no_run
//! use claimcheck::corpus::CorpusLoader;
//! use claimcheck::verifier::{self, Verifier};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = CorpusLoader::new("data/True.csv", "data/Fake.csv");
//! let verifier = verifier::new_local(&loader.load())?;
//!
//! let result = verifier.verify("The Moon orbits Earth")?;
//! println!("{} ({}%)", result.verdict, result.confidence);
//! # Ok(())
//! # }
//! ```

mod local;
mod parser;
mod remote;

pub use local::LocalVerifier;
pub use parser::parse_reply;
pub use remote::RemoteVerifier;

use crate::config::RemoteConfig;
use crate::corpus::TrainingSet;
use crate::error::Result;
use crate::result::VerificationResult;

/// Claim verifier trait.
///
/// Implementations classify a claim into a [`VerificationResult`]. Claims
/// must be non-empty after trimming; callers are responsible for rejecting
/// empty input before calling.
pub trait Verifier: Send + Sync {
    /// Verify a single claim.
    fn verify(&self, claim: &str) -> Result<VerificationResult>;

    /// Get the name of this verifier for debugging and logging.
    fn name(&self) -> &str;
}

/// Create a local verifier trained on the given set.
pub fn new_local(training_set: &TrainingSet) -> Result<Box<dyn Verifier>> {
    Ok(Box::new(LocalVerifier::new(training_set)?))
}

/// Create a remote verifier for the given endpoint configuration.
pub fn new_remote(config: RemoteConfig) -> Box<dyn Verifier> {
    Box::new(RemoteVerifier::new(config))
}
