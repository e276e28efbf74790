//! The shared verification result contract.
//!
//! Both verification strategies produce a [`VerificationResult`]; the
//! presentation layer renders it without knowing which strategy ran.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The classification outcome for a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// The claim appears to be factually accurate.
    True,
    /// The claim appears to be false or misleading.
    False,
    /// The claim mixes accurate and inaccurate elements. Only the remote
    /// strategy can produce this; the local classifier is binary.
    PartiallyTrue,
    /// The strategy could not reach a confident conclusion.
    Unverifiable,
    /// Verification itself failed (e.g. a remote transport error).
    Error,
}

impl Verdict {
    /// The wire/display form of the verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::True => "TRUE",
            Verdict::False => "FALSE",
            Verdict::PartiallyTrue => "PARTIALLY_TRUE",
            Verdict::Unverifiable => "UNVERIFIABLE",
            Verdict::Error => "ERROR",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of verifying a single claim.
///
/// Invariants: `confidence` is a percentage in 0..=100, and the local
/// strategy emits at most three `sources` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// The classification outcome.
    pub verdict: Verdict,
    /// Certainty in the verdict, as an integer percentage.
    pub confidence: u8,
    /// Free-text reasoning behind the verdict.
    pub explanation: String,
    /// Short topic strings naming areas that support the verification.
    pub sources: Vec<String>,
}

impl VerificationResult {
    /// Build the result for a failed verification attempt.
    ///
    /// Used by the remote strategy to convert transport and API failures
    /// into a well-formed result instead of propagating them.
    pub fn from_failure<S: Into<String>>(message: S) -> Self {
        VerificationResult {
            verdict: Verdict::Error,
            confidence: 0,
            explanation: message.into(),
            sources: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_wire_names() {
        assert_eq!(Verdict::True.as_str(), "TRUE");
        assert_eq!(Verdict::PartiallyTrue.as_str(), "PARTIALLY_TRUE");
        assert_eq!(
            serde_json::to_string(&Verdict::PartiallyTrue).unwrap(),
            "\"PARTIALLY_TRUE\""
        );
        assert_eq!(
            serde_json::from_str::<Verdict>("\"UNVERIFIABLE\"").unwrap(),
            Verdict::Unverifiable
        );
    }

    #[test]
    fn test_failure_result() {
        let result = VerificationResult::from_failure("connection refused");
        assert_eq!(result.verdict, Verdict::Error);
        assert_eq!(result.confidence, 0);
        assert_eq!(result.explanation, "connection refused");
        assert!(result.sources.is_empty());
    }
}
