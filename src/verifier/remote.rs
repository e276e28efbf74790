//! Remote verification strategy.
//!
//! Formats a claim into a fixed prompt, sends it to the completion
//! endpoint with one blocking request, and parses the structured text
//! reply. Transport and API failures never propagate: they are converted
//! into an error-verdict result at the verify boundary. There is no
//! retry or timeout handling; one request, one result.

use log::{debug, warn};
use reqwest::blocking::Client;
use serde_json::{Value, json};

use crate::config::RemoteConfig;
use crate::error::{ClaimcheckError, Result};
use crate::result::VerificationResult;
use crate::verifier::{Verifier, parse_reply};

/// System preamble prepended to every prompt.
const SYSTEM_PREAMBLE: &str =
    "You are an expert fact-checker and journalist with deep knowledge across many domains.";

/// Verifies claims by delegating to a remote completion endpoint.
pub struct RemoteVerifier {
    config: RemoteConfig,
    client: Client,
}

impl RemoteVerifier {
    /// Create a verifier for the given endpoint configuration.
    pub fn new(config: RemoteConfig) -> Self {
        RemoteVerifier {
            config,
            client: Client::new(),
        }
    }

    /// Build the verification prompt for a claim.
    pub fn build_prompt(claim: &str) -> String {
        format!(
            r#"You are a professional fact-checker for journalism. Analyze the following claim and determine its accuracy.

Claim: "{claim}"

Provide your response in the following format:

VERDICT: [TRUE/FALSE/PARTIALLY_TRUE/UNVERIFIABLE]
CONFIDENCE: [0-100]%
EXPLANATION: [Detailed explanation of why this claim is true, false, partially true, or unverifiable. Include relevant context and reasoning.]
SOURCES: [List key areas or types of information that would support this verification, separated by semicolons]

Be thorough, objective, and cite your reasoning clearly."#
        )
    }

    /// Send one completion request and return the reply text.
    fn request_completion(&self, prompt: &str) -> Result<String> {
        let full_prompt = format!("{SYSTEM_PREAMBLE}\n\n{prompt}");
        let body = json!({
            "contents": [{
                "parts": [{ "text": full_prompt }]
            }],
            "generationConfig": {
                "temperature": 0.3,
                "maxOutputTokens": 1000,
            }
        });

        debug!("requesting completion from model {}", self.config.model);

        let response = self
            .client
            .post(self.config.completion_url())
            .json(&body)
            .send()?
            .error_for_status()?;

        let reply: Value = response.json()?;
        extract_reply_text(&reply)
    }
}

/// Pull the completion text out of the endpoint's JSON reply.
fn extract_reply_text(reply: &Value) -> Result<String> {
    reply["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ClaimcheckError::remote("reply contains no candidate text"))
}

impl Verifier for RemoteVerifier {
    fn verify(&self, claim: &str) -> Result<VerificationResult> {
        let prompt = Self::build_prompt(claim);

        match self.request_completion(&prompt) {
            Ok(reply) => Ok(parse_reply(&reply)),
            Err(e) => {
                warn!("remote verification failed: {e}");
                Ok(VerificationResult::from_failure(format!(
                    "Error during verification: {e}"
                )))
            }
        }
    }

    fn name(&self) -> &str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Verdict;

    #[test]
    fn test_prompt_embeds_claim_and_fields() {
        let prompt = RemoteVerifier::build_prompt("The sky is blue");

        assert!(prompt.contains("Claim: \"The sky is blue\""));
        assert!(prompt.contains("VERDICT:"));
        assert!(prompt.contains("CONFIDENCE:"));
        assert!(prompt.contains("EXPLANATION:"));
        assert!(prompt.contains("SOURCES:"));
    }

    #[test]
    fn test_extract_reply_text() {
        let reply = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "VERDICT: TRUE" }]
                }
            }]
        });
        assert_eq!(extract_reply_text(&reply).unwrap(), "VERDICT: TRUE");
    }

    #[test]
    fn test_extract_reply_text_missing_candidates() {
        let reply = json!({ "candidates": [] });
        assert!(extract_reply_text(&reply).is_err());
    }

    #[test]
    fn test_network_failure_becomes_error_result() {
        // Nothing listens on this endpoint; the request fails immediately
        // and must surface as an error-verdict result, not an Err.
        let config = RemoteConfig::new("test-key", "test-model", "http://127.0.0.1:1");
        let verifier = RemoteVerifier::new(config);

        let result = verifier.verify("The sky is blue").unwrap();

        assert_eq!(result.verdict, Verdict::Error);
        assert_eq!(result.confidence, 0);
        assert!(!result.explanation.is_empty());
        assert!(result.sources.is_empty());
    }
}
