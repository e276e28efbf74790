//! Integration tests for the remote verification strategy.
//!
//! The remote endpoint itself is not exercised; these tests cover the
//! reply parser contract and the failure conversion at the verify
//! boundary.

use claimcheck::config::RemoteConfig;
use claimcheck::result::Verdict;
use claimcheck::verifier::{RemoteVerifier, Verifier, parse_reply};

#[test]
fn test_canonical_reply_parses() {
    let result = parse_reply("VERDICT: TRUE\nCONFIDENCE: 90%\nEXPLANATION: x\nSOURCES: a; b");

    assert_eq!(result.verdict, Verdict::True);
    assert_eq!(result.confidence, 90);
    assert_eq!(result.explanation, "x");
    assert_eq!(result.sources, vec!["a", "b"]);
}

#[test]
fn test_verbose_model_reply_parses() {
    let reply = "\
Sure, here is my assessment.

VERDICT: PARTIALLY_TRUE
CONFIDENCE: 72
EXPLANATION: The core statistic is accurate, but the framing
omits the relevant time period and overstates the trend.
SOURCES: government statistics; economic research; news archives";

    let result = parse_reply(reply);

    assert_eq!(result.verdict, Verdict::PartiallyTrue);
    assert_eq!(result.confidence, 72);
    assert_eq!(
        result.explanation,
        "The core statistic is accurate, but the framing omits the relevant time period and overstates the trend."
    );
    assert_eq!(
        result.sources,
        vec!["government statistics", "economic research", "news archives"]
    );
}

#[test]
fn test_missing_fields_keep_defaults() {
    let result = parse_reply("VERDICT: FALSE\nEXPLANATION: nope");

    assert_eq!(result.verdict, Verdict::False);
    assert_eq!(result.confidence, 0);
    assert_eq!(result.explanation, "nope");
    assert!(result.sources.is_empty());
}

#[test]
fn test_unreachable_endpoint_yields_error_result() {
    let config = RemoteConfig::new("test-key", "test-model", "http://127.0.0.1:1");
    let verifier = RemoteVerifier::new(config);

    let result = verifier.verify("Water is wet").unwrap();

    assert_eq!(result.verdict, Verdict::Error);
    assert_eq!(result.confidence, 0);
    assert!(!result.explanation.is_empty());
    assert!(result.sources.is_empty());
}

#[test]
fn test_verifier_names() {
    let config = RemoteConfig::new("k", "m", "http://127.0.0.1:1");
    assert_eq!(RemoteVerifier::new(config).name(), "remote");
}
