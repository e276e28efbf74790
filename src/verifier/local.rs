//! Local statistical verification strategy.

use crate::classifier::{CORPUS_MAX_FEATURES, ClaimClassifier, FALLBACK_MAX_FEATURES};
use crate::corpus::{CorpusSource, TrainingSet};
use crate::error::Result;
use crate::result::VerificationResult;
use crate::topics;
use crate::verdict;
use crate::verifier::Verifier;

/// Verifies claims with the locally trained classifier.
///
/// Training happens once, in [`LocalVerifier::new`]; a degenerate
/// training set makes construction fail. After construction the model is
/// frozen, so repeated calls with the same claim return the same verdict
/// and confidence.
pub struct LocalVerifier {
    classifier: ClaimClassifier,
}

impl LocalVerifier {
    /// Train the classifier and build the verifier.
    ///
    /// The vocabulary cap depends on the corpus provenance: the full news
    /// corpus supports a large vocabulary, the embedded fallback needs a
    /// small one.
    pub fn new(training_set: &TrainingSet) -> Result<Self> {
        let max_features = match training_set.source() {
            CorpusSource::Files => CORPUS_MAX_FEATURES,
            CorpusSource::Embedded => FALLBACK_MAX_FEATURES,
        };

        let classifier = ClaimClassifier::train(training_set, max_features)?;
        Ok(LocalVerifier { classifier })
    }

    /// Size of the trained vocabulary, for diagnostics.
    pub fn vocabulary_size(&self) -> usize {
        self.classifier.vocabulary_size()
    }
}

impl Verifier for LocalVerifier {
    fn verify(&self, claim: &str) -> Result<VerificationResult> {
        let (predicted_true, probabilities) = self.classifier.predict(claim)?;
        let decision = verdict::decide(predicted_true, &probabilities);

        Ok(VerificationResult {
            verdict: decision.verdict,
            confidence: decision.confidence,
            explanation: decision.explanation.to_string(),
            sources: topics::tag(claim),
        })
    }

    fn name(&self) -> &str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::embedded_training_set;
    use crate::corpus::{LabeledExample, TrainingSet};
    use crate::result::Verdict;

    #[test]
    fn test_verify_yields_valid_result() {
        let verifier = LocalVerifier::new(&embedded_training_set()).unwrap();
        let result = verifier.verify("The Earth revolves around the Sun").unwrap();

        assert!(result.confidence <= 100);
        assert!(matches!(
            result.verdict,
            Verdict::True | Verdict::False | Verdict::Unverifiable
        ));
        assert!(!result.explanation.is_empty());
        assert!(!result.sources.is_empty());
        assert!(result.sources.len() <= 3);
    }

    #[test]
    fn test_verify_is_idempotent() {
        let verifier = LocalVerifier::new(&embedded_training_set()).unwrap();

        let first = verifier.verify("Goldfish have a 3-second memory").unwrap();
        let second = verifier.verify("Goldfish have a 3-second memory").unwrap();

        assert_eq!(first.verdict, second.verdict);
        assert_eq!(first.confidence, second.confidence);
    }

    #[test]
    fn test_unmatched_claim_gets_default_sources() {
        let verifier = LocalVerifier::new(&embedded_training_set()).unwrap();
        let result = verifier.verify("Paris is the capital of France").unwrap();

        assert_eq!(
            result.sources,
            vec!["general knowledge", "scientific consensus"]
        );
    }

    #[test]
    fn test_degenerate_training_set_fails_construction() {
        let set = TrainingSet::new(
            vec![
                LabeledExample::new("one", true),
                LabeledExample::new("two", true),
            ],
            crate::corpus::CorpusSource::Embedded,
        );
        assert!(LocalVerifier::new(&set).is_err());
    }

    #[test]
    fn test_never_emits_partially_true_or_error() {
        let verifier = LocalVerifier::new(&embedded_training_set()).unwrap();
        for claim in [
            "The sky is blue",
            "The Moon is made of cheese",
            "Completely novel words nowhere in training",
        ] {
            let result = verifier.verify(claim).unwrap();
            assert!(!matches!(
                result.verdict,
                Verdict::PartiallyTrue | Verdict::Error
            ));
        }
    }
}
