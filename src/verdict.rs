//! Verdict policy for the local classifier.
//!
//! Maps a raw class prediction and its posterior probabilities to a final
//! verdict, confidence score, and canned explanation. The local classifier
//! is binary; it never produces [`Verdict::PartiallyTrue`], which only the
//! remote strategy's reply parser can emit.

use crate::result::Verdict;

/// Predictions below this confidence are downgraded to unverifiable.
///
/// A fixed policy constant, not a learned value.
pub const CONFIDENCE_FLOOR: u8 = 65;

const TRUE_EXPLANATION: &str =
    "Based on the model's analysis, this claim appears to be factually accurate.";
const FALSE_EXPLANATION: &str =
    "Based on the model's analysis, this claim appears to be false or misleading.";
const UNCERTAIN_EXPLANATION: &str =
    "The model is not confident about this claim. Further research is recommended.";

/// A policy decision for one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The final verdict after the confidence floor is applied.
    pub verdict: Verdict,
    /// Confidence percentage, `round(max(probabilities) * 100)`.
    pub confidence: u8,
    /// Canned explanation selected by the final verdict.
    pub explanation: &'static str,
}

/// Decide the verdict for a predicted label and its class probabilities.
///
/// The tentative verdict follows the predicted label; if the confidence
/// falls below [`CONFIDENCE_FLOOR`], it is overridden to unverifiable
/// regardless of the label.
pub fn decide(predicted_true: bool, probabilities: &[f64; 2]) -> Decision {
    let max_probability = probabilities[0].max(probabilities[1]);
    let confidence = (max_probability * 100.0).round() as u8;

    let verdict = if confidence < CONFIDENCE_FLOOR {
        Verdict::Unverifiable
    } else if predicted_true {
        Verdict::True
    } else {
        Verdict::False
    };

    let explanation = match verdict {
        Verdict::True => TRUE_EXPLANATION,
        Verdict::False => FALSE_EXPLANATION,
        _ => UNCERTAIN_EXPLANATION,
    };

    Decision {
        verdict,
        confidence,
        explanation,
    }
}
