//! Multinomial Naive Bayes classifier.

use crate::error::{ClaimcheckError, Result};

/// A two-class multinomial Naive Bayes model over TF-IDF features.
///
/// Class 0 is the false class, class 1 the true class. Likelihoods use
/// add-one (Laplace) smoothing and are accumulated in log space;
/// [`MultinomialNb::predict_proba`] exposes normalized per-class
/// posteriors, which downstream confidence scoring depends on.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    /// Log prior for each class.
    class_log_prior: [f64; 2],
    /// Smoothed log likelihood per class and feature.
    feature_log_prob: [Vec<f64>; 2],
}

impl MultinomialNb {
    /// Fit the model on feature vectors and their boolean labels.
    ///
    /// Fails on an empty set, mismatched dimensions, or a single-class
    /// corpus; a classifier trained on one class would silently always
    /// predict it.
    pub fn fit(features: &[Vec<f64>], labels: &[bool]) -> Result<Self> {
        if features.is_empty() {
            return Err(ClaimcheckError::training("training set is empty"));
        }
        if features.len() != labels.len() {
            return Err(ClaimcheckError::training(format!(
                "feature/label count mismatch: {} vs {}",
                features.len(),
                labels.len()
            )));
        }

        let n_features = features[0].len();
        if let Some(bad) = features.iter().find(|f| f.len() != n_features) {
            return Err(ClaimcheckError::training(format!(
                "inconsistent feature dimensions: expected {}, found {}",
                n_features,
                bad.len()
            )));
        }

        let true_count = labels.iter().filter(|&&l| l).count();
        let false_count = labels.len() - true_count;
        if true_count == 0 || false_count == 0 {
            return Err(ClaimcheckError::training(
                "training data must contain both classes",
            ));
        }

        let n_samples = labels.len() as f64;
        let class_log_prior = [
            (false_count as f64 / n_samples).ln(),
            (true_count as f64 / n_samples).ln(),
        ];

        // Per-class feature totals
        let mut counts = [vec![0.0; n_features], vec![0.0; n_features]];
        for (vector, &label) in features.iter().zip(labels) {
            let class = usize::from(label);
            for (j, &value) in vector.iter().enumerate() {
                counts[class][j] += value;
            }
        }

        let feature_log_prob = counts.map(|class_counts| {
            let total: f64 = class_counts.iter().sum();
            class_counts
                .iter()
                .map(|&count| ((count + 1.0) / (total + n_features as f64)).ln())
                .collect::<Vec<f64>>()
        });

        Ok(MultinomialNb {
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Posterior probabilities `[p_false, p_true]` for one feature vector.
    pub fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2]> {
        let n_features = self.feature_log_prob[0].len();
        if features.len() != n_features {
            return Err(ClaimcheckError::training(format!(
                "feature dimension mismatch: expected {}, found {}",
                n_features,
                features.len()
            )));
        }

        let joint: [f64; 2] = [0usize, 1].map(|class| {
            self.class_log_prior[class]
                + features
                    .iter()
                    .zip(&self.feature_log_prob[class])
                    .map(|(x, lp)| x * lp)
                    .sum::<f64>()
        });

        // Normalize via log-sum-exp
        let max = joint[0].max(joint[1]);
        let exp = joint.map(|j| (j - max).exp());
        let total = exp[0] + exp[1];

        Ok([exp[0] / total, exp[1] / total])
    }

    /// Number of features the model was fitted on.
    pub fn n_features(&self) -> usize {
        self.feature_log_prob[0].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable_training_data() -> (Vec<Vec<f64>>, Vec<bool>) {
        // Feature 0 fires for the true class, feature 1 for the false class.
        let features = vec![
            vec![1.0, 0.0],
            vec![0.9, 0.1],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![0.1, 0.9],
            vec![0.0, 1.0],
        ];
        let labels = vec![true, true, true, false, false, false];
        (features, labels)
    }

    #[test]
    fn test_fit_and_predict_separable() {
        let (features, labels) = separable_training_data();
        let model = MultinomialNb::fit(&features, &labels).unwrap();

        let probs = model.predict_proba(&[1.0, 0.0]).unwrap();
        assert!(probs[1] > probs[0]);

        let probs = model.predict_proba(&[0.0, 1.0]).unwrap();
        assert!(probs[0] > probs[1]);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let (features, labels) = separable_training_data();
        let model = MultinomialNb::fit(&features, &labels).unwrap();

        let probs = model.predict_proba(&[0.3, 0.7]).unwrap();
        assert!((probs[0] + probs[1] - 1.0).abs() < 1e-9);
        assert!(probs.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn test_single_class_fit_fails() {
        let features = vec![vec![1.0, 0.0], vec![0.5, 0.5]];
        let labels = vec![true, true];
        assert!(MultinomialNb::fit(&features, &labels).is_err());
    }

    #[test]
    fn test_empty_fit_fails() {
        assert!(MultinomialNb::fit(&[], &[]).is_err());
    }

    #[test]
    fn test_dimension_mismatch_fails() {
        let features = vec![vec![1.0, 0.0], vec![0.5]];
        let labels = vec![true, false];
        assert!(MultinomialNb::fit(&features, &labels).is_err());

        let (features, labels) = separable_training_data();
        let model = MultinomialNb::fit(&features, &labels).unwrap();
        assert!(model.predict_proba(&[1.0]).is_err());
    }

    #[test]
    fn test_all_zero_vector_falls_back_to_priors() {
        let features = vec![
            vec![1.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![0.0, 1.0],
        ];
        let labels = vec![true, true, false, false];
        let model = MultinomialNb::fit(&features, &labels).unwrap();

        // No evidence either way: posterior equals the (balanced) prior.
        let probs = model.predict_proba(&[0.0, 0.0]).unwrap();
        assert!((probs[0] - 0.5).abs() < 1e-9);
        assert!((probs[1] - 0.5).abs() < 1e-9);
    }
}
