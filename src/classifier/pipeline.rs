//! The trained claim classification pipeline.

use std::sync::Arc;

use log::info;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::classifier::{MultinomialNb, TfIdfVectorizer};
use crate::corpus::TrainingSet;
use crate::error::{ClaimcheckError, Result};

/// A frozen TF-IDF + Naive Bayes model for claim classification.
///
/// Training is eager: [`ClaimClassifier::train`] fits the vectorizer and
/// the classifier before returning, and the result is immutable. There is
/// no retraining or incremental update; construct a new classifier to
/// train on different data.
pub struct ClaimClassifier {
    vectorizer: TfIdfVectorizer,
    model: MultinomialNb,
}

impl ClaimClassifier {
    /// Train a classifier on the given set with a vocabulary cap.
    ///
    /// Fails if the set does not represent both classes.
    pub fn train(set: &TrainingSet, max_features: usize) -> Result<Self> {
        if !set.has_both_classes() {
            return Err(ClaimcheckError::training(
                "training data must contain both classes",
            ));
        }

        let analyzer: Arc<dyn Analyzer> = Arc::new(StandardAnalyzer::new()?);
        let documents: Vec<String> = set.examples().iter().map(|e| e.text.clone()).collect();
        let labels: Vec<bool> = set.examples().iter().map(|e| e.label).collect();

        let mut vectorizer = TfIdfVectorizer::new(analyzer, max_features);
        vectorizer.fit(&documents)?;

        let features: Vec<Vec<f64>> = documents
            .iter()
            .map(|doc| vectorizer.transform(doc))
            .collect::<Result<_>>()?;

        let model = MultinomialNb::fit(&features, &labels)?;

        info!(
            "trained classifier on {} examples, vocabulary size {}",
            set.len(),
            vectorizer.vocabulary_size()
        );

        Ok(ClaimClassifier { vectorizer, model })
    }

    /// Predict the class of a claim.
    ///
    /// Returns the predicted label (`true` for the true class) and the
    /// posterior probabilities `[p_false, p_true]`.
    pub fn predict(&self, claim: &str) -> Result<(bool, [f64; 2])> {
        let features = self.vectorizer.transform(claim)?;
        let probabilities = self.model.predict_proba(&features)?;
        Ok((probabilities[1] > probabilities[0], probabilities))
    }

    /// Size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}

impl std::fmt::Debug for ClaimClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimClassifier")
            .field("vectorizer", &self.vectorizer)
            .field("n_features", &self.model.n_features())
            .finish()
    }
}
