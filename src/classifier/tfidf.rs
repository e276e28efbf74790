//! TF-IDF vectorizer for text feature extraction.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// TF-IDF vectorizer with a bounded vocabulary.
///
/// `fit` builds the vocabulary and per-term inverse document frequencies
/// from the training corpus; `transform` projects any text onto that
/// frozen vocabulary. When the corpus contains more distinct terms than
/// `max_features`, the most frequent terms (by total occurrence count)
/// are kept.
pub struct TfIdfVectorizer {
    /// Vocabulary: word -> index mapping.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each word.
    idf: Vec<f64>,
    /// Total number of documents seen during training.
    n_documents: usize,
    /// Upper bound on vocabulary size.
    max_features: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("max_features", &self.max_features)
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new vectorizer with the given analyzer and vocabulary cap.
    pub fn new(analyzer: Arc<dyn Analyzer>, max_features: usize) -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            max_features,
            analyzer,
        }
    }

    /// Fit the vectorizer on training documents.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        self.n_documents = documents.len();
        let mut term_counts: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = self.tokenize(doc)?;
            for token in &tokens {
                *term_counts.entry(token.clone()).or_insert(0) += 1;
            }
            let unique_tokens: HashSet<&String> = tokens.iter().collect();
            for token in unique_tokens {
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
            }
        }

        // Keep the max_features most frequent terms. Ties break
        // alphabetically so the vocabulary is deterministic.
        let mut terms: Vec<(&String, &usize)> = term_counts.iter().collect();
        terms.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(self.max_features);

        let mut selected: Vec<&String> = terms.into_iter().map(|(term, _)| term).collect();
        selected.sort();

        let mut vocabulary = HashMap::with_capacity(selected.len());
        let mut idf = Vec::with_capacity(selected.len());
        for (idx, term) in selected.into_iter().enumerate() {
            let df = document_frequency.get(term).copied().unwrap_or(0);
            // IDF = log((N + 1) / (df + 1)) + 1
            idf.push(((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term.clone(), idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Out-of-vocabulary terms contribute nothing; that is expected for
    /// claims about topics the corpus never mentions.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let tokens = self.tokenize(document)?;
        let mut tf = vec![0.0; self.vocabulary.len()];

        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                tf[idx] += 1.0;
            }
        }

        // Normalize by document length
        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for count in &mut tf {
                *count /= doc_length;
            }
        }

        // Apply IDF
        for (idx, count) in tf.iter_mut().enumerate() {
            *count *= self.idf[idx];
        }

        Ok(tf)
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|token| token.text).collect();
        Ok(tokens)
    }

    /// Get the size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::StandardAnalyzer;

    fn fitted(documents: &[&str], max_features: usize) -> TfIdfVectorizer {
        let docs: Vec<String> = documents.iter().map(|d| d.to_string()).collect();
        let analyzer = Arc::new(StandardAnalyzer::new().unwrap());
        let mut vectorizer = TfIdfVectorizer::new(analyzer, max_features);
        vectorizer.fit(&docs).unwrap();
        vectorizer
    }

    #[test]
    fn test_fit_and_transform() {
        let vectorizer = fitted(
            &[
                "the earth revolves around the sun",
                "the moon orbits earth",
                "water boils at sea level",
            ],
            100,
        );

        assert!(vectorizer.vocabulary_size() > 0);

        let features = vectorizer.transform("the earth and the moon").unwrap();
        assert_eq!(features.len(), vectorizer.vocabulary_size());
        assert!(features.iter().any(|&v| v > 0.0));
    }

    #[test]
    fn test_max_features_caps_vocabulary() {
        let vectorizer = fitted(
            &["one two three four five six seven eight nine ten"],
            4,
        );
        assert_eq!(vectorizer.vocabulary_size(), 4);
    }

    #[test]
    fn test_out_of_vocabulary_is_zero() {
        let vectorizer = fitted(&["earth orbits sun", "moon orbits earth"], 100);
        let features = vectorizer.transform("quantum chromodynamics").unwrap();
        assert!(features.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_transform_is_deterministic() {
        let vectorizer = fitted(&["earth orbits sun", "moon orbits earth"], 100);
        let a = vectorizer.transform("earth and moon").unwrap();
        let b = vectorizer.transform("earth and moon").unwrap();
        assert_eq!(a, b);
    }
}
