//! Labeled news corpus loading from CSV files.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use log::{info, warn};

use crate::corpus::{CorpusSource, LabeledExample, TrainingSet, embedded_training_set};
use crate::error::{ClaimcheckError, Result};

/// Loads the labeled training corpus for the local strategy.
///
/// Two CSV files are read: one whose rows are all true-class news items
/// and one whose rows are all fake/false-class items. The label comes from
/// which file a row belongs to, not from a column. Each example's text is
/// the `title` and `text` columns joined by a single space, with missing
/// values treated as empty.
///
/// Loading never fails: any problem with the files (absent, unreadable,
/// wrong schema) falls back to the embedded dataset.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    true_path: PathBuf,
    fake_path: PathBuf,
}

impl CorpusLoader {
    /// Create a loader for the given true-class and fake-class CSV files.
    pub fn new<P: Into<PathBuf>>(true_path: P, fake_path: P) -> Self {
        CorpusLoader {
            true_path: true_path.into(),
            fake_path: fake_path.into(),
        }
    }

    /// Load the training set, falling back to the embedded dataset on any
    /// file or parse failure.
    pub fn load(&self) -> TrainingSet {
        match self.load_files() {
            Ok(examples) => {
                info!(
                    "loaded {} examples from {} and {}",
                    examples.len(),
                    self.true_path.display(),
                    self.fake_path.display()
                );
                TrainingSet::new(examples, CorpusSource::Files)
            }
            Err(e) => {
                warn!("corpus files unavailable ({e}), using embedded fallback dataset");
                embedded_training_set()
            }
        }
    }

    fn load_files(&self) -> Result<Vec<LabeledExample>> {
        let mut examples = read_labeled_csv(&self.true_path, true)?;
        examples.extend(read_labeled_csv(&self.fake_path, false)?);

        if examples.is_empty() {
            return Err(ClaimcheckError::corpus("corpus files contain no rows"));
        }

        Ok(examples)
    }
}

/// Read one CSV file, assigning every row the given label.
///
/// The header must contain a `title` or a `text` column (normally both);
/// other columns are ignored.
fn read_labeled_csv(path: &Path, label: bool) -> Result<Vec<LabeledExample>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let headers = reader.headers()?.clone();
    let title_idx = headers.iter().position(|h| h == "title");
    let text_idx = headers.iter().position(|h| h == "text");

    if title_idx.is_none() && text_idx.is_none() {
        return Err(ClaimcheckError::corpus(format!(
            "{}: no title or text column in header",
            path.display()
        )));
    }

    let mut examples = Vec::new();
    for record in reader.records() {
        let record = record?;
        let title = title_idx.and_then(|i| record.get(i)).unwrap_or("");
        let body = text_idx.and_then(|i| record.get(i)).unwrap_or("");
        examples.push(LabeledExample::new(format!("{title} {body}"), label));
    }

    Ok(examples)
}
