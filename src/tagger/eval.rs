//! Evaluation helpers for the filename parser.
//!
//! Scores parser output against a corpus of filenames with known titles
//! and tags, so changes to the separator patterns or the dictionary can be
//! measured instead of eyeballed.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::filename::parse_filename;
use super::normalizer::TagNormalizer;

/// Corpus entry structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// The filename to parse.
    pub filename: String,
    /// Expected title.
    pub title: String,
    /// Expected canonical tags, in order.
    pub tags: Vec<String>,
    /// What this case exercises.
    #[serde(default)]
    pub notes: String,
}

/// Aggregate scores over a corpus run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorpusReport {
    /// Number of entries evaluated.
    pub entries: usize,
    /// Fraction of entries whose title matched exactly.
    pub title_accuracy: f64,
    /// Mean Jaccard similarity of tag sets.
    pub mean_jaccard: f64,
    /// Fraction of entries whose tag list matched exactly, order included.
    pub exact_tags: f64,
}

/// Loads the filename corpus.
///
/// # Arguments
///
/// * `corpus_path` - Optional path to corpus file. If None, uses
///   `tests/fixtures/filename_corpus.json` in the crate directory.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_corpus(corpus_path: Option<PathBuf>) -> Result<Vec<CorpusEntry>> {
    let path = corpus_path.unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("filename_corpus.json")
    });

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read corpus: {}", path.display()))?;
    let entries: Vec<CorpusEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse corpus: {}", path.display()))?;
    Ok(entries)
}

/// Calculates Jaccard similarity between two sets of tags.
///
/// Two empty sets are identical and score 1.0.
///
/// # Examples
///
/// ```
/// use galtags::tagger::jaccard_similarity;
/// use std::collections::HashSet;
///
/// let expected: HashSet<String> = ["punished", "hormones", "hypnosis"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let actual: HashSet<String> = ["punished", "hormones", "love story"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// assert_eq!(jaccard_similarity(&expected, &actual), 0.5);
/// ```
pub fn jaccard_similarity(expected: &HashSet<String>, actual: &HashSet<String>) -> f64 {
    if expected.is_empty() && actual.is_empty() {
        return 1.0;
    }

    let intersection = expected.intersection(actual).count();
    let union = expected.union(actual).count();

    intersection as f64 / union as f64
}

/// Calculates precision and recall of extracted tags.
pub fn precision_recall(expected: &HashSet<String>, actual: &HashSet<String>) -> (f64, f64) {
    let true_positives = expected.intersection(actual).count();

    let precision = if actual.is_empty() {
        if expected.is_empty() { 1.0 } else { 0.0 }
    } else {
        true_positives as f64 / actual.len() as f64
    };

    let recall = if expected.is_empty() {
        if actual.is_empty() { 1.0 } else { 0.0 }
    } else {
        true_positives as f64 / expected.len() as f64
    };

    (precision, recall)
}

/// Compares expected tags with actual tags.
///
/// Returns `(jaccard_similarity, precision, recall)`.
pub fn compare_tags(expected: &[String], actual: &[String]) -> (f64, f64, f64) {
    let expected_set: HashSet<String> = expected.iter().cloned().collect();
    let actual_set: HashSet<String> = actual.iter().cloned().collect();

    let jaccard = jaccard_similarity(&expected_set, &actual_set);
    let (precision, recall) = precision_recall(&expected_set, &actual_set);

    (jaccard, precision, recall)
}

/// Runs every corpus entry through the parser and aggregates the scores.
pub fn evaluate_corpus(entries: &[CorpusEntry], normalizer: &TagNormalizer) -> CorpusReport {
    if entries.is_empty() {
        return CorpusReport {
            entries: 0,
            title_accuracy: 1.0,
            mean_jaccard: 1.0,
            exact_tags: 1.0,
        };
    }

    let mut titles = 0usize;
    let mut exact = 0usize;
    let mut jaccard_sum = 0.0;

    for entry in entries {
        let parsed = parse_filename(&entry.filename, normalizer);
        if parsed.title == entry.title {
            titles += 1;
        }
        if parsed.tags == entry.tags {
            exact += 1;
        }
        let (jaccard, _, _) = compare_tags(&entry.tags, &parsed.tags);
        jaccard_sum += jaccard;
    }

    let n = entries.len() as f64;
    CorpusReport {
        entries: entries.len(),
        title_accuracy: titles as f64 / n,
        mean_jaccard: jaccard_sum / n,
        exact_tags: exact as f64 / n,
    }
}
