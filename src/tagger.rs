//! Filename tag parsing and normalization.
//!
//! Three pieces, all pure and infallible:
//!
//! - [`extract_tags_from_filename`] splits a filename into a title and tags
//! - [`normalize_tag`] maps a raw tag to its canonical spelling, via an exact
//!   dictionary lookup and then a Levenshtein fallback
//! - [`create_tag_stats`] counts canonical tags across a collection and
//!   records the raw spellings seen for each
//!
//! # Examples
//!
//! ```
//! use galtags::tagger::{create_tag_stats, extract_tags_from_filename, normalize_tag};
//!
//! let parsed = extract_tags_from_filename("Sunset Walk,, Femanized,, punished.jpg");
//! assert_eq!(parsed.title, "Sunset Walk");
//! assert_eq!(parsed.tags, vec!["feminized", "punished"]);
//!
//! assert_eq!(normalize_tag("humilation"), "humiliation");
//!
//! let stats = create_tag_stats(&[parsed]);
//! assert_eq!(stats.len(), 2);
//! ```
//!
//! The defaults reproduce the reference thresholds (tolerance 2, fuzzy
//! matching only above three characters, first key within tolerance wins).
//! Build a [`TagNormalizer`] with a [`NormalizerConfig`](crate::NormalizerConfig)
//! to change them.
//!
//! # Evaluation
//!
//! `tests/fixtures/filename_corpus.json` holds filenames with expected titles
//! and tags; [`evaluate_corpus`] scores the parser against it:
//!
//! ```bash
//! cargo test --test parser_corpus
//! ```

mod dictionary;
mod distance;
mod eval;
mod filename;
mod normalizer;
mod stats;

pub use dictionary::TagDictionary;
pub use distance::{levenshtein, levenshtein_within};
pub use eval::{
    CorpusEntry, CorpusReport, compare_tags, evaluate_corpus, jaccard_similarity, load_corpus,
    precision_recall,
};
pub use filename::{extract_main_title, extract_tags_from_filename, parse_filename, strip_extension};
pub use normalizer::{TagNormalizer, normalize_tag};
pub use stats::{Tagged, aggregate_tag_stats, create_tag_stats};
