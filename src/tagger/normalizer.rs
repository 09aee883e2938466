use std::collections::HashSet;
use std::sync::OnceLock;

use super::dictionary::TagDictionary;
use super::distance::levenshtein_within;
use crate::config::{MatchPolicy, NormalizerConfig};

static DEFAULT_NORMALIZER: OnceLock<TagNormalizer> = OnceLock::new();

/// Maps raw tag fragments to canonical tags.
///
/// Lookup runs in three stages: exact dictionary hit, fuzzy fallback against
/// the dictionary keys, and finally the cleaned input as its own canonical
/// form. Normalization never fails; unusable input yields an empty string.
#[derive(Debug, Clone)]
pub struct TagNormalizer {
    dictionary: &'static TagDictionary,
    config: NormalizerConfig,
}

impl Default for TagNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TagNormalizer {
    /// Creates a normalizer over the built-in dictionary with default thresholds.
    pub fn new() -> Self {
        Self::with_config(NormalizerConfig::default())
    }

    /// Creates a normalizer over the built-in dictionary with custom thresholds.
    pub fn with_config(config: NormalizerConfig) -> Self {
        Self::with_dictionary(TagDictionary::builtin(), config)
    }

    /// Creates a normalizer over a caller-supplied dictionary.
    ///
    /// The dictionary must outlive the process, typically a leaked or
    /// statically stored value.
    pub fn with_dictionary(dictionary: &'static TagDictionary, config: NormalizerConfig) -> Self {
        Self { dictionary, config }
    }

    /// Shared instance backing [`normalize_tag`].
    pub fn shared() -> &'static TagNormalizer {
        DEFAULT_NORMALIZER.get_or_init(TagNormalizer::new)
    }

    pub fn dictionary(&self) -> &TagDictionary {
        self.dictionary
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Lowercases and strips everything except ASCII word characters.
    ///
    /// # Cleaning rules
    ///
    /// - Converts to lowercase
    /// - Replaces every character other than `[a-z0-9_]` with a space
    /// - Collapses whitespace runs to a single space and trims
    ///
    /// # Examples
    ///
    /// ```
    /// use galtags::TagNormalizer;
    ///
    /// assert_eq!(TagNormalizer::clean("  Bf-to_GF!! "), "bf to_gf");
    /// assert_eq!(TagNormalizer::clean("Love   Story"), "love story");
    /// assert_eq!(TagNormalizer::clean("!!!"), "");
    /// ```
    #[must_use]
    pub fn clean(tag: &str) -> String {
        let replaced: String = tag
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        replaced.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Normalizes a single tag to its canonical form.
    ///
    /// # Examples
    ///
    /// ```
    /// use galtags::TagNormalizer;
    ///
    /// let normalizer = TagNormalizer::new();
    /// assert_eq!(normalizer.normalize("Femanized"), "feminized");
    /// assert_eq!(normalizer.normalize("humilaition"), "humiliation");
    /// assert_eq!(normalizer.normalize("Golden Hour"), "golden hour");
    /// assert_eq!(normalizer.normalize("  ...  "), "");
    /// ```
    #[must_use]
    pub fn normalize(&self, tag: &str) -> String {
        let cleaned = Self::clean(tag);
        if cleaned.is_empty() {
            return cleaned;
        }

        if let Some(canonical) = self.dictionary.get(&cleaned) {
            return canonical.to_string();
        }

        if cleaned.chars().count() >= self.config.min_fuzzy_len
            && let Some(canonical) = self.fuzzy_match(&cleaned)
        {
            return canonical.to_string();
        }

        cleaned
    }

    /// Normalizes a collection of tags, removing duplicates and empty strings.
    ///
    /// Preserves the order of first occurrence by canonical value.
    ///
    /// # Examples
    ///
    /// ```
    /// use galtags::TagNormalizer;
    ///
    /// let tags = ["feminized", "Femanized", "", "punished"];
    /// assert_eq!(TagNormalizer::new().normalize_all(tags), vec!["feminized", "punished"]);
    /// ```
    #[must_use]
    pub fn normalize_all<I, S>(&self, tags: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        tags.into_iter()
            .map(|tag| self.normalize(tag.as_ref()))
            .filter(|tag| !tag.is_empty() && seen.insert(tag.clone()))
            .collect()
    }

    fn fuzzy_match(&self, cleaned: &str) -> Option<&str> {
        let tolerance = self.config.tolerance;
        match self.config.policy {
            MatchPolicy::First => self
                .dictionary
                .iter()
                .find(|(variant, _)| levenshtein_within(cleaned, variant, tolerance).is_some())
                .map(|(_, canonical)| canonical),
            MatchPolicy::Closest => {
                let mut best: Option<(usize, &str)> = None;
                for (variant, canonical) in self.dictionary.iter() {
                    if let Some(distance) = levenshtein_within(cleaned, variant, tolerance)
                        && best.is_none_or(|(d, _)| distance < d)
                    {
                        best = Some((distance, canonical));
                    }
                }
                best.map(|(_, canonical)| canonical)
            }
        }
    }
}

/// Normalizes a tag with the built-in dictionary and default thresholds.
///
/// # Examples
///
/// ```
/// use galtags::normalize_tag;
///
/// assert_eq!(normalize_tag("Feminized by Sister"), "feminized by sister");
/// assert_eq!(normalize_tag("sunset"), "sunset");
/// ```
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    TagNormalizer::shared().normalize(tag)
}
