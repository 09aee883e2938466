use std::collections::{BTreeMap, HashSet};

use super::normalizer::TagNormalizer;
use crate::models::{ImageRecord, ParsedFilename, TagStats};

/// Anything carrying a list of tags that can be aggregated.
pub trait Tagged {
    fn tags(&self) -> &[String];
}

impl Tagged for ImageRecord {
    fn tags(&self) -> &[String] {
        ImageRecord::tags(self)
    }
}

impl Tagged for ParsedFilename {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Tagged for Vec<String> {
    fn tags(&self) -> &[String] {
        self
    }
}

impl Tagged for [String] {
    fn tags(&self) -> &[String] {
        self
    }
}

/// Aggregates per-canonical-tag statistics using `normalizer`.
///
/// Every tag is re-normalized, so raw and canonical input give the same
/// result. An image counts once per canonical tag even if several of its
/// tags share that canonical form. Tags that clean to nothing are skipped.
/// Output is sorted by canonical tag.
pub fn aggregate_tag_stats<'a, I, T>(items: I, normalizer: &TagNormalizer) -> Vec<TagStats>
where
    I: IntoIterator<Item = &'a T>,
    T: Tagged + ?Sized + 'a,
{
    let mut by_canonical: BTreeMap<String, TagStats> = BTreeMap::new();

    for item in items {
        let mut counted = HashSet::new();
        for raw in item.tags() {
            let canonical = normalizer.normalize(raw);
            if canonical.is_empty() {
                continue;
            }
            let entry = by_canonical
                .entry(canonical.clone())
                .or_insert_with(|| TagStats::new(canonical.clone()));
            if counted.insert(canonical) {
                entry.count += 1;
            }
            entry.add_variant(raw.as_str());
        }
    }

    by_canonical.into_values().collect()
}

/// Aggregates tag statistics with the default normalizer.
///
/// # Examples
///
/// ```
/// use galtags::create_tag_stats;
///
/// let images = vec![
///     vec!["feminized".to_string()],
///     vec!["femanized".to_string()],
///     vec!["punished".to_string()],
/// ];
/// let stats = create_tag_stats(&images);
///
/// assert_eq!(stats.len(), 2);
/// assert_eq!(stats[0].canonical, "feminized");
/// assert_eq!(stats[0].count, 2);
/// assert_eq!(stats[0].variants, vec!["feminized", "femanized"]);
/// assert_eq!(stats[1].canonical, "punished");
/// assert_eq!(stats[1].count, 1);
/// ```
pub fn create_tag_stats<'a, I, T>(items: I) -> Vec<TagStats>
where
    I: IntoIterator<Item = &'a T>,
    T: Tagged + ?Sized + 'a,
{
    aggregate_tag_stats(items, TagNormalizer::shared())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageId, ImageRecordBuilder};

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_stats() {
        let images: Vec<Vec<String>> = Vec::new();
        assert!(create_tag_stats(&images).is_empty());
    }

    #[test]
    fn test_variants_group_under_canonical() {
        let images = vec![tags(&["feminized"]), tags(&["femanized"]), tags(&["punished"])];
        let stats = create_tag_stats(&images);

        assert_eq!(stats.len(), 2);
        let feminized = &stats[0];
        assert_eq!(feminized.canonical, "feminized");
        assert_eq!(feminized.count, 2);
        assert!(feminized.has_variant("feminized"));
        assert!(feminized.has_variant("femanized"));
        assert_eq!(feminized.variants.len(), 2);

        assert_eq!(stats[1].canonical, "punished");
        assert_eq!(stats[1].count, 1);
        assert_eq!(stats[1].variants, vec!["punished"]);
    }

    #[test]
    fn test_output_sorted_by_canonical() {
        let images = vec![tags(&["punished", "hormones"]), tags(&["crossdressing"])];
        let names: Vec<String> = create_tag_stats(&images)
            .into_iter()
            .map(|s| s.canonical)
            .collect();
        assert_eq!(names, vec!["crossdressing", "hormones", "punished"]);
    }

    #[test]
    fn test_image_counted_once_per_canonical() {
        let images = vec![tags(&["feminized", "Femanized"]), tags(&["feminized"])];
        let stats = create_tag_stats(&images);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].variants, vec!["feminized", "Femanized"]);
    }

    #[test]
    fn test_raw_input_is_renormalized() {
        let images = vec![tags(&["HUMILATION!"]), tags(&["humiliation"])];
        let stats = create_tag_stats(&images);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].canonical, "humiliation");
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].variants, vec!["HUMILATION!", "humiliation"]);
    }

    #[test]
    fn test_blank_tags_are_skipped() {
        let images = vec![tags(&["", "  ", "?!"]), tags(&["punished"])];
        let stats = create_tag_stats(&images);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].canonical, "punished");
    }

    #[test]
    fn test_accepts_image_records() {
        let images = vec![
            ImageRecordBuilder::new(ImageId::new("1"), "a.jpg")
                .tags(tags(&["hypnosis"]))
                .build(),
            ImageRecordBuilder::new(ImageId::new("2"), "b.jpg")
                .tags(tags(&["hypnosis", "hormones"]))
                .build(),
        ];
        let stats = create_tag_stats(&images);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].canonical, "hormones");
        assert_eq!(stats[1].canonical, "hypnosis");
        assert_eq!(stats[1].count, 2);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let images = vec![tags(&["femaized", "love story"]), tags(&["Love-Story"])];
        assert_eq!(create_tag_stats(&images), create_tag_stats(&images));
    }
}
