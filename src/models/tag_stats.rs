use serde::{Deserialize, Serialize};

/// Usage statistics for one canonical tag across a set of images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagStats {
    /// The canonical tag.
    pub canonical: String,
    /// Number of images carrying any variant of this tag.
    pub count: usize,
    /// Distinct raw spellings that normalized to `canonical`, in first-seen order.
    pub variants: Vec<String>,
}

impl TagStats {
    /// Creates an empty entry for a canonical tag.
    pub fn new(canonical: impl Into<String>) -> Self {
        Self {
            canonical: canonical.into(),
            count: 0,
            variants: Vec::new(),
        }
    }

    /// Returns true if `variant` was observed for this tag.
    pub fn has_variant(&self, variant: &str) -> bool {
        self.variants.iter().any(|v| v == variant)
    }

    /// Records a raw spelling, ignoring repeats.
    pub fn add_variant(&mut self, variant: impl Into<String>) {
        let variant = variant.into();
        if !self.has_variant(&variant) {
            self.variants.push(variant);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_empty() {
        let stats = TagStats::new("punished");
        assert_eq!(stats.canonical, "punished");
        assert_eq!(stats.count, 0);
        assert!(stats.variants.is_empty());
    }

    #[test]
    fn add_variant_ignores_repeats() {
        let mut stats = TagStats::new("feminized");
        stats.add_variant("feminized");
        stats.add_variant("femanized");
        stats.add_variant("feminized");

        assert_eq!(stats.variants, vec!["feminized", "femanized"]);
        assert!(stats.has_variant("femanized"));
        assert!(!stats.has_variant("Feminized"));
    }
}
