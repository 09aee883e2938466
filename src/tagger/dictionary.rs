use std::collections::HashMap;
use std::sync::OnceLock;

/// Built-in variant spellings and the canonical tag each one maps to.
///
/// Order matters: fuzzy matching walks this table top to bottom and the
/// default policy takes the first key within tolerance.
const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    // Feminization variants
    ("feminization", "feminization"),
    ("femanization", "feminization"),
    ("femaization", "feminization"),
    ("feamnization", "feminization"),
    ("femanizaed", "feminized"),
    ("femanized", "feminized"),
    ("feminized", "feminized"),
    ("femaized", "feminized"),
    ("permanent feminization", "permanent feminization"),
    ("permanent femanization", "permanent feminization"),
    ("permanent feamnization", "permanent feminization"),
    ("premanent femanization", "permanent feminization"),
    ("permenent femanization", "permanent feminization"),
    ("permenant femanization", "permanent feminization"),
    ("forced feminization", "forced feminization"),
    ("forced femanization", "forced feminization"),
    ("forced femaization", "forced feminization"),
    // Gender transformation
    ("male to female", "male to female"),
    ("man to woman", "male to female"),
    ("boy to girl", "male to female"),
    ("man turned into woman", "man turned into woman"),
    ("man turned into women", "man turned into woman"),
    ("man into woman", "man turned into woman"),
    ("turned into woman", "man turned into woman"),
    // Relationship changes
    ("boyfriend to girlfriend", "boyfriend to girlfriend"),
    ("bf to gf", "boyfriend to girlfriend"),
    ("husband to wife", "husband to wife"),
    // Dressing
    ("cheated into dress", "cheated into dress"),
    ("cheated dress", "cheated into dress"),
    ("forced into dress", "cheated into dress"),
    ("dressed as a girl", "dressed as a girl"),
    ("living as a girl", "living as a girl"),
    // Learning
    ("learning to be a woman", "learning to be a woman"),
    ("learning to be a women", "learning to be a woman"),
    ("learnig to be a women", "learning to be a woman"),
    ("learning to be an women", "learning to be a woman"),
    ("learnig to be an women", "learning to be a woman"),
    ("learing to be a women", "learning to be a woman"),
    // Lessons
    ("pretty girls lesson", "pretty girls lesson"),
    ("pretty girl lesson", "pretty girl lesson"),
    ("pretty girls lessons", "pretty girls lesson"),
    ("pretty girl lessons", "pretty girl lessons"),
    ("pretty girls leeson", "pretty girls lesson"),
    ("pretty girl leeson", "pretty girl leeson"),
    ("pertty girls leesson", "pretty girls lesson"),
    // Family
    ("feminized by girlfriend", "feminized by girlfriend"),
    ("femanized by girlfriend", "feminized by girlfriend"),
    ("femanized by girl friend", "feminized by girlfriend"),
    ("feminized by sister", "feminized by sister"),
    ("femanized by sister", "feminized by sister"),
    ("femaized by sister", "feminized by sister"),
    ("feminized by wife", "feminized by wife"),
    ("femanized by wife", "feminized by wife"),
    ("feminized by mother", "feminized by mother"),
    ("femanized by mother", "feminized by mother"),
    ("feminized by cousin", "feminized by cousin"),
    ("femanized by cousin", "feminized by cousin"),
    // Other
    ("crossdressing", "crossdressing"),
    ("fun crossdressing", "crossdressing"),
    ("humiliation", "humiliation"),
    ("humilation", "humiliation"),
    ("revenge tale", "revenge tale"),
    ("gang of girls", "gang of girls"),
    ("hormones", "hormones"),
    ("hypnosis", "hypnosis"),
    ("love story", "love story"),
    ("punished", "punished"),
    // Explicit
    ("fucked as a woman", "fucked as a woman"),
    ("fucked as women", "fucked as a woman"),
    ("fuvked as women", "fucked as a woman"),
    ("fucked as a women", "fucked as a woman"),
];

static BUILTIN: OnceLock<TagDictionary> = OnceLock::new();

/// Immutable many-to-one mapping from variant spelling to canonical tag.
///
/// Keys are stored already cleaned (lowercase, single-spaced). Entries keep
/// their definition order for fuzzy matching, with a hash index on the side
/// for exact lookups.
#[derive(Debug, Clone)]
pub struct TagDictionary {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl TagDictionary {
    /// Returns the dictionary compiled into the crate.
    ///
    /// Built once on first use and shared for the life of the process.
    pub fn builtin() -> &'static TagDictionary {
        BUILTIN.get_or_init(|| {
            Self::from_entries(
                BUILTIN_ENTRIES
                    .iter()
                    .map(|(variant, canonical)| (variant.to_string(), canonical.to_string())),
            )
        })
    }

    /// Builds a dictionary from `(variant, canonical)` pairs.
    ///
    /// When a variant appears twice the first definition wins, matching the
    /// lookup order used for fuzzy matching.
    ///
    /// # Examples
    ///
    /// ```
    /// use galtags::TagDictionary;
    ///
    /// let dict = TagDictionary::from_entries(vec![
    ///     ("colour".to_string(), "color".to_string()),
    ///     ("color".to_string(), "color".to_string()),
    /// ]);
    /// assert_eq!(dict.get("colour"), Some("color"));
    /// assert_eq!(dict.len(), 2);
    /// ```
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut list = Vec::new();
        let mut index = HashMap::new();
        for (variant, canonical) in entries {
            if index.contains_key(&variant) {
                continue;
            }
            index.insert(variant.clone(), list.len());
            list.push((variant, canonical));
        }
        Self {
            entries: list,
            index,
        }
    }

    /// Exact lookup of an already-cleaned variant.
    pub fn get(&self, variant: &str) -> Option<&str> {
        self.index
            .get(variant)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Iterates `(variant, canonical)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(variant, canonical)| (variant.as_str(), canonical.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
