//! Architecture Validation Integration Tests
//!
//! Confirms that the tag-processing core and the gallery service are usable
//! through the `galtags::` crate root alone, without any CLI types (clap
//! parsers and command handlers stay in main.rs).

use galtags::{
    Gallery, ImageId, ImageRecordBuilder, MatchPolicy, NormalizerConfig, SelectedFile,
    TagDictionary, TagNormalizer, Tagged, create_tag_stats, extract_main_title,
    extract_tags_from_filename, normalize_tag,
};

// =============================================================================
// Core operations
// =============================================================================

#[test]
fn test_core_operations_are_total() {
    let inputs = ["", ".", ",,", "--", "|", "  ", "...,,,", "\u{1F600}.png", "a.b.c"];
    for input in inputs {
        let parsed = extract_tags_from_filename(input);
        assert!(parsed.tags.iter().all(|t| !t.is_empty()), "input {input:?}");
        let _ = normalize_tag(input);
        let _ = extract_main_title(input);
    }
}

#[test]
fn test_dictionary_pairs_normalize_exactly() {
    for (variant, canonical) in TagDictionary::builtin().iter() {
        assert_eq!(normalize_tag(variant), canonical);
    }
}

#[test]
fn test_canonical_forms_are_fixed_points() {
    for (_, canonical) in TagDictionary::builtin().iter() {
        assert_eq!(normalize_tag(canonical), canonical);
    }
}

#[test]
fn test_fuzzy_tolerance_boundary() {
    // "hormones": one and two edits away match, three do not
    assert_eq!(normalize_tag("hormone"), "hormones");
    assert_eq!(normalize_tag("harmone"), "hormones");
    assert_eq!(normalize_tag("harmonx"), "harmonx");
}

#[test]
fn test_stats_example_from_three_items() {
    let items = vec![
        vec!["feminized".to_string()],
        vec!["femanized".to_string()],
        vec!["punished".to_string()],
    ];
    let stats = create_tag_stats(&items);

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].canonical, "feminized");
    assert_eq!(stats[0].count, 2);
    assert!(stats[0].has_variant("feminized"));
    assert!(stats[0].has_variant("femanized"));
    assert_eq!(stats[1].canonical, "punished");
    assert_eq!(stats[1].count, 1);
}

#[test]
fn test_conventions_differ_on_lone_comma() {
    assert_eq!(extract_main_title("A,B,,C.jpg"), "A");
    assert_eq!(extract_tags_from_filename("A,B,,C.jpg").title, "A,B");
}

// =============================================================================
// Seams
// =============================================================================

#[test]
fn test_custom_types_plug_into_stats() {
    struct Caption {
        tags: Vec<String>,
    }

    impl Tagged for Caption {
        fn tags(&self) -> &[String] {
            &self.tags
        }
    }

    let captions = vec![Caption {
        tags: vec!["Hypnosis".to_string()],
    }];
    let stats = create_tag_stats(&captions);
    assert_eq!(stats[0].canonical, "hypnosis");
}

#[test]
fn test_configured_normalizer_without_cli() {
    let normalizer = TagNormalizer::with_config(NormalizerConfig {
        tolerance: 1,
        min_fuzzy_len: 4,
        policy: MatchPolicy::Closest,
    });
    assert_eq!(normalizer.normalize("hormone"), "hormones");
    assert_eq!(normalizer.normalize("harmone"), "harmone");
}

#[test]
fn test_gallery_service_without_cli() {
    let mut gallery = Gallery::new();
    gallery.load_folder(vec![SelectedFile {
        name: "Walk,, punished.jpg".to_string(),
        relative_path: Some("Album/Walk,, punished.jpg".to_string()),
        src: "blob:walk".to_string(),
    }]);

    assert_eq!(gallery.folder_name(), Some("Album"));
    assert_eq!(gallery.images()[0].tags(), &["punished"]);

    let standalone = ImageRecordBuilder::new(ImageId::new("x"), "x.jpg").build();
    assert!(gallery.get(standalone.id()).is_none());
}
