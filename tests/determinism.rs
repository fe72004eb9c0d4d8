use slugkit::{Overrides, Slugify, SlugkitConfig, slugify};

const SAMPLES: &[&str] = &[
    "This % is a test ---",
    "C'est déjà l'été.",
    "Öl und SÜD",
    "UP Я.Б.Ч",
    "Someone must have slandered Josef K., for one morning",
    "   ",
    "x",
];

#[test]
fn same_text_same_slug() {
    let a = Slugify::new();
    let b = Slugify::new();
    for text in SAMPLES {
        assert_eq!(a.slugify(text), b.slugify(text), "{text:?}");
        assert_eq!(a.slugify(text), slugify(text), "{text:?}");
    }
}

#[test]
fn slug_is_a_fixed_point() {
    let engine = Slugify::new();
    for text in SAMPLES {
        let once = engine.slugify(text);
        assert_eq!(engine.slugify(&once), once, "{text:?}");
    }
}

#[test]
fn max_length_bounds_every_slug() {
    let engine = Slugify::new();
    for text in SAMPLES {
        for max in 1..30 {
            let slug = engine.slugify_with(text, &Overrides::new().max_length(max));
            assert!(slug.chars().count() <= max, "{text:?} at {max}: {slug:?}");
        }
    }
}

#[test]
fn no_edge_or_doubled_separators() {
    let engine = Slugify::builder().separator("_").build();
    for text in SAMPLES {
        let slug = engine.slugify(text);
        assert!(!slug.starts_with('_') && !slug.ends_with('_'), "{slug:?}");
        assert!(!slug.contains("__"), "{slug:?}");
    }
}

#[test]
fn lowercase_slugs_are_lowercase() {
    let engine = Slugify::builder().to_lower(true).build();
    for text in SAMPLES {
        let slug = engine.slugify(text);
        assert_eq!(slug, slug.to_lowercase(), "{text:?}");
    }
}

#[test]
fn config_file_and_builder_agree() {
    let yaml = r#"
version: "1.0"
slug:
  to_lower: true
  stop_words: ["a", "the"]
  separator: "_"
"#;
    let from_file = SlugkitConfig::from_yaml(yaml).unwrap().build_slugify().unwrap();
    let built = Slugify::builder()
        .to_lower(true)
        .stop_words(["a", "the"])
        .separator("_")
        .build();
    for text in SAMPLES {
        assert_eq!(from_file.slugify(text), built.slugify(text), "{text:?}");
    }
}
