use std::collections::BTreeMap;

use slugcore::{SlugOptions, Slugify, TransliterateKind};

struct Case {
    name: &'static str,
    input: &'static str,
    options: SlugOptions,
    expected: &'static str,
}

fn german() -> BTreeMap<String, String> {
    [("ä", "ae"), ("ö", "oe"), ("ü", "ue")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn golden_corpus_regression() {
    let cases = [
        Case {
            name: "punctuation_runs",
            input: "This % is a test ---",
            options: SlugOptions::default(),
            expected: "This-is-a-test",
        },
        Case {
            name: "underscores_are_unwanted",
            input: "_this_is_a__test___",
            options: SlugOptions::default(),
            expected: "this-is-a-test",
        },
        Case {
            name: "empty_input",
            input: "",
            options: SlugOptions::default(),
            expected: "",
        },
        Case {
            name: "apostrophes_and_accents",
            input: "C'est déjà l'été.",
            options: SlugOptions::default(),
            expected: "Cest-deja-lete",
        },
        Case {
            name: "slovenian",
            input: "kožušček",
            options: SlugOptions::default(),
            expected: "kozuscek",
        },
        Case {
            name: "acronym_kept",
            input: "UP Title",
            options: SlugOptions::default(),
            expected: "UP-Title",
        },
        Case {
            name: "pretranslated_acronym",
            input: "ÜBERslugifÜ AUF",
            options: SlugOptions {
                pretranslate: german(),
                ..Default::default()
            },
            expected: "UEBERslugifUE-AUF",
        },
        Case {
            name: "to_lower",
            input: "Test TO lower",
            options: SlugOptions {
                to_lower: true,
                ..Default::default()
            },
            expected: "test-to-lower",
        },
        Case {
            name: "to_lower_then_capitalize",
            input: "Test TO lower",
            options: SlugOptions {
                to_lower: true,
                capitalize: true,
                ..Default::default()
            },
            expected: "Test-to-lower",
        },
        Case {
            name: "stop_words_beside_safe_chars",
            input: "*The*red*apple",
            options: SlugOptions {
                safe_chars: "*".into(),
                stop_words: vec!["a".into(), "the".into()],
                ..Default::default()
            },
            expected: "*-*red*apple",
        },
        Case {
            name: "custom_separator",
            input: "one two three",
            options: SlugOptions {
                separator: "_".into(),
                ..Default::default()
            },
            expected: "one_two_three",
        },
        Case {
            name: "stored_max_length_is_word_safe",
            input: "one two three four",
            options: SlugOptions {
                max_length: 12,
                ..Default::default()
            },
            expected: "one-two",
        },
        Case {
            name: "truncate_words_defers_to_joiner",
            input: "one two three four",
            options: SlugOptions {
                max_length: 12,
                truncate_words: true,
                ..Default::default()
            },
            expected: "one-two-four",
        },
        Case {
            name: "first_clause",
            input: "Someone must have slandered Josef K., for one morning, \
                    without having done anything truly wrong, he was arrested.",
            options: SlugOptions {
                to_lower: true,
                extract_phrase: true,
                ..Default::default()
            },
            expected: "someone-must-have-slandered-josef-k",
        },
        Case {
            name: "ascii_fold_keeps_latin",
            input: "Café crème",
            options: SlugOptions {
                transliterate: TransliterateKind::AsciiFold,
                ..Default::default()
            },
            expected: "Cafe-creme",
        },
        Case {
            name: "ascii_fold_drops_han",
            input: "北亰",
            options: SlugOptions {
                transliterate: TransliterateKind::AsciiFold,
                ..Default::default()
            },
            expected: "",
        },
        Case {
            name: "identity_keeps_cyrillic",
            input: "слово_по_русски",
            options: SlugOptions {
                transliterate: TransliterateKind::Identity,
                ..Default::default()
            },
            expected: "слово-по-русски",
        },
    ];

    for case in cases {
        let engine = Slugify::from_options(&case.options)
            .unwrap_or_else(|e| panic!("case {} failed: {e}", case.name));
        assert_eq!(
            engine.slugify(case.input),
            case.expected,
            "slug mismatch for {}",
            case.name
        );
    }
}
