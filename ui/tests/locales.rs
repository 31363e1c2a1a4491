//! Locale files against the keys the survey and dashboard actually use.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ui::core::error::SurveyError;
use ui::dashboard::month_labels;

const LOCALES: &[(&str, &str)] = &[
    ("pt-BR", include_str!("../i18n/pt-BR/santaclara-ui.ftl")),
    ("en-US", include_str!("../i18n/en-US/santaclara-ui.ftl")),
];

/// Keys looked up by id families the views build their labels from.
const FAMILIES: &[&str] = &[
    "progress-count",
    "progress-beginning",
    "progress-halfway",
    "progress-almost",
    "progress-complete",
    "status-satisfied",
    "status-neutral",
    "status-dissatisfied",
    "col-id",
    "col-patient",
    "col-date",
    "col-section",
    "col-score",
    "col-status",
];

/// `key = value` lines; panics on a key defined twice.
fn messages(locale: &str, src: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for line in src.lines() {
        if line.starts_with(['#', ' ', '\t', '.', '-']) {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim().to_string();
        let previous = map.insert(key.clone(), value.trim().to_string());
        assert!(previous.is_none(), "{locale}: `{key}` defined twice");
    }
    map
}

fn referenced_keys(dir: &Path, found: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap().flatten() {
        let path = entry.path();
        if path.is_dir() {
            referenced_keys(&path, found);
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            let source = fs::read_to_string(&path).unwrap();
            for (at, needle) in source.match_indices("t!(\"") {
                // `format!("` and friends end in the same bytes.
                let standalone = source[..at]
                    .chars()
                    .next_back()
                    .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
                let rest = &source[at + needle.len()..];
                if let (true, Some((key, _))) = (standalone, rest.split_once('"')) {
                    found.push(key.to_string());
                }
            }
        }
    }
}

#[test]
fn locales_define_the_same_keys() {
    let (fallback, fallback_src) = LOCALES[0];
    assert_eq!(fallback, ui::i18n::FALLBACK_LANGUAGE);
    let expected: Vec<String> = messages(fallback, fallback_src).into_keys().collect();

    for (locale, src) in &LOCALES[1..] {
        let keys: Vec<String> = messages(locale, src).into_keys().collect();
        assert_eq!(keys, expected, "{locale} differs from {fallback}");
    }
}

#[test]
fn every_translated_key_in_source_exists() {
    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut keys = Vec::new();
    referenced_keys(&src, &mut keys);
    assert!(keys.len() > 40, "scan found only {} lookups", keys.len());

    for (locale, text) in LOCALES {
        let defined = messages(locale, text);
        for key in FAMILIES.iter().copied().chain(keys.iter().map(String::as_str)) {
            let value = defined.get(key);
            assert!(
                value.map_or(false, |v| !v.is_empty()),
                "{locale}: `{key}` missing or empty"
            );
        }
    }
}

#[test]
fn chart_months_list_twelve_entries() {
    for (locale, src) in LOCALES {
        let months = &messages(locale, src)["chart-months"];
        let count = months.split(',').filter(|m| !m.trim().is_empty()).count();
        assert_eq!(count, 12, "{locale}: {months}");
    }
}

/// The only test in this binary that switches the global loader.
#[test]
fn runtime_lookups_follow_the_selected_locale() {
    ui::i18n::init();
    let errors = [
        (SurveyError::MissingIdentity, "error-missing-identity"),
        (SurveyError::MissingDates, "error-missing-dates"),
        (
            SurveyError::Incomplete {
                answered: 3,
                total: 10,
            },
            "error-incomplete",
        ),
        (SurveyError::AlreadySubmitting, "error-already-submitting"),
        (SurveyError::UnknownQuestion("q0".into()), "error-invalid-answer"),
        (
            SurveyError::UnknownOption {
                question: "q1".into(),
                option: "Talvez".into(),
            },
            "error-invalid-answer",
        ),
    ];

    for (locale, src) in LOCALES {
        ui::i18n::set_language(locale).unwrap();
        let defined = messages(locale, src);

        for (err, key) in &errors {
            assert_eq!(err.user_message(), defined[*key], "{locale}: {err:?}");
        }

        let months = month_labels();
        assert_eq!(months.len(), 12, "{locale}");
        assert_eq!(months.join(","), defined["chart-months"], "{locale}");
    }

    ui::i18n::set_language(ui::i18n::FALLBACK_LANGUAGE).unwrap();
}
