use multiselect_field::{LocaleTranslations, TranslationLoader, prefix_key};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn loader_with(files: &[(&str, &str)]) -> (TempDir, TranslationLoader) {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    let loader = TranslationLoader::new(dir.path());
    (dir, loader)
}

#[test]
fn prefix_key_namespaces_under_plugin() {
    assert_eq!(prefix_key("empty-state.text"), "multiselect-field.empty-state.text");
    assert_eq!(prefix_key(""), "multiselect-field.");
}

#[test]
fn loads_existing_locale() {
    let (_dir, loader) =
        loader_with(&[("de.json", r#"{"multiselect-field.label": "Mehrfachauswahl"}"#)]);
    let loaded = loader.load(&["de"]);
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].locale, "de");
    assert_eq!(loaded[0].get("multiselect-field.label"), Some("Mehrfachauswahl"));
}

#[test]
fn missing_locale_falls_back_to_empty() {
    let (_dir, loader) = loader_with(&[("en.json", r#"{"k": "v"}"#)]);
    let loaded = loader.load(&["en", "fr"]);
    assert_eq!(loaded[0].data.len(), 1);
    assert_eq!(loaded[1], LocaleTranslations::empty("fr"));
}

#[test]
fn malformed_locale_falls_back_to_empty() {
    let (_dir, loader) = loader_with(&[("es.json", "not json"), ("it.json", r#"{"k": 1}"#)]);
    let loaded = loader.load(&["es", "it"]);
    assert!(loaded.iter().all(|l| l.data.is_empty()));
    assert!(loader.load_locale("es").is_err());
    assert!(loader.load_locale("it").is_err());
}

#[test]
fn path_like_locale_is_rejected() {
    let (_dir, loader) = loader_with(&[("escape.json", r#"{"k": "v"}"#)]);
    assert!(loader.load_locale("../escape").is_err());
    assert!(loader.load(&["../escape"])[0].data.is_empty());
}

#[test]
fn missing_directory_never_fails() {
    let loader = TranslationLoader::new("/nonexistent/translations");
    let loaded = loader.load(&["en", "de"]);
    assert_eq!(loaded.len(), 2);
    assert!(loaded.iter().all(|l| l.data.is_empty()));
}

#[test]
fn load_keeps_requested_order() {
    let (_dir, loader) = loader_with(&[("a.json", "{}"), ("b.json", "{}")]);
    let locales: Vec<String> = loader
        .load(&["b", "a"])
        .into_iter()
        .map(|l| l.locale)
        .collect();
    assert_eq!(locales, vec!["b", "a"]);
}

#[test]
fn builtin_has_english_only() {
    let loaded = TranslationLoader::builtin(&["en", "de"]);
    assert_eq!(
        loaded[0].get("multiselect-field.empty-state.text"),
        Some("no options available, add some in the field settings")
    );
    assert!(loaded[1].data.is_empty());
}

#[test]
fn shipped_english_file_loads_from_disk() {
    let loader = TranslationLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/translations"));
    let from_disk = loader.load(&["en"]);
    assert_eq!(from_disk, TranslationLoader::builtin(&["en"]));
}
