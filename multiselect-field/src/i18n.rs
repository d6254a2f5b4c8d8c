//! Translation keys and locale bundles.
//!
//! Bundles are flat JSON maps (`{"multiselect-field.label": "Multiselect"}`)
//! stored as `<dir>/<locale>.json`. Loading is best effort: a locale that
//! cannot be read comes back with an empty map.

use crate::PLUGIN_ID;
use crate::error::{FieldError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const BUILTIN_EN: &str = include_str!("../translations/en.json");

/// Namespaces `key` under the plugin id, e.g. `multiselect-field.label`.
pub fn prefix_key(key: &str) -> String {
    format!("{PLUGIN_ID}.{key}")
}

/// Translations for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleTranslations {
    pub locale: String,
    pub data: BTreeMap<String, String>,
}

impl LocaleTranslations {
    pub fn empty(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            data: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

/// Loads locale bundles from a directory.
#[derive(Debug, Clone)]
pub struct TranslationLoader {
    dir: PathBuf,
}

impl TranslationLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads every requested locale, in order. Never fails; see [`Self::load_locale`]
    /// for the error cases that turn into empty bundles.
    pub fn load<S: AsRef<str>>(&self, locales: &[S]) -> Vec<LocaleTranslations> {
        locales
            .iter()
            .map(|locale| {
                let locale = locale.as_ref();
                match self.load_locale(locale) {
                    Ok(data) => LocaleTranslations {
                        locale: locale.to_string(),
                        data,
                    },
                    Err(e) => {
                        warn!(locale, error = %e, "Translations unavailable, using empty set");
                        LocaleTranslations::empty(locale)
                    }
                }
            })
            .collect()
    }

    /// Reads `<dir>/<locale>.json`.
    pub fn load_locale(&self, locale: &str) -> Result<BTreeMap<String, String>> {
        let path = self.dir.join(format!("{locale}.json"));
        let display = path.display().to_string();

        if !is_locale_tag(locale) {
            return Err(FieldError::TranslationIo {
                path: display,
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid locale tag"),
            });
        }

        let raw = fs::read_to_string(&path).map_err(|source| FieldError::TranslationIo {
            path: display.clone(),
            source,
        })?;
        let data: BTreeMap<String, String> = serde_json::from_str(&raw)
            .map_err(|source| FieldError::TranslationFormat { path: display, source })?;

        debug!(locale, keys = data.len(), "Loaded translations");
        Ok(data)
    }

    /// Bundles shipped with the crate. Only English is built in; other
    /// locales come back empty.
    pub fn builtin<S: AsRef<str>>(locales: &[S]) -> Vec<LocaleTranslations> {
        locales
            .iter()
            .map(|locale| {
                let locale = locale.as_ref();
                if locale != "en" {
                    return LocaleTranslations::empty(locale);
                }
                match serde_json::from_str(BUILTIN_EN) {
                    Ok(data) => LocaleTranslations {
                        locale: locale.to_string(),
                        data,
                    },
                    Err(e) => {
                        warn!(locale, error = %e, "Built-in translations are malformed");
                        LocaleTranslations::empty(locale)
                    }
                }
            })
            .collect()
    }
}

/// Accepts tags like `en`, `pt-BR`, `zh_Hans`; rejects anything that could
/// escape the translations directory.
fn is_locale_tag(locale: &str) -> bool {
    !locale.is_empty()
        && locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_tags() {
        assert!(is_locale_tag("en"));
        assert!(is_locale_tag("pt-BR"));
        assert!(is_locale_tag("zh_Hans"));
        assert!(!is_locale_tag(""));
        assert!(!is_locale_tag("../secrets"));
        assert!(!is_locale_tag("en/us"));
    }

    #[test]
    fn builtin_english_bundle_parses() {
        let data: BTreeMap<String, String> = serde_json::from_str(BUILTIN_EN).unwrap();
        assert!(data.keys().all(|k| k.starts_with("multiselect-field.")));
    }
}
