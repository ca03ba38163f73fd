//! Localization capability
//!
//! The editor only consumes the [`Localizer`] trait: `translate`,
//! `current_locale` and `set_locale`. [`StringTable`] is the built-in
//! implementation backed by YAML tables embedded at compile time.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

pub const EN_YAML: &str = include_str!("../locales/en.yaml");
pub const DE_YAML: &str = include_str!("../locales/de.yaml");

/// Locale used when nothing else is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Error returned when switching or loading a locale fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// No table exists for this code
    UnknownLocale(String),
    /// A table failed to parse
    ParseError(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::UnknownLocale(code) => write!(f, "Unknown locale: {}", code),
            LocaleError::ParseError(msg) => write!(f, "Locale parse error: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}

/// Injected localization capability
pub trait Localizer: fmt::Debug {
    /// Display string for `key`; unknown keys come back unchanged
    fn translate(&self, key: &str) -> String;

    /// Code of the active locale (e.g. "en")
    fn current_locale(&self) -> &str;

    /// Switch locale; the active locale is unchanged on error
    fn set_locale(&mut self, code: &str) -> Result<(), LocaleError>;

    /// Codes of all locales this localizer can switch to, in display order
    fn available_locales(&self) -> Vec<String>;

    /// Human-readable name of a locale, falling back to its code
    fn locale_name(&self, code: &str) -> String {
        code.to_string()
    }

    /// Translate and substitute `{name}` placeholders
    fn translate_with(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut text = self.translate(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }

    /// Locale that follows the current one, wrapping around
    fn next_locale(&self) -> Option<String> {
        let locales = self.available_locales();
        if locales.is_empty() {
            return None;
        }
        let idx = locales
            .iter()
            .position(|code| code == self.current_locale())
            .map(|i| (i + 1) % locales.len())
            .unwrap_or(0);
        Some(locales[idx].clone())
    }
}

/// One locale table as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleTable {
    pub code: String,
    pub name: String,
    pub strings: HashMap<String, String>,
}

impl LocaleTable {
    pub fn from_yaml(yaml: &str) -> Result<Self, LocaleError> {
        serde_yaml::from_str(yaml).map_err(|e| LocaleError::ParseError(e.to_string()))
    }
}

/// [`Localizer`] backed by in-memory string tables
#[derive(Debug, Clone)]
pub struct StringTable {
    tables: Vec<LocaleTable>,
    current: usize,
}

impl StringTable {
    /// Build from parsed tables; the first table is active
    pub fn new(tables: Vec<LocaleTable>) -> Self {
        Self { tables, current: 0 }
    }

    /// Built-in English and German tables
    pub fn builtin() -> Self {
        let tables = [EN_YAML, DE_YAML]
            .iter()
            .filter_map(|yaml| match LocaleTable::from_yaml(yaml) {
                Ok(table) => Some(table),
                Err(e) => {
                    tracing::warn!("Skipping embedded locale: {}", e);
                    None
                }
            })
            .collect();
        Self::new(tables)
    }

    /// Built-in tables with `code` active, falling back to the default
    pub fn with_locale(code: &str) -> Self {
        let mut table = Self::builtin();
        if let Err(e) = table.set_locale(code) {
            tracing::warn!("{}, using '{}'", e, DEFAULT_LOCALE);
        }
        table
    }

    fn active(&self) -> Option<&LocaleTable> {
        self.tables.get(self.current)
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Localizer for StringTable {
    fn translate(&self, key: &str) -> String {
        self.active()
            .and_then(|table| table.strings.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    fn current_locale(&self) -> &str {
        self.active()
            .map(|table| table.code.as_str())
            .unwrap_or(DEFAULT_LOCALE)
    }

    fn set_locale(&mut self, code: &str) -> Result<(), LocaleError> {
        let idx = self
            .tables
            .iter()
            .position(|table| table.code == code)
            .ok_or_else(|| LocaleError::UnknownLocale(code.to_string()))?;
        self.current = idx;
        Ok(())
    }

    fn available_locales(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.code.clone()).collect()
    }

    fn locale_name(&self, code: &str) -> String {
        self.tables
            .iter()
            .find(|table| table.code == code)
            .map(|table| table.name.clone())
            .unwrap_or_else(|| code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_parse() {
        assert!(LocaleTable::from_yaml(EN_YAML).is_ok());
        assert!(LocaleTable::from_yaml(DE_YAML).is_ok());
    }

    #[test]
    fn test_embedded_tables_have_same_keys() {
        let en = LocaleTable::from_yaml(EN_YAML).unwrap();
        let de = LocaleTable::from_yaml(DE_YAML).unwrap();
        for key in en.strings.keys() {
            assert!(de.strings.contains_key(key), "missing German key: {}", key);
        }
        assert_eq!(en.strings.len(), de.strings.len());
    }

    #[test]
    fn test_translate_with_placeholders() {
        let table = StringTable::builtin();
        let text = table.translate_with("status.size", &[("size", "7".to_string())]);
        assert_eq!(text, "Size 7");
    }
}
