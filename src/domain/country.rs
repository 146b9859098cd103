//! Country domain model.
//!
//! [`CountryRecord`] mirrors the subset of the REST Countries v2 document the
//! plugin displays. The record is owned by the external API; the plugin only
//! reads it.

use serde::{Deserialize, Serialize};

/// Offset between an ASCII uppercase letter and its regional indicator symbol.
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

/// A single country as returned by the country-data API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default, rename = "alpha2Code")]
    pub alpha2_code: Option<String>,
}

/// A spoken language entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
}

/// Flag image URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
}

impl CountryRecord {
    /// Creates a record with the given name and no optional attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capital: None,
            population: 0,
            languages: Vec::new(),
            flags: Flags::default(),
            alpha2_code: None,
        }
    }

    /// Returns the capital, treating a blank string as absent.
    #[must_use]
    pub fn capital(&self) -> Option<&str> {
        self.capital
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Returns the language names in API order.
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.name.as_str())
    }

    /// Returns the preferred flag image URL (SVG first, then PNG).
    #[must_use]
    pub fn flag_url(&self) -> Option<&str> {
        self.flags.svg.as_deref().or(self.flags.png.as_deref())
    }

    /// Returns the flag as a pair of regional indicator symbols.
    ///
    /// Terminals cannot show the flag image, but most fonts render the
    /// regional indicator pair for a two-letter country code as the flag.
    /// Returns `None` when the record has no valid alpha-2 code.
    #[must_use]
    pub fn flag_glyph(&self) -> Option<String> {
        let code = self.alpha2_code.as_deref()?;
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        code.chars()
            .map(|c| char::from_u32(c.to_ascii_uppercase() as u32 + REGIONAL_INDICATOR_OFFSET))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_v2_document() {
        let json = r#"{
            "name": "Peru",
            "capital": "Lima",
            "population": 32971846,
            "alpha2Code": "PE",
            "flags": {"svg": "https://flagcdn.com/pe.svg", "png": "https://flagcdn.com/w320/pe.png"},
            "languages": [{"iso639_1": "es", "name": "Spanish", "nativeName": "Español"}],
            "independent": false
        }"#;

        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Peru");
        assert_eq!(record.capital(), Some("Lima"));
        assert_eq!(record.population, 32_971_846);
        assert_eq!(record.language_names().collect::<Vec<_>>(), vec!["Spanish"]);
        assert_eq!(record.flag_url(), Some("https://flagcdn.com/pe.svg"));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let record: CountryRecord = serde_json::from_str(r#"{"name": "Antarctica"}"#).unwrap();
        assert_eq!(record.capital(), None);
        assert!(record.languages.is_empty());
        assert_eq!(record.flag_url(), None);
        assert_eq!(record.flag_glyph(), None);
    }

    #[test]
    fn test_blank_capital_is_absent() {
        let mut record = CountryRecord::new("Nowhere");
        record.capital = Some("  ".to_string());
        assert_eq!(record.capital(), None);
    }

    #[test]
    fn test_flag_glyph_from_alpha2() {
        let mut record = CountryRecord::new("Peru");
        record.alpha2_code = Some("pe".to_string());
        assert_eq!(record.flag_glyph().as_deref(), Some("\u{1F1F5}\u{1F1EA}"));

        record.alpha2_code = Some("PER".to_string());
        assert_eq!(record.flag_glyph(), None);
    }

    #[test]
    fn test_png_used_when_svg_missing() {
        let mut record = CountryRecord::new("Peru");
        record.flags.png = Some("pe.png".to_string());
        assert_eq!(record.flag_url(), Some("pe.png"));
    }
}
