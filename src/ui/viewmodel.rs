//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `AppState::compute_viewmodel()`
//! and consumed by the renderer. They hold display-ready data only.
//!
//! [`DetailPanel`] is the detail-panel formatter: it decides every text shown
//! for a single country, including placeholders for missing fields, so the
//! renderer only applies styling.

use crate::app::notification::Notification;
use crate::domain::CountryRecord;

/// Placeholder for a missing attribute.
pub const MISSING_VALUE: &str = "-";

/// Glyph used when a country has no usable alpha-2 code.
pub const FALLBACK_FLAG: &str = "⚑";

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub notification: Option<Notification>,

    /// Present when the clear-results control is attached.
    pub clear_button: Option<ClearButtonInfo>,

    /// List region items, already clipped to the available rows.
    pub list_items: Vec<ListItem>,

    /// Detail region content.
    pub detail: Option<DetailPanel>,

    /// Hint shown when both regions are empty.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// One row of the country list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub flag: String,
    pub name: String,
    pub is_selected: bool,

    /// Character ranges of `name` matching the query, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Detail panel for a single country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub flag: String,
    pub name: String,
    pub flag_url: Option<String>,
    pub capital: String,
    pub population: u64,
    pub language_label: &'static str,
    pub languages: String,
}

impl DetailPanel {
    /// Formats a country for the detail region.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcountry::domain::{CountryRecord, Language};
    /// use zcountry::ui::DetailPanel;
    ///
    /// let mut peru = CountryRecord::new("Peru");
    /// peru.capital = Some("Lima".to_string());
    /// peru.population = 32_000_000;
    /// peru.languages = vec![Language { name: "Spanish".to_string() }];
    ///
    /// let panel = DetailPanel::from_country(&peru);
    /// assert_eq!(panel.capital_line(), ("Capital", "Lima".to_string()));
    /// assert_eq!(panel.population_line(), ("Population", "32000000".to_string()));
    /// assert_eq!(panel.languages_line(), ("Language", "Spanish".to_string()));
    /// ```
    #[must_use]
    pub fn from_country(country: &CountryRecord) -> Self {
        let language_names: Vec<&str> = country.language_names().collect();
        let language_label = if language_names.len() > 1 { "Languages" } else { "Language" };
        let languages = if language_names.is_empty() {
            MISSING_VALUE.to_string()
        } else {
            language_names.join(", ")
        };

        Self {
            flag: country.flag_glyph().unwrap_or_else(|| FALLBACK_FLAG.to_string()),
            name: country.name.clone(),
            flag_url: country.flag_url().map(ToString::to_string),
            capital: country.capital().unwrap_or(MISSING_VALUE).to_string(),
            population: country.population,
            language_label,
            languages,
        }
    }

    #[must_use]
    pub fn capital_line(&self) -> (&'static str, String) {
        ("Capital", self.capital.clone())
    }

    #[must_use]
    pub fn population_line(&self) -> (&'static str, String) {
        ("Population", self.population.to_string())
    }

    #[must_use]
    pub fn languages_line(&self) -> (&'static str, String) {
        (self.language_label, self.languages.clone())
    }

    /// Labelled attribute lines in display order.
    #[must_use]
    pub fn attribute_lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![self.capital_line(), self.population_line(), self.languages_line()];
        if let Some(url) = &self.flag_url {
            lines.push(("Flag", url.clone()));
        }
        lines
    }

    /// The whole panel as unstyled text, one entry per rendered row.
    #[must_use]
    pub fn text_lines(&self) -> Vec<String> {
        std::iter::once(format!("{} {}", self.flag, self.name))
            .chain(
                self.attribute_lines()
                    .into_iter()
                    .map(|(label, value)| format!("{label}: {value}")),
            )
            .collect()
    }
}

/// Clear-results button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearButtonInfo {
    pub label: String,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Hint shown when there is nothing to display.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search box content.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current query field text.
    pub query: String,

    /// Whether a lookup for the current generation is in flight.
    pub is_searching: bool,
}
