//! zcountry: a Zellij plugin for looking up countries by name.
//!
//! Type a name fragment and the plugin queries a public country-data API:
//! - a 300 ms debounce coalesces keystrokes into one lookup
//! - queries are restricted to letters and spaces
//! - 2 to 10 matches render as a selectable list with the query highlighted
//! - a single match renders a detail panel (flag, capital, population,
//!   languages) with a clear-results control
//! - larger result sets ask for a more specific name
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - key/mouse/timer/web events → app::Event          │
//! │  - app::Action → set_timeout / web_request          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Debounce, generation counter                     │
//! │  - Render policy, output regions                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐        ┌───────────────────────┐
//! │ UI Layer (ui/)    │        │ API Layer (api/)      │
//! │ - Components      │        │ - Request URLs        │
//! │ - Layout, theming │        │ - Response decoding   │
//! └───────────────────┘        └───────────────────────┘
//!         │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Query, CountryRecord, errors (domain/)           │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library never calls into Zellij: every host interaction is an
//! [`Action`] returned from [`handle_event`], which keeps the whole lookup
//! flow testable on the host.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zcountry.wasm" {
//!         api_base_url "https://restcountries.com/v2/name"
//!         debounce_ms "300"
//!         max_list_items "10"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use zcountry::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::from_zellij(&BTreeMap::new()));
//! handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//!
//! for c in "peru".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//!
//! // Four timers were armed; only the last expiry issues the lookup.
//! let mut fetches = vec![];
//! for _ in 0..4 {
//!     let (_, actions) = handle_event(&mut state, &Event::DebounceElapsed)?;
//!     fetches.extend(actions);
//! }
//! assert!(matches!(fetches.as_slice(), [Action::FetchCountries { query, .. }] if query == "peru"));
//! # Ok::<(), zcountry::CountryLookupError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, LookupSettings, ViewMode};
pub use domain::{CountryLookupError, CountryRecord, Query, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/zcountry.wasm" {
///     theme_file "~/.config/zellij/zcountry-theme.toml"
///     trace_level "zcountry::app=debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name-search endpoint. Default: REST Countries v2.
    pub api_base_url: String,

    /// Keystroke debounce in milliseconds. Default: 300
    pub debounce_ms: u64,

    /// Largest result rendered as a list. Default: 10
    pub max_list_items: usize,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file, `~` already mapped into the sandbox.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let settings = LookupSettings::default();
        Self {
            api_base_url: settings.api_base_url,
            debounce_ms: u64::try_from(settings.debounce.as_millis()).unwrap_or(u64::MAX),
            max_list_items: settings.max_list_items,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Blank strings count as unset. Numbers that do
    /// not parse (or a zero `max_list_items`) keep their default and are
    /// logged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zcountry::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "150".to_string());
    /// map.insert("max_list_items".to_string(), "many".to_string());
    /// map.insert("theme_file".to_string(), "~/theme.toml".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.debounce_ms, 150);
    /// assert_eq!(config.max_list_items, 10);
    /// assert_eq!(config.theme_file.as_deref(), Some("/host/theme.toml"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            api_base_url: value("api_base_url").unwrap_or(defaults.api_base_url),
            debounce_ms: number_or(config, "debounce_ms", defaults.debounce_ms),
            max_list_items: Some(number_or(config, "max_list_items", defaults.max_list_items))
                .filter(|&n| n > 0)
                .unwrap_or(defaults.max_list_items),
            theme_name: value("theme"),
            theme_file: value("theme_file").map(|path| infrastructure::expand_tilde(&path)),
            trace_level: value("trace_level"),
        }
    }

    /// Lookup settings for [`AppState`].
    #[must_use]
    pub fn lookup_settings(&self) -> LookupSettings {
        LookupSettings {
            api_base_url: self.api_base_url.clone(),
            max_list_items: self.max_list_items,
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }

    /// Loads the configured theme: `theme_file`, then `theme`, then the default.
    ///
    /// # Errors
    ///
    /// Returns the file loading error, or [`CountryLookupError::Theme`] for
    /// an unknown built-in name.
    pub fn load_theme(&self) -> Result<Theme> {
        if let Some(path) = &self.theme_file {
            return Theme::from_file(path);
        }
        match &self.theme_name {
            Some(name) => Theme::from_name(name)
                .ok_or_else(|| CountryLookupError::Theme(format!("unknown built-in theme '{name}'"))),
            None => Ok(Theme::default()),
        }
    }
}

/// Parses a numeric configuration value.
fn parse_number<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| CountryLookupError::Config(format!("{key} must be a non-negative integer, got '{raw}'")))
}

fn number_or<T: FromStr>(config: &BTreeMap<String, String>, key: &str, default: T) -> T {
    match config.get(key).map(|raw| parse_number(key, raw)) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "invalid configuration value, using default");
            default
        }
        None => default,
    }
}

/// Initializes the plugin state from configuration.
///
/// Tracing is set up separately by the shim (see
/// [`observability::init_tracing`]) so that library tests never install a
/// global subscriber. A theme that fails to load falls back to the default.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_base_url = %config.api_base_url, "initializing zcountry plugin");

    let theme = config.load_theme().unwrap_or_else(|e| {
        tracing::warn!(
            theme_name = ?config.theme_name,
            theme_file = ?config.theme_file,
            error = %e,
            "failed to load theme, using default"
        );
        Theme::default()
    });

    AppState::new(config.lookup_settings(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.max_list_items, 10);
        assert_eq!(config.api_base_url, "https://restcountries.com/v2/name");
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = Config::from_zellij(&map(&[("debounce_ms", "-5"), ("max_list_items", "0")]));
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.max_list_items, 10);
    }

    #[test]
    fn test_parse_number_reports_config_error() {
        let err = parse_number::<u64>("debounce_ms", "soon").unwrap_err();
        assert!(matches!(err, CountryLookupError::Config(msg) if msg.contains("debounce_ms")));
    }

    #[test]
    fn test_overrides_flow_into_state() {
        let config = Config::from_zellij(&map(&[
            ("api_base_url", "http://localhost:8080/v2/name"),
            ("debounce_ms", "50"),
            ("max_list_items", "5"),
            ("theme", "catppuccin-latte"),
        ]));

        let state = initialize(&config);
        assert_eq!(state.settings.api_base_url, "http://localhost:8080/v2/name");
        assert_eq!(state.settings.max_list_items, 5);
        assert_eq!(state.debouncer.delay(), Duration::from_millis(50));
        assert_eq!(state.theme.name, "catppuccin-latte");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let config = Config::from_zellij(&map(&[("theme", "solarized")]));
        assert!(matches!(config.load_theme(), Err(CountryLookupError::Theme(_))));
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn test_theme_file_takes_precedence() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml = include_str!("../themes/catppuccin-frappe.toml").replace("catppuccin-frappe", "mine");
        file.write_all(toml.as_bytes()).unwrap();

        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("theme_file", file.path().to_str().unwrap()),
        ]));
        assert_eq!(config.load_theme().map(|t| t.name).ok(), Some("mine".to_string()));
    }
}
