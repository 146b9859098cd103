//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the query field,
//! the output regions, the current notification, the debounce counter and the
//! request generation used to discard stale lookups.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns the state into a [`UIViewModel`] for the renderer:
//! list rows with query highlighting, the detail panel, the clear-results
//! button and the key hints for the current view mode.

use super::debounce::Debouncer;
use super::modes::{ViewMode, WebAccess};
use super::notification::Notification;
use super::pipeline::DEFAULT_MAX_LIST_ITEMS;
use super::regions::Regions;
use crate::api::DEFAULT_API_BASE_URL;
use crate::domain::CountryRecord;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ClearButtonInfo, DetailPanel, EmptyState, FooterInfo, HeaderInfo, ListItem, SearchBarInfo,
    UIViewModel, FALLBACK_FLAG,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use std::time::Duration;

/// Columns used by a list row besides the name (margin, flag, spacing).
const LIST_ITEM_CHROME: usize = 6;

/// Label of the clear-results button.
const CLEAR_BUTTON_LABEL: &str = "[ Clear results ]";

/// Lookup settings taken from the plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSettings {
    /// Name-search endpoint, without the query segment.
    pub api_base_url: String,

    /// Largest result still rendered as a list.
    pub max_list_items: usize,

    /// Quiet period before a query is looked up.
    pub debounce: Duration,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            max_list_items: DEFAULT_MAX_LIST_ITEMS,
            debounce: super::debounce::DEFAULT_DEBOUNCE,
        }
    }
}

/// What a click on a given row hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    ClearButton,
    ListItem(usize),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Text of the query field.
    pub query: String,

    /// List and detail output regions.
    pub regions: Regions,

    /// Message currently shown under the search bar.
    pub notification: Option<Notification>,

    /// Keystroke debouncer.
    pub debouncer: Debouncer,

    /// Current request generation.
    ///
    /// Bumped by every keystroke, every clear and every fetch. A response is
    /// only applied when it carries the current value.
    pub generation: u64,

    /// Query of the fetch currently awaited, if any.
    pub in_flight: Option<String>,

    /// Whether the host allows web requests.
    pub web_access: WebAccess,

    /// Pane height of the last render; `None` before the first one.
    ///
    /// Click mapping and the selection cursor only reach list items that fit
    /// on screen at this height.
    pub pane_rows: Option<usize>,

    pub settings: LookupSettings,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state with the given settings and theme.
    #[must_use]
    pub fn new(settings: LookupSettings, theme: Theme) -> Self {
        Self {
            query: String::new(),
            regions: Regions::default(),
            notification: None,
            debouncer: Debouncer::new(settings.debounce),
            generation: 0,
            in_flight: None,
            web_access: WebAccess::Pending,
            pane_rows: None,
            settings,
            theme,
        }
    }

    /// Returns the current view mode, derived from the regions.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        ViewMode::of(&self.regions)
    }

    /// Starts a new request generation, orphaning any fetch in flight.
    pub fn invalidate_fetch(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        if let Some(query) = self.in_flight.take() {
            tracing::debug!(query = %query, generation = self.generation, "in-flight lookup orphaned");
        }
        self.generation
    }

    /// Records the pane height and keeps the cursor on a drawn row.
    pub fn set_pane_rows(&mut self, rows: usize) {
        self.pane_rows = Some(rows);
        let visible = self.visible_list_len();
        self.regions.clamp_selection(visible);
    }

    /// Number of list items drawn at the last known pane height.
    #[must_use]
    pub fn visible_list_len(&self) -> usize {
        let len = self.regions.list.len();
        self.pane_rows.map_or(len, |rows| {
            len.min(layout::content_rows(rows, self.regions.clear_control))
        })
    }

    /// Maps a 1-indexed terminal row to the control rendered there.
    #[must_use]
    pub fn target_at_row(&self, row: usize) -> Option<ClickTarget> {
        if self.regions.clear_control && row == layout::clear_button_row() {
            return Some(ClickTarget::ClearButton);
        }

        let start = layout::content_start_row(self.regions.clear_control);
        let index = row.checked_sub(start)?;
        (index < self.visible_list_len()).then_some(ClickTarget::ListItem(index))
    }

    /// Computes a renderable UI view model from current state and pane size.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let content_rows = layout::content_rows(rows, self.regions.clear_control);

        let list_items = if self.regions.list.is_empty() {
            vec![]
        } else {
            let matcher = SkimMatcherV2::default().ignore_case();
            self.regions
                .list
                .iter()
                .take(content_rows)
                .enumerate()
                .map(|(idx, country)| self.compute_list_item(country, idx, cols, &matcher))
                .collect()
        };

        let empty_state = (self.regions.is_empty()
            && self.in_flight.is_none()
            && !self.debouncer.is_pending())
        .then(|| self.compute_empty_state());

        UIViewModel {
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.query.clone(),
                is_searching: self.in_flight.is_some() || self.debouncer.is_pending(),
            },
            notification: self.notification.clone(),
            clear_button: self.regions.clear_control.then(|| ClearButtonInfo {
                label: CLEAR_BUTTON_LABEL.to_string(),
            }),
            list_items,
            detail: self.regions.detail.as_ref().map(DetailPanel::from_country),
            empty_state,
            footer: self.compute_footer(),
        }
    }

    /// Computes one list row, highlighting the characters matched by the query.
    ///
    /// Names wider than the pane are cut with a trailing `...`; highlight
    /// ranges are clipped to the visible part.
    fn compute_list_item(&self, country: &CountryRecord, idx: usize, cols: usize, matcher: &SkimMatcherV2) -> ListItem {
        let max_name_width = cols.saturating_sub(LIST_ITEM_CHROME);
        let name_len = country.name.chars().count();

        let (name, visible_len) = if name_len > max_name_width && max_name_width > 3 {
            let keep = max_name_width - 3;
            let cut: String = country.name.chars().take(keep).collect();
            (format!("{cut}..."), keep)
        } else {
            (country.name.clone(), name_len)
        };

        let highlight_ranges = self
            .compute_highlight_ranges(&country.name, matcher)
            .into_iter()
            .filter(|&(start, _)| start < visible_len)
            .map(|(start, end)| (start, end.min(visible_len)))
            .collect();

        ListItem {
            flag: country.flag_glyph().unwrap_or_else(|| FALLBACK_FLAG.to_string()),
            name,
            is_selected: idx == self.regions.selected_index,
            highlight_ranges,
        }
    }

    /// Computes character index ranges to highlight.
    ///
    /// Consecutive match indices are coalesced into `(start, end)` ranges.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let pattern = self.query.trim();
        if pattern.is_empty() {
            return vec![];
        }

        let Some((_score, indices)) = matcher.fuzzy_indices(text, pattern) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.view_mode() {
            ViewMode::Empty => " Country Lookup ".to_string(),
            ViewMode::List => format!(" Country Lookup ({} matches) ", self.regions.list.len()),
            ViewMode::Detail => " Country Lookup (1 match) ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.web_access, self.view_mode()) {
            (WebAccess::Pending, _) => "Waiting for web access permission  Esc: quit",
            (WebAccess::Denied, _) => "Web access denied: lookups disabled  Esc: quit",
            (WebAccess::Granted, ViewMode::Empty) => "Type a country name  Backspace: delete  Esc: quit",
            (WebAccess::Granted, ViewMode::List) => {
                "Up/Down: navigate  Enter or click: details  Type to refine  Esc: quit"
            }
            (WebAccess::Granted, ViewMode::Detail) => {
                "Ctrl+l or click button: clear results  Type to search again  Esc: quit"
            }
        };

        FooterInfo { keybindings: keybindings.to_string() }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.query.trim().is_empty() {
            EmptyState {
                message: "Search for a country".to_string(),
                subtitle: "Letters and spaces only, results appear as you type".to_string(),
            }
        } else {
            EmptyState {
                message: "No results".to_string(),
                subtitle: "Refine the name to try again".to_string(),
            }
        }
    }
}
