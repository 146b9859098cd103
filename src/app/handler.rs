//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! host timers and web request completions, translating them into state
//! changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `Regions` methods
//! 4. Actions are collected and returned for execution
//!
//! # Lookup Pipeline
//!
//! ```text
//! Char/Backspace ─▶ clear regions, bump generation, ScheduleTimer
//! DebounceElapsed (last timer) ─▶ validate ─▶ FetchCountries{generation}
//! FetchCompleted{generation} ─▶ drop if stale ─▶ decode ─▶ classify ─▶ regions
//! ```
//!
//! # Example
//!
//! ```rust
//! use zcountry::app::{handle_event, Action, AppState, Event, LookupSettings};
//! use zcountry::ui::theme::Theme;
//!
//! let mut state = AppState::new(LookupSettings::default(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Char('p'))?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::ScheduleTimer { delay_ms: 300 }]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::WebAccess;
use super::notification::{
    Notification, LETTERS_ONLY, NO_SUCH_COUNTRY, TOO_MANY_MATCHES, WEB_ACCESS_GRANTED,
    WEB_ACCESS_MISSING,
};
use super::pipeline::{classify, RenderPlan};
use super::state::ClickTarget;
use crate::api::{decode_search_response, search_url};
use crate::app::{Action, AppState};
use crate::domain::error::{CountryLookupError, Result};
use crate::domain::Query;

/// Events triggered by user input or by the plugin host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query field.
    Char(char),
    /// Removes the last character from the query field.
    Backspace,

    /// A debounce timer armed by a keystroke expired.
    DebounceElapsed,

    /// A country search issued by [`Action::FetchCountries`] completed.
    FetchCompleted {
        /// Generation the request was issued with.
        generation: u64,
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Moves the list cursor down by one position (wraps to top).
    SelectionDown,
    /// Moves the list cursor up by one position (wraps to bottom).
    SelectionUp,
    /// Opens the list item under the cursor.
    OpenSelected,
    /// Opens the list item at `index`.
    SelectCountry { index: usize },

    /// Activates the clear-results control.
    ClearResults,

    /// Left click on a 1-indexed pane row.
    Click { row: usize },

    /// Reports whether web access was granted.
    PermissionsResult { granted: bool },

    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag tells the runtime whether the pane must be re-rendered.
///
/// # Errors
///
/// Decoding failures of a current response are reported to the user as a
/// notification and do not surface here; the `Result` carries unexpected
/// failures only.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = %event_name(event)).entered();

    match event {
        Event::Char(c) => {
            state.query.push(*c);
            tracing::trace!(query = %state.query, char = %c, "query updated");
            Ok((true, on_input(state)))
        }
        Event::Backspace => {
            if state.query.pop().is_none() {
                return Ok((false, vec![]));
            }
            tracing::trace!(query = %state.query, "query updated");
            Ok((true, on_input(state)))
        }
        Event::DebounceElapsed => {
            if !state.debouncer.expire() {
                tracing::trace!("superseded debounce timer expired");
                return Ok((false, vec![]));
            }
            Ok((true, run_lookup(state)))
        }
        Event::FetchCompleted { generation, status, body } => {
            if *generation != state.generation {
                tracing::debug!(
                    response_generation = generation,
                    current_generation = state.generation,
                    "discarding stale lookup response"
                );
                return Ok((false, vec![]));
            }

            let query = state.in_flight.take().unwrap_or_default();
            match decode_search_response(*status, body) {
                Ok(records) => {
                    tracing::debug!(query = %query, matches = records.len(), "lookup completed");
                    let plan = classify(records, state.settings.max_list_items);
                    apply_plan(state, plan);
                }
                Err(e @ CountryLookupError::Decode(_)) => {
                    tracing::error!(query = %query, status = status, error = %e, "undecodable lookup response");
                    state.regions.clear();
                    state.notification = Some(Notification::failure(NO_SUCH_COUNTRY));
                }
                Err(e) => {
                    tracing::debug!(query = %query, status = status, error = %e, "lookup failed");
                    state.regions.clear();
                    state.notification = Some(Notification::failure(NO_SUCH_COUNTRY));
                }
            }
            Ok((true, vec![]))
        }
        Event::SelectionDown => {
            let visible = state.visible_list_len();
            state.regions.move_selection_down(visible);
            Ok((!state.regions.list.is_empty(), vec![]))
        }
        Event::SelectionUp => {
            let visible = state.visible_list_len();
            state.regions.move_selection_up(visible);
            Ok((!state.regions.list.is_empty(), vec![]))
        }
        Event::OpenSelected => {
            let index = state.regions.selected_index;
            Ok((open_item(state, index), vec![]))
        }
        Event::SelectCountry { index } => Ok((open_item(state, *index), vec![])),
        Event::ClearResults => Ok((clear_results(state), vec![])),
        Event::Click { row } => {
            let render = match state.target_at_row(*row) {
                Some(ClickTarget::ClearButton) => clear_results(state),
                Some(ClickTarget::ListItem(index)) => open_item(state, index),
                None => false,
            };
            Ok((render, vec![]))
        }
        Event::PermissionsResult { granted } => {
            tracing::info!(granted = granted, "web access permission result");
            if *granted {
                state.web_access = WebAccess::Granted;
                state.notification = Some(Notification::success(WEB_ACCESS_GRANTED));
            } else {
                state.web_access = WebAccess::Denied;
                state.notification = Some(Notification::failure(WEB_ACCESS_MISSING));
            }
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Short event name for span fields; payloads such as response bodies stay
/// out of the trace.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::DebounceElapsed => "DebounceElapsed",
        Event::FetchCompleted { .. } => "FetchCompleted",
        Event::SelectionDown => "SelectionDown",
        Event::SelectionUp => "SelectionUp",
        Event::OpenSelected => "OpenSelected",
        Event::SelectCountry { .. } => "SelectCountry",
        Event::ClearResults => "ClearResults",
        Event::Click { .. } => "Click",
        Event::PermissionsResult { .. } => "PermissionsResult",
        Event::CloseFocus => "CloseFocus",
    }
}

/// Reacts to a change of the query field.
///
/// Both regions are emptied right away and any fetch in flight is orphaned;
/// the lookup itself waits for the debounce timer armed here.
fn on_input(state: &mut AppState) -> Vec<Action> {
    state.regions.clear();
    state.notification = None;
    state.invalidate_fetch();

    let delay = state.debouncer.arm();
    vec![Action::ScheduleTimer {
        delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
    }]
}

/// Validates the settled query and issues a fetch for it.
fn run_lookup(state: &mut AppState) -> Vec<Action> {
    let query = match Query::parse(&state.query) {
        Ok(Some(query)) => query,
        Ok(None) => {
            state.regions.clear();
            return vec![];
        }
        Err(e) => {
            tracing::debug!(query = %state.query, error = %e, "query rejected");
            state.notification = Some(Notification::info(LETTERS_ONLY));
            return vec![];
        }
    };

    if state.web_access != WebAccess::Granted {
        tracing::warn!(query = %query, web_access = ?state.web_access, "lookup withheld");
        state.notification = Some(Notification::failure(WEB_ACCESS_MISSING));
        return vec![];
    }

    let generation = state.invalidate_fetch();
    let url = search_url(&state.settings.api_base_url, &query);
    state.in_flight = Some(query.to_string());

    tracing::debug!(query = %query, generation = generation, url = %url, "issuing lookup");
    vec![Action::FetchCountries {
        url,
        query: query.to_string(),
        generation,
    }]
}

/// Writes a classified result into the regions.
fn apply_plan(state: &mut AppState, plan: RenderPlan) {
    match plan {
        RenderPlan::NoMatches => {
            state.regions.clear();
            state.notification = Some(Notification::failure(NO_SUCH_COUNTRY));
        }
        RenderPlan::TooMany { count } => {
            tracing::debug!(count = count, "too many matches to list");
            state.regions.clear();
            state.notification = Some(Notification::info(TOO_MANY_MATCHES));
        }
        RenderPlan::List(records) => state.regions.show_list(records),
        RenderPlan::Detail(record) => state.regions.show_detail(record),
    }
}

/// Opens list item `index` in the detail region.
fn open_item(state: &mut AppState, index: usize) -> bool {
    let opened = state.regions.open_item(index);
    if !opened {
        tracing::debug!(index = index, "no list item to open");
    }
    opened
}

/// Clears both regions and the query field.
///
/// Only reachable while the clear-results control is attached.
fn clear_results(state: &mut AppState) -> bool {
    if !state.regions.clear_control {
        return false;
    }
    state.regions.clear();
    state.query.clear();
    state.notification = None;
    state.invalidate_fetch();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::LookupSettings;
    use crate::ui::theme::Theme;

    fn granted_state() -> AppState {
        let mut state = AppState::new(LookupSettings::default(), Theme::default());
        state.web_access = WebAccess::Granted;
        state
    }

    fn type_query(state: &mut AppState, text: &str) -> Vec<Action> {
        let mut actions = vec![];
        for c in text.chars() {
            let (_, mut emitted) = handle_event(state, &Event::Char(c)).unwrap();
            actions.append(&mut emitted);
        }
        actions
    }

    /// Expires every armed timer and returns the actions of the last expiry.
    fn settle(state: &mut AppState) -> Vec<Action> {
        let mut actions = vec![];
        while state.debouncer.is_pending() {
            let (_, mut emitted) = handle_event(state, &Event::DebounceElapsed).unwrap();
            actions.append(&mut emitted);
        }
        actions
    }

    fn country_json(name: &str, capital: Option<&str>) -> String {
        let capital = capital.map_or_else(|| "null".to_string(), |c| format!("\"{c}\""));
        format!(
            r#"{{"name":"{name}","capital":{capital},"population":32000000,"languages":[{{"name":"Spanish"}}],"flags":{{"svg":"https://flagcdn.com/pe.svg"}},"alpha2Code":"PE"}}"#
        )
    }

    fn respond(state: &mut AppState, generation: u64, body: String) -> bool {
        let (render, actions) = handle_event(
            state,
            &Event::FetchCompleted { generation, status: 200, body: body.into_bytes() },
        )
        .unwrap();
        assert!(actions.is_empty());
        render
    }

    fn fetch_generation(actions: &[Action]) -> u64 {
        match actions {
            [Action::FetchCountries { generation, .. }] => *generation,
            other => panic!("expected one fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_keystroke_schedules_debounce_timer() {
        let mut state = granted_state();
        let actions = type_query(&mut state, "pe");
        assert_eq!(
            actions,
            vec![
                Action::ScheduleTimer { delay_ms: 300 },
                Action::ScheduleTimer { delay_ms: 300 },
            ]
        );
        assert_eq!(state.query, "pe");
    }

    #[test]
    fn test_burst_of_keystrokes_fetches_once_with_final_value() {
        let mut state = granted_state();
        type_query(&mut state, "peru");

        let actions = settle(&mut state);
        assert_eq!(actions.len(), 1);
        match &actions[0] {
            Action::FetchCountries { url, query, .. } => {
                assert_eq!(query, "peru");
                assert!(url.contains("/name/peru?"));
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_digits_never_fetch() {
        let mut state = granted_state();
        type_query(&mut state, "peru1");

        assert!(settle(&mut state).is_empty());
        assert_eq!(state.notification, Some(Notification::info(LETTERS_ONLY)));
        assert!(state.in_flight.is_none());
    }

    #[test]
    fn test_rejected_query_leaves_regions_alone() {
        let mut state = granted_state();
        type_query(&mut state, "nig3r");
        state.regions.show_list(vec![
            crate::domain::CountryRecord::new("Niger"),
            crate::domain::CountryRecord::new("Nigeria"),
        ]);

        assert!(settle(&mut state).is_empty());
        assert_eq!(state.regions.list.len(), 2);
        assert_eq!(state.notification, Some(Notification::info(LETTERS_ONLY)));
    }

    #[test]
    fn test_empty_query_clears_without_fetch() {
        let mut state = granted_state();
        state.regions.show_detail(crate::domain::CountryRecord::new("Peru"));
        type_query(&mut state, "p");
        handle_event(&mut state, &Event::Backspace).unwrap();

        assert!(settle(&mut state).is_empty());
        assert!(state.regions.is_empty());
        assert!(!state.regions.clear_control);
    }

    #[test]
    fn test_whitespace_query_clears_without_fetch() {
        let mut state = granted_state();
        type_query(&mut state, "   ");
        assert!(settle(&mut state).is_empty());
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_backspace_on_empty_query_is_noop() {
        let mut state = granted_state();
        let (render, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(!state.debouncer.is_pending());
    }

    #[test]
    fn test_input_clears_regions_immediately() {
        let mut state = granted_state();
        state.regions.show_detail(crate::domain::CountryRecord::new("Peru"));
        state.notification = Some(Notification::info(TOO_MANY_MATCHES));

        type_query(&mut state, "x");
        assert!(state.regions.is_empty());
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_single_result_renders_detail_with_clear_control() {
        let mut state = granted_state();
        type_query(&mut state, "peru");
        let generation = fetch_generation(&settle(&mut state));

        assert!(respond(&mut state, generation, format!("[{}]", country_json("Peru", Some("Lima")))));
        assert!(state.regions.clear_control);
        assert!(state.regions.list.is_empty());

        let vm = state.compute_viewmodel(24, 80);
        let lines = vm.detail.map(|d| d.text_lines()).unwrap_or_default();
        assert!(lines.contains(&"Capital: Lima".to_string()));
        assert!(lines.contains(&"Population: 32000000".to_string()));
        assert!(lines.contains(&"Language: Spanish".to_string()));
        assert!(vm.clear_button.is_some());
    }

    #[test]
    fn test_missing_capital_renders_placeholder() {
        let mut state = granted_state();
        type_query(&mut state, "bouvet");
        let generation = fetch_generation(&settle(&mut state));

        respond(&mut state, generation, format!("[{}]", country_json("Bouvet Island", None)));
        let lines = state
            .compute_viewmodel(24, 80)
            .detail
            .map(|d| d.text_lines())
            .unwrap_or_default();
        assert!(lines.contains(&"Capital: -".to_string()));
        assert!(lines.iter().all(|l| !l.contains("undefined")));
    }

    #[test]
    fn test_too_many_matches_notifies_and_renders_nothing() {
        let mut state = granted_state();
        type_query(&mut state, "a");
        let generation = fetch_generation(&settle(&mut state));

        let items: Vec<String> = (0..15).map(|i| country_json(&format!("Land {i}"), None)).collect();
        respond(&mut state, generation, format!("[{}]", items.join(",")));

        assert!(state.regions.is_empty());
        assert_eq!(state.notification, Some(Notification::info(TOO_MANY_MATCHES)));
    }

    #[test]
    fn test_list_selection_opens_chosen_record() {
        let mut state = granted_state();
        type_query(&mut state, "guinea");
        let generation = fetch_generation(&settle(&mut state));

        let body = format!(
            "[{},{},{}]",
            country_json("Guinea", Some("Conakry")),
            country_json("Guinea-Bissau", Some("Bissau")),
            country_json("Equatorial Guinea", Some("Malabo")),
        );
        respond(&mut state, generation, body);
        assert_eq!(state.regions.list.len(), 3);
        assert!(!state.regions.clear_control);

        let (render, _) = handle_event(&mut state, &Event::SelectCountry { index: 1 }).unwrap();
        assert!(render);
        let detail = state.regions.detail.as_ref().map(|d| d.name.as_str());
        assert_eq!(detail, Some("Guinea-Bissau"));
        assert!(state.regions.clear_control);
    }

    #[test]
    fn test_keyboard_and_click_selection() {
        let mut state = granted_state();
        state.regions.show_list(vec![
            crate::domain::CountryRecord::new("Niger"),
            crate::domain::CountryRecord::new("Nigeria"),
        ]);

        handle_event(&mut state, &Event::SelectionDown).unwrap();
        handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert_eq!(state.regions.detail.as_ref().map(|d| d.name.as_str()), Some("Nigeria"));

        let (render, _) = handle_event(&mut state, &Event::Click { row: 9 }).unwrap();
        assert!(render);
        assert!(state.regions.is_empty());
    }

    #[test]
    fn test_selection_and_clicks_limited_to_drawn_rows() {
        let mut state = granted_state();
        state.regions.show_list(
            (0..10)
                .map(|i| crate::domain::CountryRecord::new(format!("Country {i}")))
                .collect(),
        );
        state.set_pane_rows(14);

        for _ in 0..3 {
            handle_event(&mut state, &Event::SelectionDown).unwrap();
        }
        assert_eq!(state.regions.selected_index, 0);

        let (render, _) = handle_event(&mut state, &Event::Click { row: 13 }).unwrap();
        assert!(!render);
        assert_eq!(state.regions.list.len(), 10);
    }

    #[test]
    fn test_not_found_notifies_failure() {
        let mut state = granted_state();
        type_query(&mut state, "atlantis");
        let generation = fetch_generation(&settle(&mut state));

        let body = br#"{"status":404,"message":"Not Found"}"#.to_vec();
        handle_event(&mut state, &Event::FetchCompleted { generation, status: 404, body }).unwrap();

        assert!(state.regions.is_empty());
        assert_eq!(state.notification, Some(Notification::failure(NO_SUCH_COUNTRY)));
        assert!(state.in_flight.is_none());
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state = granted_state();
        type_query(&mut state, "peru");
        let stale = fetch_generation(&settle(&mut state));

        type_query(&mut state, "x");
        let render = respond(&mut state, stale, format!("[{}]", country_json("Peru", Some("Lima"))));

        assert!(!render);
        assert!(state.regions.is_empty());
        assert!(state.debouncer.is_pending());
    }

    #[test]
    fn test_clear_results_resets_query_and_orphans_fetch() {
        let mut state = granted_state();
        type_query(&mut state, "peru");
        let generation = fetch_generation(&settle(&mut state));
        respond(&mut state, generation, format!("[{}]", country_json("Peru", Some("Lima"))));

        let (render, _) = handle_event(&mut state, &Event::ClearResults).unwrap();
        assert!(render);
        assert!(state.query.is_empty());
        assert!(state.regions.is_empty());
        assert!(!state.regions.clear_control);
        assert_ne!(state.generation, generation);
    }

    #[test]
    fn test_clear_results_without_control_is_noop() {
        let mut state = granted_state();
        state.query = "pe".to_string();
        let (render, _) = handle_event(&mut state, &Event::ClearResults).unwrap();
        assert!(!render);
        assert_eq!(state.query, "pe");
    }

    #[test]
    fn test_lookup_withheld_without_web_access() {
        let mut state = AppState::new(LookupSettings::default(), Theme::default());
        type_query(&mut state, "peru");

        assert!(settle(&mut state).is_empty());
        assert_eq!(state.notification, Some(Notification::failure(WEB_ACCESS_MISSING)));
    }

    #[test]
    fn test_permission_result_updates_access() {
        let mut state = AppState::new(LookupSettings::default(), Theme::default());
        handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        assert_eq!(state.web_access, WebAccess::Granted);

        handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert_eq!(state.web_access, WebAccess::Denied);
    }

    #[test]
    fn test_close_focus() {
        let mut state = granted_state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
