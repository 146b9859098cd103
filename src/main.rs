//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the zcountry library and
//! the Zellij plugin system. It translates Zellij events into library events
//! and library actions into Zellij API calls; all lookup logic lives in the
//! library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; lookups start once granted
//! 3. **Subscribe**: Key, Mouse, Timer, `WebRequestResult`, `PermissionRequestResult`
//! 4. **Update**: Map events, delegate to `handle_event`, execute actions
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(Char)` → `Event::Char` (no Ctrl/Alt modifier)
//! - `Key(Backspace)` → `Event::Backspace`
//! - `Key(Down/Up)`, `Ctrl+n/p` → `Event::SelectionDown/Up`
//! - `Key(Enter)` → `Event::OpenSelected`
//! - `Ctrl+l` → `Event::ClearResults`
//! - `Key(Esc)` → `Event::CloseFocus`
//! - `Mouse(LeftClick)` → `Event::Click { row }`
//! - `Timer` → `Event::DebounceElapsed`
//! - `WebRequestResult` → `Event::FetchCompleted` (generation from the context map)

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zcountry::api::{generation_from_context, CONTEXT_GENERATION, CONTEXT_QUERY};
use zcountry::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: zcountry::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zcountry::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, requests web
    /// access and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zcountry::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(config = ?config, "parsed configuration");

        self.app = zcountry::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let _guard =
            tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name)
                .entered();

        let Some(our_event) = Self::map_event(event) else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_pane_rows(rows);
        zcountry::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_event(event: zellij_tile::prelude::Event) -> Option<Event> {
        match event {
            zellij_tile::prelude::Event::Key(ref key) => Self::map_key_event(key),
            zellij_tile::prelude::Event::Mouse(mouse) => Self::map_mouse_event(mouse),
            zellij_tile::prelude::Event::Timer(_elapsed) => Some(Event::DebounceElapsed),
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Self::map_web_request_result(status, body, &context)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                let granted = matches!(status, PermissionStatus::Granted);
                if !granted {
                    tracing::warn!("web access denied - lookups disabled");
                }
                Some(Event::PermissionsResult { granted })
            }
            _ => None,
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::SelectionDown),
                BareKey::Char('p') => Some(Event::SelectionUp),
                BareKey::Char('l') => Some(Event::ClearResults),
                _ => None,
            };
        }
        if key.key_modifiers.contains(&KeyModifier::Alt) || key.key_modifiers.contains(&KeyModifier::Super) {
            return None;
        }

        Some(match key.bare_key {
            BareKey::Down => Event::SelectionDown,
            BareKey::Up => Event::SelectionUp,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Esc => Event::CloseFocus,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Maps a left click on a 0-indexed pane line to a 1-indexed row.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, _col) => {
                let row = usize::try_from(line).ok()? + 1;
                Some(Event::Click { row })
            }
            _ => None,
        }
    }

    /// Maps a web request completion to `FetchCompleted`.
    ///
    /// Responses without a generation in their context did not come from a
    /// country lookup and are dropped.
    fn map_web_request_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(generation) = generation_from_context(context) else {
            tracing::debug!(status = status, "ignoring web request result without generation");
            return None;
        };

        tracing::debug!(
            status = status,
            generation = generation,
            query = ?context.get(CONTEXT_QUERY),
            body_len = body.len(),
            "web request result"
        );
        Some(Event::FetchCompleted { generation, status, body })
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleTimer { delay_ms } => {
                #[allow(clippy::cast_precision_loss)]
                set_timeout(*delay_ms as f64 / 1000.0);
            }
            Action::FetchCountries { url, query, generation } => {
                let context = BTreeMap::from([
                    (CONTEXT_GENERATION.to_string(), generation.to_string()),
                    (CONTEXT_QUERY.to_string(), query.clone()),
                ]);
                let headers = BTreeMap::from([("Accept".to_string(), "application/json".to_string())]);

                tracing::debug!(url = %url, generation = generation, "issuing web request");
                web_request(url, HttpVerb::Get, headers, vec![], context);
            }
        }
    }
}
