//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain/api
//! layers. It implements the event-driven lookup widget: debounced input, the
//! render policy and the output regions.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Timer / WebRequestResult ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Outstanding-timer counting for keystroke debouncing
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: View mode and permission types
//! - [`notification`]: One-line user messages
//! - [`pipeline`]: Render policy for search results
//! - [`regions`]: List and detail output regions
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod notification;
pub mod pipeline;
pub mod regions;
pub mod state;

pub use actions::Action;
pub use debounce::Debouncer;
pub use handler::{handle_event, Event};
pub use modes::{ViewMode, WebAccess};
pub use notification::{Notification, Severity};
pub use pipeline::{classify, RenderPlan};
pub use regions::Regions;
pub use state::{AppState, ClickTarget, LookupSettings};
