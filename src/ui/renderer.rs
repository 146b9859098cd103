//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with explicit cursor positioning. Does not clear
/// the screen; the host repaints the pane on every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    tracing::trace!(
        rows = rows,
        cols = cols,
        list_items = viewmodel.list_items.len(),
        has_detail = viewmodel.detail.is_some(),
        "rendering"
    );

    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
