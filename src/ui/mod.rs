pub mod header;
pub mod keybindings;
pub mod layout;
pub mod overview_pane;
pub mod productivity_pane;
pub mod sign_in;
pub mod styles;

use crate::app::AppState;
use crate::domain::Tab;
use header::{render_greeting, render_tabs};
use keybindings::render_keybindings;
use layout::create_home_layout;
use overview_pane::{render_overview_pane, render_task_input};
use productivity_pane::render_productivity_pane;
use ratatui::Frame;
use sign_in::render_sign_in;

/// Main render function - draws the screen for the current session state
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    if !app.is_signed_in() {
        render_sign_in(f, app, size);
        return;
    }

    let show_input = app.active_tab == Tab::Overview;
    let layout = create_home_layout(size, show_input);

    render_greeting(f, app, layout.header_area);
    render_tabs(f, app, layout.tabs_area);

    match app.active_tab {
        Tab::Overview => render_overview_pane(f, app, layout.content_area),
        Tab::Productivity => render_productivity_pane(f, app, layout.content_area),
    }

    if let Some(input_area) = layout.input_area {
        render_task_input(f, app, input_area);
    }

    render_keybindings(f, layout.keybindings_area, app.active_tab, app.ui_mode);
}
