use crate::app::AppState;
use crate::ui::{
    layout::create_centered_area,
    styles::{border_style, brand_style, hint_style, input_style, placeholder_style, tagline_style},
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const APP_NAME: &str = "TASKMATES";
pub const TAGLINE: &str = "ORGANIZE TASKS WITH EASE";
pub const DESCRIPTION: &str = "The only productivity app you need";
const NAME_PLACEHOLDER: &str = "Enter Full Name";

/// Input line for the name field, with placeholder when empty
fn name_field_line(name: &str) -> Line<'static> {
    if name.is_empty() {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(NAME_PLACEHOLDER, placeholder_style()),
            Span::styled("█", input_style()),
        ])
    } else {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(name.to_string(), input_style()),
            Span::styled("█", input_style()), // Cursor
        ])
    }
}

/// Render the sign-in screen
pub fn render_sign_in(f: &mut Frame, app: &AppState, area: Rect) {
    let card = create_centered_area(area, 13);

    let lines = vec![
        Line::raw(""),
        Line::styled(APP_NAME, brand_style()),
        Line::raw(""),
        Line::styled(TAGLINE, tagline_style()),
        Line::styled(DESCRIPTION, tagline_style()),
        Line::raw(""),
        name_field_line(&app.name_input),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Enter]", brand_style()),
            Span::raw(" Sign in with Email"),
        ]),
        Line::styled("Esc to quit", hint_style()),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style()),
    );

    f.render_widget(paragraph, card);
}
