use crate::domain::{Tab, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints for the current home screen state
fn hint_line(tab: Tab, mode: UiMode) -> Line<'static> {
    match (mode, tab) {
        (UiMode::AddingTask, _) => Line::from(vec![
            Span::raw(" type task   "),
            Span::raw("Enter add   "),
            Span::raw("Esc cancel"),
        ]),
        (UiMode::Normal, Tab::Overview) => Line::from(vec![
            Span::raw(" ←/→ category   "),
            Span::raw("↑/↓ select   "),
            Span::raw("Space toggle   "),
            Span::raw("a add   "),
            Span::raw("Tab switch view   "),
            Span::raw("o sign out   "),
            Span::raw("q quit"),
        ]),
        (UiMode::Normal, Tab::Productivity) => Line::from(vec![
            Span::raw(" Tab switch view   "),
            Span::raw("o sign out   "),
            Span::raw("q quit"),
        ]),
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect, tab: Tab, mode: UiMode) {
    let paragraph = Paragraph::new(hint_line(tab, mode)).style(hint_style());
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_line_per_mode() {
        let adding = format!("{:?}", hint_line(Tab::Overview, UiMode::AddingTask));
        assert!(adding.contains("Esc cancel"));

        let overview = format!("{:?}", hint_line(Tab::Overview, UiMode::Normal));
        assert!(overview.contains("Space toggle"));

        let productivity = format!("{:?}", hint_line(Tab::Productivity, UiMode::Normal));
        assert!(!productivity.contains("Space toggle"));
        assert!(productivity.contains("o sign out"));
    }
}
