use crate::app::AppState;
use crate::domain::Tab;
use crate::ui::styles::{active_tab_style, border_style, default_style, title_style};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Render the greeting line
pub fn render_greeting(f: &mut Frame, app: &AppState, area: Rect) {
    let greeting = Paragraph::new(Span::styled(format!(" {}", app.greeting()), title_style()));
    f.render_widget(greeting, area);
}

/// Render the Overview / Productivity tab bar
pub fn render_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(default_style())
        .highlight_style(active_tab_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style()),
        );
    f.render_widget(tabs, area);
}
