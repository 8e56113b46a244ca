use crate::app::AppState;
use crate::domain::{format_percent_precise, Stats};
use crate::ui::styles::{border_style, default_style, gauge_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

fn stat_lines(stats: &Stats) -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled("Tasks Added:     ", title_style()),
            Span::styled(stats.tasks_added.to_string(), default_style()),
        ]),
        Line::from(vec![
            Span::styled("Tasks Completed: ", title_style()),
            Span::styled(stats.tasks_completed.to_string(), default_style()),
        ]),
        Line::from(vec![
            Span::styled("Progress:        ", title_style()),
            Span::styled(format_percent_precise(stats.progress), default_style()),
        ]),
    ]
}

/// Render the Productivity Stats pane
pub fn render_productivity_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let stats = app.stats();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Productivity Stats ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Counters
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Progress bar
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(stat_lines(&stats)), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(stats.ratio())
        .label(format_percent_precise(stats.progress));
    f.render_widget(gauge, chunks[2]);
}
