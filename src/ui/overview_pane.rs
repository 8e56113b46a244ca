use crate::app::AppState;
use crate::domain::{category_ratio, format_percent_rounded, Category, Task, UiMode};
use crate::ui::layout::create_category_grid;
use crate::ui::styles::{
    border_style, default_style, done_style, focused_border_style, hint_style, input_style,
    placeholder_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Create a single line for a task
/// Format: [x] Buy milk   09:42
fn create_task_line(task: &Task, show_timestamp: bool) -> Line<'static> {
    let mut spans = Vec::new();

    let (checkbox, text_style) = if task.checked {
        ("[x] ", done_style())
    } else {
        ("[ ] ", default_style())
    };
    spans.push(Span::raw(checkbox));
    spans.push(Span::styled(task.text().to_string(), text_style));

    if show_timestamp {
        spans.push(Span::styled(format!("   {}", task.created_formatted()), hint_style()));
    }

    Line::from(spans)
}

/// Box title: name, progress readout and the category's own done/total
fn category_title(app: &AppState, category: Category) -> String {
    let progress = format_percent_rounded(app.category_progress(category));
    let (done, total) = category_ratio(app.manager.store(), category);
    format!(" {} · Progress: {} · {}/{} ", category.name(), progress, done, total)
}

/// Render one category box
fn render_category_box(f: &mut Frame, app: &AppState, category: Category, area: Rect) {
    let focused = category == app.focused_category;
    let tasks = app.manager.store().tasks(category);

    let items: Vec<ListItem> = if tasks.is_empty() {
        vec![ListItem::new(Line::styled("No tasks yet", placeholder_style()))]
    } else {
        tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| {
                let line = create_task_line(task, app.config.show_timestamps);
                let style = if focused && idx == app.selected_index {
                    selected_style()
                } else {
                    default_style()
                };
                ListItem::new(line).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused { focused_border_style() } else { border_style() })
            .title(Span::styled(category_title(app, category), title_style())),
    );

    // The focused box keeps its cursor row in view
    let mut state = ListState::default();
    if focused && !tasks.is_empty() {
        state.select(Some(app.selected_index));
    }
    f.render_stateful_widget(list, area, &mut state);
}

/// Render the four category boxes
pub fn render_overview_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let cells = create_category_grid(area);
    for (category, cell) in Category::ALL.iter().zip(cells) {
        render_category_box(f, app, *category, cell);
    }
}

/// Render the shared add-task input
pub fn render_task_input(f: &mut Frame, app: &AppState, area: Rect) {
    let editing = app.ui_mode == UiMode::AddingTask;

    let mut spans = vec![Span::raw("> ")];
    if app.new_task.is_empty() && !editing {
        spans.push(Span::styled("Add new task (press a)", placeholder_style()));
    } else {
        spans.push(Span::styled(app.new_task.clone(), input_style()));
    }
    if editing {
        spans.push(Span::styled("█", input_style())); // Cursor
    }

    let title = format!(" Add Task to {} ", app.focused_category.name());
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if editing { focused_border_style() } else { border_style() })
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}
