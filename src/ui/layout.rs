use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Home screen layout structure
pub struct HomeLayout {
    pub header_area: Rect,
    pub tabs_area: Rect,
    pub content_area: Rect,
    pub input_area: Option<Rect>,
    pub keybindings_area: Rect,
}

/// Create the home screen layout
/// - Greeting (1 row)
/// - Tab bar (3 rows)
/// - Content: category grid or productivity stats
/// - Add-task input (3 rows, Overview only)
/// - Keybindings bar (1 row)
pub fn create_home_layout(area: Rect, show_input: bool) -> HomeLayout {
    let mut constraints = vec![
        Constraint::Length(1), // Greeting
        Constraint::Length(3), // Tabs
        Constraint::Min(0),    // Content
    ];
    if show_input {
        constraints.push(Constraint::Length(3)); // Add-task input
    }
    constraints.push(Constraint::Length(1)); // Keybindings

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let (input_area, keybindings_area) = if show_input {
        (Some(chunks[3]), chunks[4])
    } else {
        (None, chunks[3])
    };

    HomeLayout {
        header_area: chunks[0],
        tabs_area: chunks[1],
        content_area: chunks[2],
        input_area,
        keybindings_area,
    }
}

/// Split the content area into a 2x2 grid, one cell per category in display order
pub fn create_category_grid(area: Rect) -> [Rect; 4] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    [top[0], top[1], bottom[0], bottom[1]]
}

/// Create a centered area of fixed height (sign-in card)
pub fn create_centered_area(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = area.y + (area.height - height) / 2;
    let band = Rect::new(area.x, top, area.width, height);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(band);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_home_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_home_layout(area, true);

        assert_eq!(layout.header_area.height, 1);
        assert_eq!(layout.tabs_area.height, 3);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.input_area.map(|r| r.height), Some(3));
        assert_eq!(layout.content_area.height, 50 - 1 - 3 - 3 - 1);

        let without_input = create_home_layout(area, false);
        assert!(without_input.input_area.is_none());
        assert_eq!(without_input.content_area.height, 50 - 1 - 3 - 1);
    }

    #[test]
    fn test_create_category_grid() {
        let area = Rect::new(0, 0, 100, 40);
        let cells = create_category_grid(area);

        assert_eq!(cells[0].x, 0);
        assert_eq!(cells[0].y, 0);
        assert_eq!(cells[1].y, cells[0].y);
        assert!(cells[1].x > cells[0].x);
        assert_eq!(cells[2].x, cells[0].x);
        assert!(cells[2].y > cells[0].y);
        for cell in cells {
            assert!(cell.width > 0 && cell.height > 0);
        }
    }

    #[test]
    fn test_create_centered_area() {
        let area = Rect::new(0, 0, 100, 50);
        let card = create_centered_area(area, 14);

        assert_eq!(card.height, 14);
        assert!(card.width < area.width);
        assert_eq!(card.y, 18);

        let tiny = create_centered_area(Rect::new(0, 0, 40, 5), 14);
        assert_eq!(tiny.height, 5);
    }
}
