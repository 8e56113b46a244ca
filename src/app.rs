use crate::config::Config;
use crate::domain::{
    category_progress, Category, Session, Stats, Tab, TaskError, TaskManager, UiMode,
};
use tracing::{debug, info, warn};

/// Main application state. Every user intent goes through one of its methods.
pub struct AppState {
    pub session: Session,
    pub manager: TaskManager,
    pub active_tab: Tab,
    pub ui_mode: UiMode,
    pub name_input: String,         // Sign-in text field
    pub new_task: String,           // Pending task text, shared by all category boxes
    pub focused_category: Category, // Category box receiving adds and toggles
    pub selected_index: usize,      // Cursor within the focused category
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            session: Session::new(),
            manager: TaskManager::new(),
            active_tab: Tab::Overview,
            ui_mode: UiMode::Normal,
            name_input: String::new(),
            new_task: String::new(),
            focused_category: Category::School,
            selected_index: 0,
            config,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.signed_in
    }

    /// Sign in with whatever is in the name field
    pub fn sign_in(&mut self) {
        self.session.sign_in(self.name_input.clone());
        self.active_tab = Tab::Overview;
        self.ui_mode = UiMode::Normal;
        info!(user = %self.session.display_name(), "signed in");
    }

    /// Return to the sign-in screen
    pub fn sign_out(&mut self) {
        self.session.sign_out();
        self.ui_mode = UiMode::Normal;
        if self.config.reset_on_sign_out {
            self.manager.reset();
            self.new_task.clear();
            self.selected_index = 0;
        }
        // Pre-fill the field so signing back in keeps the same name by default
        self.name_input = self.session.user_name.clone();
        info!(reset = self.config.reset_on_sign_out, "signed out");
    }

    pub fn greeting(&self) -> String {
        self.session.greeting()
    }

    /// Add the pending task text to `category`. Blank input is ignored and the buffer kept.
    pub fn add_task(&mut self, category: Category) -> Result<(), TaskError> {
        match self.manager.add_task(category, &self.new_task) {
            Ok(()) => {
                debug!(%category, text = %self.new_task, "task added");
                self.new_task.clear();
                Ok(())
            }
            Err(e) => {
                debug!(%category, "ignored blank task");
                Err(e)
            }
        }
    }

    /// Toggle the task at `index`. An invalid index leaves state untouched.
    pub fn toggle_task(&mut self, category: Category, index: usize) -> Result<(), TaskError> {
        match self.manager.toggle_task(category, index) {
            Ok(()) => {
                let task = &self.manager.store().tasks(category)[index];
                debug!(
                    %category,
                    index,
                    id = %task.id,
                    checked = task.checked,
                    completed = self.manager.tally().get(category),
                    "task toggled"
                );
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "toggle ignored");
                Err(e)
            }
        }
    }

    /// Add the pending task to the focused category and move the cursor onto it
    pub fn submit_new_task(&mut self) -> bool {
        let category = self.focused_category;
        if self.add_task(category).is_ok() {
            self.selected_index = self.manager.store().len(category) - 1;
            true
        } else {
            false
        }
    }

    /// Toggle the task under the cursor. Does nothing on an empty category.
    pub fn toggle_selected(&mut self) -> bool {
        if self.manager.store().len(self.focused_category) == 0 {
            return false;
        }
        self.toggle_task(self.focused_category, self.selected_index).is_ok()
    }

    pub fn change_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.toggle();
    }

    /// Focus the next category box
    pub fn focus_next_category(&mut self) {
        self.focused_category = self.focused_category.next();
        self.clamp_selection();
    }

    /// Focus the previous category box
    pub fn focus_prev_category(&mut self) {
        self.focused_category = self.focused_category.prev();
        self.clamp_selection();
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let len = self.manager.store().len(self.focused_category);
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.manager.store().len(self.focused_category);
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Start typing a new task into the focused category
    pub fn start_add_task(&mut self) {
        self.ui_mode = UiMode::AddingTask;
    }

    /// Leave input mode; the buffer is kept
    pub fn cancel_add_task(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Type into whichever field is active on the current screen
    pub fn input_add_char(&mut self, c: char) {
        if self.is_signed_in() {
            self.new_task.push(c);
        } else {
            self.name_input.push(c);
        }
    }

    pub fn input_backspace(&mut self) {
        if self.is_signed_in() {
            self.new_task.pop();
        } else {
            self.name_input.pop();
        }
    }

    pub fn stats(&self) -> Stats {
        Stats::collect(self.manager.store(), self.manager.tally())
    }

    pub fn category_progress(&self, category: Category) -> f64 {
        category_progress(self.manager.store(), category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_app() -> AppState {
        let mut app = AppState::new(Config::default());
        app.name_input = "Ada".to_string();
        app.sign_in();
        app
    }

    fn add(app: &mut AppState, category: Category, text: &str) {
        app.new_task = text.to_string();
        app.add_task(category).unwrap();
    }

    #[test]
    fn test_app_state_new() {
        let app = AppState::new(Config::default());
        assert!(!app.is_signed_in());
        assert_eq!(app.active_tab, Tab::Overview);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.manager.store().is_empty());
    }

    #[test]
    fn test_sign_in_greeting() {
        let app = create_test_app();
        assert!(app.is_signed_in());
        assert_eq!(app.greeting(), "Hello, Ada");

        let mut anonymous = AppState::new(Config::default());
        anonymous.sign_in();
        assert_eq!(anonymous.greeting(), "Hello, User");
    }

    #[test]
    fn test_add_task_clears_buffer() {
        let mut app = create_test_app();
        app.new_task = "Buy milk".to_string();
        app.add_task(Category::Home).unwrap();

        assert!(app.new_task.is_empty());
        assert_eq!(app.manager.store().tasks(Category::Home)[0].text(), "Buy milk");
    }

    #[test]
    fn test_rejected_add_keeps_buffer() {
        let mut app = create_test_app();
        app.new_task = "   ".to_string();

        assert_eq!(app.add_task(Category::Work), Err(TaskError::EmptyInput));
        assert_eq!(app.new_task, "   ");
        assert!(app.manager.store().is_empty());
    }

    #[test]
    fn test_home_scenario_stats() {
        let mut app = create_test_app();
        add(&mut app, Category::Home, "Buy milk");
        add(&mut app, Category::Home, "Read book");
        app.toggle_task(Category::Home, 0).unwrap();

        let stats = app.stats();
        assert_eq!(stats.tasks_added, 2);
        assert_eq!(stats.tasks_completed, 1);
        assert_eq!(stats.progress, 50.0);
        assert_eq!(app.category_progress(Category::School), 50.0);
    }

    #[test]
    fn test_toggle_out_of_range_is_safe() {
        let mut app = create_test_app();
        add(&mut app, Category::Home, "a");

        assert!(app.toggle_task(Category::Home, 3).is_err());
        assert!(!app.manager.store().tasks(Category::Home)[0].checked);
        assert_eq!(app.manager.tally().get(Category::Home), 0);
    }

    #[test]
    fn test_submit_new_task_selects_it() {
        let mut app = create_test_app();
        app.focused_category = Category::Work;
        app.new_task = "one".to_string();
        assert!(app.submit_new_task());
        app.new_task = "two".to_string();
        assert!(app.submit_new_task());

        assert_eq!(app.selected_index, 1);
        assert!(app.toggle_selected());
        assert!(app.manager.store().tasks(Category::Work)[1].checked);
        assert_eq!(app.manager.tally().get(Category::Work), 1);
    }

    #[test]
    fn test_submit_blank_task_does_nothing() {
        let mut app = create_test_app();
        app.new_task = " ".to_string();
        assert!(!app.submit_new_task());
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_toggle_selected_on_empty_category() {
        let mut app = create_test_app();
        add(&mut app, Category::Home, "elsewhere");
        app.focused_category = Category::Work;

        assert!(!app.toggle_selected());
        assert_eq!(app.manager.tally().total(), 0);
        assert!(!app.manager.store().tasks(Category::Home)[0].checked);
    }

    #[test]
    fn test_toggle_selected_reports_stale_cursor() {
        let mut app = create_test_app();
        add(&mut app, Category::School, "only");
        app.selected_index = 4;

        assert!(!app.toggle_selected());
        assert!(!app.manager.store().tasks(Category::School)[0].checked);
        assert_eq!(app.manager.tally().total(), 0);
    }

    #[test]
    fn test_sign_out_preserves_tasks_by_default() {
        let mut app = create_test_app();
        add(&mut app, Category::School, "Essay");
        app.toggle_task(Category::School, 0).unwrap();

        app.sign_out();
        assert!(!app.is_signed_in());
        assert_eq!(app.session.user_name, "Ada");
        assert_eq!(app.name_input, "Ada");
        assert_eq!(app.manager.store().total(), 1);
        assert_eq!(app.manager.tally().get(Category::School), 1);

        app.sign_in();
        assert_eq!(app.greeting(), "Hello, Ada");
        assert_eq!(app.manager.store().total(), 1);
    }

    #[test]
    fn test_sign_out_resets_when_configured() {
        let mut app = AppState::new(Config {
            reset_on_sign_out: true,
            ..Config::default()
        });
        app.sign_in();
        add(&mut app, Category::School, "Essay");
        app.toggle_task(Category::School, 0).unwrap();
        app.new_task = "draft".to_string();

        app.sign_out();
        assert!(app.manager.store().is_empty());
        assert_eq!(app.manager.tally().total(), 0);
        assert!(app.new_task.is_empty());
    }

    #[test]
    fn test_tab_changes() {
        let mut app = create_test_app();
        app.change_tab(Tab::Productivity);
        assert_eq!(app.active_tab, Tab::Productivity);
        app.next_tab();
        assert_eq!(app.active_tab, Tab::Overview);
        app.next_tab();
        app.sign_out();
        app.sign_in();
        assert_eq!(app.active_tab, Tab::Overview);
    }

    #[test]
    fn test_move_selection() {
        let mut app = create_test_app();
        add(&mut app, Category::School, "a");
        add(&mut app, Category::School, "b");

        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_focus_change_clamps_selection() {
        let mut app = create_test_app();
        add(&mut app, Category::School, "a");
        add(&mut app, Category::School, "b");
        add(&mut app, Category::Home, "c");
        app.move_selection_down();

        app.focus_next_category();
        assert_eq!(app.focused_category, Category::Home);
        assert_eq!(app.selected_index, 0);

        app.focus_prev_category();
        app.focus_prev_category();
        assert_eq!(app.focused_category, Category::Other);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_input_routes_to_active_field() {
        let mut app = AppState::new(Config::default());
        app.input_add_char('B');
        app.input_add_char('o');
        app.input_backspace();
        assert_eq!(app.name_input, "B");

        app.sign_in();
        app.input_add_char('x');
        assert_eq!(app.new_task, "x");
        assert_eq!(app.name_input, "B");
    }
}
