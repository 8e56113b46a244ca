use crate::app::AppState;
use crate::domain::{Tab, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns `Ok(true)` when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    if !app.is_signed_in() {
        return handle_sign_in_screen(app, key);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_adding_task_mode(app, key),
    }
}

/// Printable input without Ctrl/Alt chords
fn is_plain_char(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Handle keys on the sign-in screen
fn handle_sign_in_screen(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.sign_in();
            Ok(false)
        }
        KeyCode::Esc => Ok(true),
        KeyCode::Backspace => {
            app.input_backspace();
            Ok(false)
        }
        KeyCode::Char(c) if is_plain_char(key) => {
            app.input_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys on the home screen
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        // Tabs
        KeyCode::Tab => {
            app.next_tab();
            Ok(false)
        }
        KeyCode::Char('1') => {
            app.change_tab(Tab::Overview);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.change_tab(Tab::Productivity);
            Ok(false)
        }

        // Sign out
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.sign_out();
            Ok(false)
        }

        // Everything below only applies to the Overview task boxes
        _ if app.active_tab != Tab::Overview => Ok(false),

        // Category focus
        KeyCode::Left => {
            app.focus_prev_category();
            Ok(false)
        }
        KeyCode::Right => {
            app.focus_next_category();
            Ok(false)
        }

        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle completion
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys while typing a new task
fn handle_adding_task_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            if app.submit_new_task() {
                app.cancel_add_task();
            }
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_add_task();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.input_backspace();
            Ok(false)
        }
        KeyCode::Char(c) if is_plain_char(key) => {
            app.input_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}
