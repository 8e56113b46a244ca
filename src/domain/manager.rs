use super::enums::Category;
use super::store::{CompletionTally, TaskError, TaskStore};
use super::task::Task;

/// Owns the task store and keeps the completion tally in sync with it
#[derive(Debug, Clone, Default)]
pub struct TaskManager {
    store: TaskStore,
    tally: CompletionTally,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn tally(&self) -> &CompletionTally {
        &self.tally
    }

    /// Append a new unchecked task. Whitespace-only text is rejected without mutation.
    pub fn add_task(&mut self, category: Category, text: &str) -> Result<(), TaskError> {
        if text.trim().is_empty() {
            return Err(TaskError::EmptyInput);
        }
        self.store.push(category, Task::new(text));
        Ok(())
    }

    /// Flip the task at `index` and recount the category's tally
    pub fn toggle_task(&mut self, category: Category, index: usize) -> Result<(), TaskError> {
        self.store.toggle(category, index)?;
        self.tally.recount(category, &self.store);
        Ok(())
    }

    /// Drop all tasks and zero the tally
    pub fn reset(&mut self) {
        self.store = TaskStore::new();
        self.tally = CompletionTally::from_store(&self.store);
    }
}
