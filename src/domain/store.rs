use super::enums::Category;
use super::task::Task;
use thiserror::Error;

/// Recoverable failures of task mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// Submitted text was empty or whitespace only
    #[error("task text is empty")]
    EmptyInput,
    /// Toggle index does not name a task in the category
    #[error("no task at position {index} in {category} (has {len})")]
    OutOfRange {
        category: Category,
        index: usize,
        len: usize,
    },
}

/// Ordered task lists, one per category. Every category is always present.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    lists: [Vec<Task>; 4],
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks of a category in insertion order
    pub fn tasks(&self, category: Category) -> &[Task] {
        &self.lists[category.index()]
    }

    /// Append a task to the end of a category's list
    pub fn push(&mut self, category: Category, task: Task) {
        self.lists[category.index()].push(task);
    }

    /// Flip the task at `index`, returning its new checked state
    pub fn toggle(&mut self, category: Category, index: usize) -> Result<bool, TaskError> {
        let list = &mut self.lists[category.index()];
        let len = list.len();
        match list.get_mut(index) {
            Some(task) => Ok(task.toggle()),
            None => Err(TaskError::OutOfRange {
                category,
                index,
                len,
            }),
        }
    }

    pub fn len(&self, category: Category) -> usize {
        self.tasks(category).len()
    }

    /// Number of tasks across all categories
    pub fn total(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Count of checked tasks in a category, derived from the list
    pub fn checked_count(&self, category: Category) -> usize {
        self.tasks(category).iter().filter(|t| t.checked).count()
    }

    /// Count of checked tasks across all categories
    pub fn total_checked(&self) -> usize {
        Category::ALL.iter().map(|c| self.checked_count(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Completed-task count per category.
/// Always recomputed from the store, never patched incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionTally {
    counts: [usize; 4],
}

impl CompletionTally {
    /// Build a tally consistent with every category of `store`
    pub fn from_store(store: &TaskStore) -> Self {
        let mut tally = Self::default();
        for category in Category::ALL {
            tally.recount(category, store);
        }
        tally
    }

    pub fn get(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    /// Recompute one category from scratch
    pub fn recount(&mut self, category: Category, store: &TaskStore) {
        self.counts[category.index()] = store.checked_count(category);
    }

    /// Sum across all categories
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
