use super::enums::Category;
use super::store::{CompletionTally, TaskStore};

/// Percentage of checked tasks across every category, in `[0, 100]`.
/// An empty store reports 0.
pub fn overall_progress(store: &TaskStore) -> f64 {
    if store.is_empty() {
        return 0.0;
    }
    100.0 * store.total_checked() as f64 / store.total() as f64
}

/// Progress readout shown on a category box.
///
/// This is the global percentage, not a per-category ratio: every box shows
/// the same number. Use [`category_ratio`] for the category's own counts.
pub fn category_progress(store: &TaskStore, _category: Category) -> f64 {
    overall_progress(store)
}

/// (checked, total) for one category
pub fn category_ratio(store: &TaskStore, category: Category) -> (usize, usize) {
    (store.checked_count(category), store.len(category))
}

/// Aggregates for the Productivity tab
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub tasks_added: usize,
    pub tasks_completed: usize,
    pub progress: f64,
}

impl Stats {
    /// Derive fresh statistics; nothing is cached
    pub fn collect(store: &TaskStore, tally: &CompletionTally) -> Self {
        Self {
            tasks_added: store.total(),
            tasks_completed: tally.total(),
            progress: overall_progress(store),
        }
    }

    /// Progress as a gauge ratio in `[0, 1]`
    pub fn ratio(&self) -> f64 {
        (self.progress / 100.0).clamp(0.0, 1.0)
    }
}

/// Format a percentage rounded to a whole number ("67%")
pub fn format_percent_rounded(percent: f64) -> String {
    format!("{}%", percent.round() as i64)
}

/// Format a percentage with two decimals ("66.67%")
pub fn format_percent_precise(percent: f64) -> String {
    format!("{:.2}%", percent)
}
