pub mod enums;
pub mod manager;
pub mod progress;
pub mod session;
pub mod store;
pub mod task;

pub use enums::{Category, Tab, UiMode};
pub use manager::TaskManager;
pub use progress::{
    category_progress, category_ratio, format_percent_precise, format_percent_rounded, Stats,
};
pub use session::Session;
pub use store::TaskError;
pub use task::Task;
