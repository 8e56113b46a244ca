use std::fmt;

/// Fixed task grouping. The set is closed: categories are never created or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    School,
    Home,
    Work,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::School,
        Category::Home,
        Category::Work,
        Category::Other,
    ];

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::School => "School",
            Category::Home => "Home",
            Category::Work => "Work",
            Category::Other => "Other",
        }
    }

    /// Position of this category in `Category::ALL`
    pub fn index(&self) -> usize {
        match self {
            Category::School => 0,
            Category::Home => 1,
            Category::Work => 2,
            Category::Other => 3,
        }
    }

    /// Next category, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Home screen tab selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Productivity,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Overview, Tab::Productivity];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Productivity => "Productivity",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Productivity => 1,
        }
    }

    /// The other tab
    pub fn toggle(&self) -> Self {
        match self {
            Tab::Overview => Tab::Productivity,
            Tab::Productivity => Tab::Overview,
        }
    }
}

/// UI mode for the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    AddingTask, // Keys go to the pending task buffer
}
