use super::category::Category;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Grouping key of a session: one fixed-size window per user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowKey {
    pub user: String,
    pub window_start: NaiveDateTime,
}

/// Aggregated statistics of one session window.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub user: String,
    pub session_id: String,
    pub window_start: NaiveDateTime,
    pub session_start: NaiveDateTime,
    pub session_end: NaiveDateTime,
    pub num_visits: usize,
    pub unique_domains: usize,
    /// Unique domains in first-seen order.
    pub domains_list: Vec<String>,
    /// Every category, duplicates kept, in event order.
    pub categories_list: Vec<Category>,
    pub observed_span_minutes: f64,
    /// Bin size of the window, not the time actually spent browsing.
    pub nominal_duration_minutes: i64,
    pub dominant_category: Category,
    /// Share of each category present in this window, first-seen order.
    pub proportions: Vec<(Category, f64)>,
}

impl SessionSummary {
    /// Share of `cat` in this window, 0.0 when the category never occurs.
    pub fn proportion(&self, cat: Category) -> f64 {
        self.proportions
            .iter()
            .find(|(c, _)| *c == cat)
            .map(|(_, p)| *p)
            .unwrap_or(0.0)
    }
}

/// Session summaries plus the dataset-wide proportion schema.
#[derive(Debug, Clone, Default)]
pub struct SessionTable {
    pub sessions: Vec<SessionSummary>,
    /// Every category seen anywhere in the dataset, first-appearance order.
    /// One proportion column exists per entry.
    pub categories: Vec<Category>,
}

impl SessionTable {
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn proportion_columns(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.label()).collect()
    }

    /// Proportions of `session` aligned to `self.categories`, zero-filled.
    pub fn wide_proportions(&self, session: &SessionSummary) -> Vec<f64> {
        self.categories
            .iter()
            .map(|c| session.proportion(*c))
            .collect()
    }
}
