use super::category::Category;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One browser visit as delivered by the collectors.
///
/// `url` may be empty when the source row had no URL; the classifier maps
/// that to `Miscellaneous` instead of rejecting the row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub user: String,
    pub url: String,
    pub visit_time: NaiveDateTime,
}

impl Event {
    pub fn new(user: impl Into<String>, url: impl Into<String>, visit_time: NaiveDateTime) -> Self {
        Self {
            user: user.into(),
            url: url.into(),
            visit_time,
        }
    }
}

/// Event annotated with its normalized domain and inferred category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedEvent {
    pub user: String,
    pub url: String,
    pub visit_time: NaiveDateTime,
    pub domain: String,
    pub category: Category,
}

impl ClassifiedEvent {
    pub fn from_event(ev: &Event, domain: String, category: Category) -> Self {
        Self {
            user: ev.user.clone(),
            url: ev.url.clone(),
            visit_time: ev.visit_time,
            domain,
            category,
        }
    }
}
