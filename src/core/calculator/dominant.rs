use crate::core::calculator::window::SessionAggregate;
use crate::models::Category;

/// Occurrences per category, in first-seen order.
pub fn category_counts(categories: &[Category]) -> Vec<(Category, usize)> {
    let mut counts: Vec<(Category, usize)> = Vec::new();
    for cat in categories {
        match counts.iter_mut().find(|(c, _)| c == cat) {
            Some((_, n)) => *n += 1,
            None => counts.push((*cat, 1)),
        }
    }
    counts
}

/// Most frequent category; among equal counts the one seen first wins.
/// An empty list yields `Miscellaneous`.
pub fn dominant_category(categories: &[Category]) -> Category {
    let mut best: Option<(Category, usize)> = None;
    for (cat, n) in category_counts(categories) {
        // strictly greater: ties keep the earlier category
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((cat, n));
        }
    }
    best.map(|(c, _)| c).unwrap_or(Category::Miscellaneous)
}

/// Share of each category present in the list.
pub fn category_proportions(categories: &[Category]) -> Vec<(Category, f64)> {
    let total = categories.len();
    if total == 0 {
        return Vec::new();
    }

    category_counts(categories)
        .into_iter()
        .map(|(c, n)| (c, n as f64 / total as f64))
        .collect()
}

/// Union of categories over all sessions, first-appearance order.
pub fn dataset_categories(sessions: &[SessionAggregate]) -> Vec<Category> {
    let mut seen: Vec<Category> = Vec::new();
    for cat in sessions.iter().flat_map(|s| s.categories_list.iter()) {
        if !seen.contains(cat) {
            seen.push(*cat);
        }
    }
    seen
}
