// src/export/model.rs

use crate::models::{Category, SessionSummary, SessionTable};
use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Separator used when a list column is flattened into one cell.
pub(crate) const LIST_SEPARATOR: &str = ";";

/// Fixed columns of the wide session table; one proportion column per
/// dataset category follows them.
pub(crate) const FIXED_HEADERS: [&str; 11] = [
    "user",
    "session_id",
    "session_start",
    "session_end",
    "num_visits",
    "unique_domains",
    "domains_list",
    "categories_list",
    "observed_span_minutes",
    "nominal_duration_minutes",
    "dominant_category",
];

/// A typed cell, so XLSX can keep numbers and timestamps native.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cell {
    Text(String),
    Number(f64),
    Timestamp(NaiveDateTime),
}

impl Cell {
    pub(crate) fn to_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Timestamp(t) => format_timestamp(t),
        }
    }
}

pub(crate) fn headers(table: &SessionTable) -> Vec<String> {
    FIXED_HEADERS
        .iter()
        .map(|h| h.to_string())
        .chain(table.proportion_columns().into_iter().map(str::to_string))
        .collect()
}

fn join_categories(cats: &[Category]) -> String {
    cats.iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

pub(crate) fn session_to_row(table: &SessionTable, s: &SessionSummary) -> Vec<Cell> {
    let mut row = vec![
        Cell::Text(s.user.clone()),
        Cell::Text(s.session_id.clone()),
        Cell::Timestamp(s.session_start),
        Cell::Timestamp(s.session_end),
        Cell::Number(s.num_visits as f64),
        Cell::Number(s.unique_domains as f64),
        Cell::Text(s.domains_list.join(LIST_SEPARATOR)),
        Cell::Text(join_categories(&s.categories_list)),
        Cell::Number(s.observed_span_minutes),
        Cell::Number(s.nominal_duration_minutes as f64),
        Cell::Text(s.dominant_category.label().to_string()),
    ];
    row.extend(table.wide_proportions(s).into_iter().map(Cell::Number));
    row
}

pub(crate) fn table_to_rows(table: &SessionTable) -> Vec<Vec<Cell>> {
    table
        .sessions
        .iter()
        .map(|s| session_to_row(table, s))
        .collect()
}

/// Category shares serialized as a map whose keys keep the dataset
/// column order used by CSV and XLSX.
#[derive(Debug)]
pub(crate) struct Proportions(pub Vec<(&'static str, f64)>);

impl Serialize for Proportions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, share) in &self.0 {
            map.serialize_entry(label, share)?;
        }
        map.end()
    }
}

/// JSON shape of one session: lists stay lists, proportions carry every
/// dataset category.
#[derive(Serialize, Debug)]
pub(crate) struct SessionJson<'a> {
    pub user: &'a str,
    pub session_id: &'a str,
    pub session_start: String,
    pub session_end: String,
    pub num_visits: usize,
    pub unique_domains: usize,
    pub domains_list: &'a [String],
    pub categories_list: &'a [Category],
    pub observed_span_minutes: f64,
    pub nominal_duration_minutes: i64,
    pub dominant_category: Category,
    pub proportions: Proportions,
}

pub(crate) fn session_to_json<'a>(table: &SessionTable, s: &'a SessionSummary) -> SessionJson<'a> {
    let proportions = Proportions(
        table
            .categories
            .iter()
            .map(|c| (c.label(), s.proportion(*c)))
            .collect(),
    );

    SessionJson {
        user: &s.user,
        session_id: &s.session_id,
        session_start: format_timestamp(&s.session_start),
        session_end: format_timestamp(&s.session_end),
        num_visits: s.num_visits,
        unique_domains: s.unique_domains,
        domains_list: &s.domains_list,
        categories_list: &s.categories_list,
        observed_span_minutes: s.observed_span_minutes,
        nominal_duration_minutes: s.nominal_duration_minutes,
        dominant_category: s.dominant_category,
        proportions,
    }
}
