//! Fixed-window sessionization: one window per user per calendar bin.

use crate::models::{Category, ClassifiedEvent, WindowKey};
use chrono::{DateTime, NaiveDateTime, TimeDelta};
use std::collections::BTreeMap;

/// Per-window aggregates, before dominant/proportion statistics.
#[derive(Debug, Clone)]
pub struct SessionAggregate {
    pub key: WindowKey,
    pub session_start: NaiveDateTime,
    pub session_end: NaiveDateTime,
    pub num_visits: usize,
    pub unique_domains: usize,
    pub domains_list: Vec<String>,
    pub categories_list: Vec<Category>,
    pub observed_span_minutes: f64,
    pub nominal_duration_minutes: i64,
}

/// Floor `ts` to the start of its window.
///
/// Bins are aligned on the epoch, so a 60-minute window starts on the hour.
pub fn window_start(ts: NaiveDateTime, window: TimeDelta) -> NaiveDateTime {
    let size = window.num_seconds();
    if size <= 0 {
        return ts;
    }

    let secs = ts.and_utc().timestamp();
    let floored = secs - secs.rem_euclid(size);
    DateTime::from_timestamp(floored, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or(ts)
}

/// Stable identifier of a window, e.g. `user_1_hour_2025090109`.
pub fn session_id(key: &WindowKey, window: TimeDelta) -> String {
    if window == TimeDelta::hours(1) {
        format!("{}_hour_{}", key.user, key.window_start.format("%Y%m%d%H"))
    } else {
        format!("{}_win_{}", key.user, key.window_start.format("%Y%m%d%H%M"))
    }
}

/// Group events by `(user, window_start)`, keeping input order inside
/// each group. Keys come out sorted by user then time.
pub fn group_windows(
    events: &[ClassifiedEvent],
    window: TimeDelta,
) -> BTreeMap<WindowKey, Vec<&ClassifiedEvent>> {
    let mut groups: BTreeMap<WindowKey, Vec<&ClassifiedEvent>> = BTreeMap::new();

    for ev in events {
        let key = WindowKey {
            user: ev.user.clone(),
            window_start: window_start(ev.visit_time, window),
        };
        groups.entry(key).or_default().push(ev);
    }

    groups
}

pub fn aggregate_window(
    key: WindowKey,
    events: &[&ClassifiedEvent],
    window: TimeDelta,
) -> SessionAggregate {
    let session_start = events
        .iter()
        .map(|e| e.visit_time)
        .min()
        .unwrap_or(key.window_start);
    let session_end = events
        .iter()
        .map(|e| e.visit_time)
        .max()
        .unwrap_or(key.window_start);

    let mut domains_list: Vec<String> = Vec::new();
    for ev in events {
        if !domains_list.contains(&ev.domain) {
            domains_list.push(ev.domain.clone());
        }
    }

    let categories_list: Vec<Category> = events.iter().map(|e| e.category).collect();
    let observed_span_minutes = (session_end - session_start).num_milliseconds() as f64 / 60_000.0;

    SessionAggregate {
        key,
        session_start,
        session_end,
        num_visits: events.len(),
        unique_domains: domains_list.len(),
        domains_list,
        categories_list,
        observed_span_minutes,
        nominal_duration_minutes: window.num_minutes(),
    }
}

/// Group and aggregate in one pass. Empty input gives an empty list.
pub fn build_sessions(events: &[ClassifiedEvent], window: TimeDelta) -> Vec<SessionAggregate> {
    group_windows(events, window)
        .into_iter()
        .map(|(key, evs)| aggregate_window(key, &evs, window))
        .collect()
}
