//! Descriptive statistics over a session table.

use crate::models::{Category, ClassifiedEvent, SessionTable};
use chrono::{Datelike, Timelike, Weekday};
use std::collections::{BTreeMap, HashMap};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Default)]
pub struct DatasetStats {
    pub total_events: usize,
    pub total_sessions: usize,
    /// (dominant category, sessions, share of sessions), most common first.
    pub dominant_distribution: Vec<(Category, usize, f64)>,
    /// Sessions indexed by hour of `session_start`.
    pub sessions_per_hour: [usize; 24],
    pub sessions_per_weekday: Vec<(Weekday, usize)>,
    pub top_domains: Vec<(String, usize)>,
    /// Mean `unique_domains` per dominant category, highest first.
    pub avg_unique_domains: Vec<(Category, f64)>,
    pub dominant_by_user: BTreeMap<String, Vec<(Category, usize)>>,
}

/// Sort counts descending; equal counts keep their first-seen order.
fn sorted_desc<K>(mut items: Vec<(K, usize)>) -> Vec<(K, usize)> {
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items
}

fn bump<K: PartialEq>(counts: &mut Vec<(K, usize)>, key: K) {
    match counts.iter_mut().find(|(k, _)| *k == key) {
        Some((_, n)) => *n += 1,
        None => counts.push((key, 1)),
    }
}

pub fn describe(table: &SessionTable, classified: &[ClassifiedEvent], top_n: usize) -> DatasetStats {
    let mut stats = DatasetStats {
        total_events: classified.len(),
        total_sessions: table.len(),
        ..Default::default()
    };

    let mut dominant: Vec<(Category, usize)> = Vec::new();
    let mut unique_sum: Vec<(Category, usize)> = Vec::new();
    let mut weekday = [0usize; 7];

    for s in &table.sessions {
        bump(&mut dominant, s.dominant_category);
        match unique_sum.iter_mut().find(|(c, _)| *c == s.dominant_category) {
            Some((_, n)) => *n += s.unique_domains,
            None => unique_sum.push((s.dominant_category, s.unique_domains)),
        }

        stats.sessions_per_hour[s.session_start.hour() as usize] += 1;
        weekday[s.session_start.weekday().num_days_from_monday() as usize] += 1;

        let per_user = stats.dominant_by_user.entry(s.user.clone()).or_default();
        bump(per_user, s.dominant_category);
    }

    let total = table.len().max(1) as f64;
    stats.dominant_distribution = sorted_desc(dominant.clone())
        .into_iter()
        .map(|(c, n)| (c, n, n as f64 / total))
        .collect();

    let mut averages: Vec<(Category, f64)> = unique_sum
        .into_iter()
        .map(|(c, sum)| {
            let sessions = dominant
                .iter()
                .find(|(d, _)| *d == c)
                .map(|(_, n)| *n)
                .unwrap_or(1);
            (c, sum as f64 / sessions as f64)
        })
        .collect();
    averages.sort_by(|a, b| b.1.total_cmp(&a.1));
    stats.avg_unique_domains = averages;

    stats.sessions_per_weekday = WEEKDAYS.iter().copied().zip(weekday).collect();

    let mut domains: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for ev in classified {
        match index.get(ev.domain.as_str()) {
            Some(&i) => domains[i].1 += 1,
            None => {
                index.insert(ev.domain.as_str(), domains.len());
                domains.push((ev.domain.clone(), 1));
            }
        }
    }
    stats.top_domains = sorted_desc(domains).into_iter().take(top_n).collect();

    stats
}
