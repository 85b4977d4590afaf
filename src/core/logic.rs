use crate::core::calculator::{dominant, window};
use crate::core::classifier;
use crate::core::rules::RuleSet;
use crate::models::{ClassifiedEvent, Event, SessionSummary, SessionTable};
use log::info;

pub struct Core;

impl Core {
    /// Classify every event, then build the session summary table.
    pub fn sessionize(events: &[Event], rules: &RuleSet) -> (Vec<ClassifiedEvent>, SessionTable) {
        let classified = classifier::classify_events(events, rules);
        let table = Self::summarize(&classified, rules);
        (classified, table)
    }

    /// Build the session summary table from already classified events.
    pub fn summarize(classified: &[ClassifiedEvent], rules: &RuleSet) -> SessionTable {
        let aggregates = window::build_sessions(classified, rules.window);
        let categories = dominant::dataset_categories(&aggregates);

        let sessions: Vec<SessionSummary> = aggregates
            .into_iter()
            .map(|agg| {
                let dominant_category = dominant::dominant_category(&agg.categories_list);
                let proportions = dominant::category_proportions(&agg.categories_list);

                SessionSummary {
                    session_id: window::session_id(&agg.key, rules.window),
                    user: agg.key.user,
                    window_start: agg.key.window_start,
                    session_start: agg.session_start,
                    session_end: agg.session_end,
                    num_visits: agg.num_visits,
                    unique_domains: agg.unique_domains,
                    domains_list: agg.domains_list,
                    categories_list: agg.categories_list,
                    observed_span_minutes: agg.observed_span_minutes,
                    nominal_duration_minutes: agg.nominal_duration_minutes,
                    dominant_category,
                    proportions,
                }
            })
            .collect();

        info!(
            "sessionization complete: {} events, {} sessions, {} category columns",
            classified.len(),
            sessions.len(),
            categories.len()
        );

        SessionTable {
            sessions,
            categories,
        }
    }
}
