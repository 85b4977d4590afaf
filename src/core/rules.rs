//! Compiled, immutable classification rules.
//!
//! A `RuleSet` is built once from a `Config` and then passed by reference to
//! every engine operation; nothing in the engine reads configuration on its own.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Category;
use chrono::TimeDelta;
use log::debug;
use regex::{Regex, RegexBuilder};

/// Longest accepted session window (one day).
const MAX_WINDOW_MINUTES: i64 = 24 * 60;

#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Ordered `(substring, category)` pairs, first match wins.
    pub domain_table: Vec<(String, Category)>,
    /// Ordered keyword patterns, first match wins.
    pub keyword_rules: Vec<(Category, Regex)>,
    pub search_engines: Vec<String>,
    pub boilerplate_prefixes: Vec<String>,
    pub media_labels: Vec<String>,
    pub shop_labels: Vec<String>,
    pub window: TimeDelta,
}

impl RuleSet {
    pub fn compile(cfg: &Config) -> AppResult<Self> {
        if cfg.window_minutes <= 0 || cfg.window_minutes > MAX_WINDOW_MINUTES {
            return Err(AppError::InvalidWindow(cfg.window_minutes));
        }

        let keyword_rules = cfg
            .keyword_rules
            .iter()
            .map(|rule| {
                RegexBuilder::new(&rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|re| (rule.category, re))
                    .map_err(|source| AppError::InvalidPattern {
                        category: rule.category.label().to_string(),
                        source,
                    })
            })
            .collect::<AppResult<Vec<_>>>()?;

        let lower = |items: &[String]| -> Vec<String> {
            items
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        };

        let domain_table = cfg
            .domain_table
            .iter()
            .map(|r| (r.domain.trim().to_lowercase(), r.category))
            .filter(|(d, _)| !d.is_empty())
            .collect::<Vec<_>>();

        debug!(
            "compiled rule set: {} domains, {} keyword rules, window {} min",
            domain_table.len(),
            keyword_rules.len(),
            cfg.window_minutes
        );

        Ok(Self {
            domain_table,
            keyword_rules,
            search_engines: lower(&cfg.search_engines),
            boilerplate_prefixes: lower(&cfg.boilerplate_prefixes),
            media_labels: lower(&cfg.media_labels),
            shop_labels: lower(&cfg.shop_labels),
            window: TimeDelta::minutes(cfg.window_minutes),
        })
    }

    /// Rules built from the built-in tables.
    pub fn standard() -> AppResult<Self> {
        Self::compile(&Config::default())
    }
}
