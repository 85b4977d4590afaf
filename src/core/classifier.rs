//! URL → category cascade.
//!
//! Stages run in a fixed order and the first one that produces a category
//! wins: empty URL, domain table, search-engine query, keywords over
//! domain + path + query, generic second-level label, fallback.

use crate::core::domain::{normalize_domain, parse_lenient, strip_boilerplate};
use crate::core::rules::RuleSet;
use crate::core::search::{extract_search_query, is_search_host};
use crate::models::{Category, ClassifiedEvent, Event};
use log::debug;
use percent_encoding::percent_decode_str;
use serde::Serialize;

/// Which stage of the cascade decided the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    EmptyUrl,
    DomainTable,
    SearchKeyword,
    SearchGeneric,
    Keyword,
    GenericLabel,
    Fallback,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::EmptyUrl => "empty-url",
            Stage::DomainTable => "domain-table",
            Stage::SearchKeyword => "search-keyword",
            Stage::SearchGeneric => "search-generic",
            Stage::Keyword => "keyword",
            Stage::GenericLabel => "generic-label",
            Stage::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub domain: String,
    pub search_query: Option<String>,
    pub category: Category,
    pub stage: Stage,
}

/// First domain-table entry contained in `domain`, in declaration order.
pub fn lookup_domain(domain: &str, rules: &RuleSet) -> Option<Category> {
    rules
        .domain_table
        .iter()
        .find(|(key, _)| domain.contains(key.as_str()))
        .map(|(_, cat)| *cat)
}

/// First keyword rule matching `text`.
pub fn match_keywords(text: &str, rules: &RuleSet) -> Option<Category> {
    let text = text.to_lowercase();
    rules
        .keyword_rules
        .iter()
        .find(|(_, re)| re.is_match(&text))
        .map(|(cat, _)| *cat)
}

/// Text used by the keyword stage for non-search URLs.
fn keyword_text(url: &str, domain: &str) -> String {
    let Ok(parsed) = parse_lenient(url) else {
        return domain.to_string();
    };

    // the parser percent-encodes spaces and non-ASCII; match on the raw text
    let path = percent_decode_str(parsed.path())
        .decode_utf8_lossy()
        .replace('/', " ");
    let query = percent_decode_str(parsed.query().unwrap_or("")).decode_utf8_lossy();
    [domain, path.as_str(), &*query]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Category from the second-level label alone (`news.example` style hosts).
pub fn generic_label(domain: &str, rules: &RuleSet) -> Option<Category> {
    let labels: Vec<&str> = domain.split('.').collect();
    let sld = if labels.len() >= 2 {
        labels[labels.len() - 2]
    } else {
        domain
    };

    if rules.media_labels.iter().any(|l| l == sld) {
        Some(Category::SocialEntertainment)
    } else if rules.shop_labels.iter().any(|l| l == sld) {
        Some(Category::Shopping)
    } else {
        None
    }
}

/// Run the cascade and report which stage decided.
pub fn explain(url: &str, rules: &RuleSet) -> Classification {
    let url = url.trim();
    if url.is_empty() {
        return Classification {
            domain: String::new(),
            search_query: None,
            category: Category::Miscellaneous,
            stage: Stage::EmptyUrl,
        };
    }

    let normalized = normalize_domain(url, &rules.boilerplate_prefixes);
    let domain = strip_boilerplate(&normalized, &rules.boilerplate_prefixes).to_string();

    let decided = |category: Category, stage: Stage, search_query: Option<String>| Classification {
        domain: domain.clone(),
        search_query,
        category,
        stage,
    };

    if let Some(cat) = lookup_domain(&domain, rules) {
        return decided(cat, Stage::DomainTable, None);
    }

    if is_search_host(&domain, &rules.search_engines) {
        let query = extract_search_query(url, rules);
        let matched = query.as_deref().and_then(|q| match_keywords(q, rules));
        return match matched {
            Some(cat) => decided(cat, Stage::SearchKeyword, query),
            None => decided(Category::GeneralSearch, Stage::SearchGeneric, query),
        };
    }

    if let Some(cat) = match_keywords(&keyword_text(url, &domain), rules) {
        return decided(cat, Stage::Keyword, None);
    }

    if let Some(cat) = generic_label(&domain, rules) {
        return decided(cat, Stage::GenericLabel, None);
    }

    decided(Category::Miscellaneous, Stage::Fallback, None)
}

/// Assign exactly one category to `url`.
pub fn classify(url: &str, rules: &RuleSet) -> Category {
    explain(url, rules).category
}

pub fn classify_event(ev: &Event, rules: &RuleSet) -> ClassifiedEvent {
    let domain = normalize_domain(&ev.url, &rules.boilerplate_prefixes);
    let category = classify(&ev.url, rules);
    ClassifiedEvent::from_event(ev, domain, category)
}

pub fn classify_events(events: &[Event], rules: &RuleSet) -> Vec<ClassifiedEvent> {
    let classified: Vec<ClassifiedEvent> = events.iter().map(|e| classify_event(e, rules)).collect();
    debug!("classified {} events", classified.len());
    classified
}
