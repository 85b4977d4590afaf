//! Search-engine query extraction.

use crate::config::defaults::SEARCH_QUERY_PARAMS;
use crate::core::domain::{clean_host, parse_lenient, unicode_host};
use crate::core::rules::RuleSet;

pub fn is_search_host(domain: &str, engines: &[String]) -> bool {
    engines.iter().any(|m| domain.contains(m.as_str()))
}

/// Return the lowercased search terms of a search-engine URL.
///
/// Looks at `q`, `query`, `p`, `search` in that order; when none carries a
/// value the path tokens are used instead. `None` means no signal: empty or
/// unparsable URL, host not a search engine, or nothing left after trimming.
pub fn extract_search_query(url: &str, rules: &RuleSet) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    let parsed = parse_lenient(url).ok()?;
    let host = clean_host(&unicode_host(&parsed), &rules.boilerplate_prefixes);
    if !is_search_host(&host, &rules.search_engines) {
        return None;
    }

    for key in SEARCH_QUERY_PARAMS {
        let values: Vec<String> = parsed
            .query_pairs()
            .filter(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.into_owned())
            .collect();

        if !values.is_empty() {
            return Some(values.join(" ").to_lowercase());
        }
    }

    let tokens = parsed.path().replace('/', " ").to_lowercase();
    let tokens = tokens.trim();
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.to_string())
    }
}
