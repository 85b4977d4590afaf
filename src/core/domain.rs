//! Domain normalization: URL or bare host → clean base domain.

use log::debug;
use url::Url;

/// Parse `input` as a URL, assuming `http://` when no scheme is given.
pub(crate) fn parse_lenient(input: &str) -> Result<Url, url::ParseError> {
    let trimmed = input.trim();
    if trimmed.contains("://") {
        Url::parse(trimmed)
    } else {
        Url::parse(&format!("http://{trimmed}"))
    }
}

/// Drop one leading boilerplate label (`mail.`, `m.`, `blog.` ...).
pub fn strip_boilerplate<'a>(domain: &'a str, prefixes: &[String]) -> &'a str {
    prefixes
        .iter()
        .find_map(|p| domain.strip_prefix(p.as_str())?.strip_prefix('.'))
        .unwrap_or(domain)
}

/// Lowercase a host, remove `www.` and any port, then strip boilerplate.
pub fn clean_host(host: &str, prefixes: &[String]) -> String {
    let host = host.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    // IPv6 literals keep their colons.
    let host = if host.starts_with('[') {
        host
    } else {
        host.split(':').next().unwrap_or(host)
    };
    strip_boilerplate(host, prefixes).to_string()
}

/// Host of a parsed URL, punycode labels decoded back to Unicode.
pub(crate) fn unicode_host(parsed: &Url) -> String {
    let host = parsed.host_str().unwrap_or("");
    if !host.contains("xn--") {
        return host.to_string();
    }
    let (decoded, result) = idna::domain_to_unicode(host);
    match result {
        Ok(()) => decoded,
        Err(_) => host.to_string(),
    }
}

/// Host part of a string the URL parser rejected (`about:blank`, bad port).
///
/// Takes the text after `://` (or from the start) up to the first `/`, `?`
/// or `#`, then drops userinfo and port. `None` when nothing is left.
fn raw_authority(input: &str) -> Option<&str> {
    let rest = input.split_once("://").map_or(input, |(_, r)| r);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let authority = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let host = if authority.starts_with('[') {
        authority.split_inclusive(']').next().unwrap_or(authority)
    } else {
        authority.split(':').next().unwrap_or(authority)
    };
    let host = host.trim();
    (!host.is_empty()).then_some(host)
}

/// Reduce a URL or host to its base domain.
///
/// Never fails: input the URL parser rejects goes through a plain
/// authority split, and only when no host can be found there either is the
/// trimmed, lowercased input returned.
pub fn normalize_domain(input: &str, prefixes: &[String]) -> String {
    let input = input.trim();
    match parse_lenient(input) {
        Ok(parsed) => clean_host(&unicode_host(&parsed), prefixes),
        Err(e) => {
            debug!("unparsable url {input:?}: {e}");
            match raw_authority(input) {
                Some(host) => clean_host(host, prefixes),
                None => input.to_lowercase(),
            }
        }
    }
}
