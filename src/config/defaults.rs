//! Built-in classification tables.
//!
//! Order matters everywhere in this file: the domain table is matched by
//! substring and the first hit wins, the keyword rules are tried top to bottom.

use crate::models::Category;
use crate::models::Category::*;

/// Ordered `(domain substring, category)` pairs.
///
/// Matching is `domain.contains(key)`, so a short key can also fire inside an
/// unrelated longer host (e.g. `id.me` inside `paid.media.com`, `gap.com`
/// inside `singap.com`). The precedence is deterministic and kept as is.
pub const DOMAIN_TABLE: &[(&str, Category)] = &[
    // Education / Career
    ("coursera.org", EducationCareer),
    ("edx.org", EducationCareer),
    ("mit.edu", EducationCareer),
    ("wikipedia.org", EducationCareer),
    ("arxiv.org", EducationCareer),
    ("linkedin.com", EducationCareer),
    ("indeed.com", EducationCareer),
    ("glassdoor.com", EducationCareer),
    // Social / Entertainment
    ("youtube.com", SocialEntertainment),
    ("netflix.com", SocialEntertainment),
    ("spotify.com", SocialEntertainment),
    ("facebook.com", SocialEntertainment),
    ("instagram.com", SocialEntertainment),
    ("twitter.com", SocialEntertainment),
    ("tiktok.com", SocialEntertainment),
    ("reddit.com", SocialEntertainment),
    ("whatsapp.com", SocialEntertainment),
    ("gmail.com", SocialEntertainment),
    ("snapchat.com", SocialEntertainment),
    // Shopping
    ("amazon.com", Shopping),
    ("ebay.com", Shopping),
    ("walmart.com", Shopping),
    ("target.com", Shopping),
    ("flipkart.com", Shopping),
    ("aliexpress.com", Shopping),
    // Finance
    ("paypal.com", Finance),
    ("bankofamerica.com", Finance),
    ("chase.com", Finance),
    ("mint.com", Finance),
    ("moneycontrol.com", Finance),
    ("robinhood.com", Finance),
    // Travel
    ("airbnb.com", Travel),
    ("booking.com", Travel),
    ("expedia.com", Travel),
    ("tripadvisor.com", Travel),
    ("uber.com", Travel),
    ("lyft.com", Travel),
    ("airindia.com", Travel),
    // Reassigned sites
    ("placementdriveinsta.com", EducationCareer),
    ("joinhandshake.com", EducationCareer),
    ("compassgroupcareers.com", EducationCareer),
    ("behance.net", SocialEntertainment),
    ("ibommatamil.com", SocialEntertainment),
    ("columbia.com", Shopping),
    ("gap.com", Shopping),
    ("rakuten.com", Shopping),
    ("groww.in", Finance),
    ("sarathi.parivahan.gov.in", Travel),
    ("mymva.maryland.gov", Travel),
    ("i94.cbp.dhs.gov", Travel),
    // Authentication and portals, mapped to the closest intent
    ("login.gov", Finance),
    ("duosecurity.com", EducationCareer),
    ("id.me", Finance),
    ("ssa.gov", Finance),
    ("cashnet.com", Finance),
    ("blackthorn.io", EducationCareer),
    ("gamma.app", EducationCareer),
];

pub const KW_EDUCATION: &str = r"(edu|course|university|school|study|lecture|assignment|research|paper|thesis|arxiv|wikipedia|tutorial|how to)";
pub const KW_SOCIAL: &str = r"(youtube|music|video|song|movie|stream|netflix|instagram|facebook|tiktok|reddit|meme|social|chat|streaming)";
pub const KW_SHOPPING: &str = r"(buy|price|buying|shop|sale|discount|coupon|deal|order|cart|product|review|amazon|ebay|store)";
pub const KW_FINANCE: &str = r"(bank|loan|account|credit|debit|investment|stock|shares|finance|tax|mortgage|broker|insurance|paypal|wallet)";
pub const KW_TRAVEL: &str = r"(flight|hotel|booking|train|bus|ticket|trip|travel|airbnb|expedia|itinerary|destination)";

/// Keyword rules in their fixed priority.
pub const KEYWORD_RULES: &[(Category, &str)] = &[
    (EducationCareer, KW_EDUCATION),
    (SocialEntertainment, KW_SOCIAL),
    (Shopping, KW_SHOPPING),
    (Finance, KW_FINANCE),
    (Travel, KW_TRAVEL),
];

pub const SEARCH_ENGINES: &[&str] = &["google.", "bing.", "yahoo.", "duckduckgo.", "baidu.", "yandex."];

pub const BOILERPLATE_PREFIXES: &[&str] = &["web", "mail", "m", "news", "blog", "app", "en", "home"];

/// Query parameters holding the search terms, highest priority first.
pub const SEARCH_QUERY_PARAMS: &[&str] = &["q", "query", "p", "search"];

pub const MEDIA_LABELS: &[&str] = &["blog", "news", "press", "media"];
pub const SHOP_LABELS: &[&str] = &["shop", "store", "deal", "promo"];

pub const WINDOW_MINUTES: i64 = 60;
