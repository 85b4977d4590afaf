#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rsessionize::core::RuleSet;
use rsessionize::models::Event;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at an empty per-test directory so a
/// real user configuration never leaks in.
pub fn rsi(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rsessionize");
    cmd.env("HOME", temp_home(name));
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rsessionize_home_{name}"));
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Temporary output file path inside the system temp dir, removed if present.
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rsessionize_{name}_out.{ext}"));
    fs::remove_file(&path).ok();
    path
}

/// Write `content` to a fresh temp file and return its path.
pub fn temp_file(name: &str, ext: &str, content: &str) -> PathBuf {
    let path = temp_out(name, ext);
    fs::write(&path, content).expect("write fixture");
    path
}

pub fn rules() -> RuleSet {
    RuleSet::standard().expect("built-in rules compile")
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .expect("valid test timestamp")
}

pub fn ev(user: &str, url: &str, time: &str) -> Event {
    Event::new(user, url, ts(time))
}

/// Two users, three windows:
/// - u1 09:00 → Shopping, Finance, Shopping, Finance
/// - u1 10:00 → Travel (search query)
/// - u2 09:00 → Social/Entertainment ×2 on one domain
pub fn sample_events() -> Vec<Event> {
    vec![
        ev("u1", "https://www.amazon.com/dp/1", "2025-09-01 09:01"),
        ev("u1", "https://www.paypal.com/", "2025-09-01 09:20"),
        ev("u1", "https://www.ebay.com/itm/2", "2025-09-01 09:40"),
        ev("u1", "https://www.chase.com/", "2025-09-01 09:59"),
        ev(
            "u1",
            "https://www.google.com/search?q=best+budget+flights",
            "2025-09-01 10:02",
        ),
        ev("u2", "https://www.youtube.com/watch?v=1", "2025-09-01 09:30"),
        ev("u2", "https://www.youtube.com/watch?v=2", "2025-09-01 09:45"),
    ]
}

/// The same dataset as a CSV export (no user column; user comes from the
/// command line).
pub const SAMPLE_CSV_U1: &str = "\
,url,title,visit_time
0,https://www.amazon.com/dp/1,Amazon,2025-09-01 09:01:00
1,https://www.paypal.com/,PayPal,2025-09-01 09:20:00
2,https://www.ebay.com/itm/2,eBay,2025-09-01 09:40:00
3,https://www.chase.com/,Chase,2025-09-01 09:59:00
4,https://www.google.com/search?q=best+budget+flights,Google,2025-09-01 10:02:00
";
