mod common;
use common::{SAMPLE_CSV_U1, rsi, temp_file, temp_home, temp_out};
use predicates::prelude::*;
use rusqlite::Connection;
use serde_json::Value;
use std::fs;

#[test]
fn test_classify_explains_the_decision() {
    rsi("cli_classify")
        .args([
            "classify",
            "https://www.google.com/search?q=best+budget+flights",
            "https://checkout.amazon.com/cart",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("best budget flights"))
        .stdout(predicate::str::contains("Travel"))
        .stdout(predicate::str::contains("search-keyword"))
        .stdout(predicate::str::contains("checkout.amazon.com"))
        .stdout(predicate::str::contains("domain-table"));
}

#[test]
fn test_classify_requires_a_url() {
    rsi("cli_classify_none").arg("classify").assert().failure();
}

#[test]
fn test_sessionize_prints_table() {
    let input = temp_file("cli_print", "csv", SAMPLE_CSV_U1);
    let arg = format!("{}=u1", input.display());

    rsi("cli_print")
        .args(["sessionize", "--input", &arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("u1_hour_2025090109"))
        .stdout(predicate::str::contains("u1_hour_2025090110"))
        .stdout(predicate::str::contains("SESSION"))
        .stdout(predicate::str::contains("Finance"));
}

#[test]
fn test_sessionize_to_json_and_events_file() {
    let input = temp_file("cli_json", "csv", SAMPLE_CSV_U1);
    let arg = format!("{}=u1", input.display());
    let out = temp_out("cli_sessions", "json");
    let events = temp_out("cli_events", "csv");

    rsi("cli_json")
        .args([
            "sessionize",
            "-i",
            &arg,
            "--file",
            out.to_str().unwrap(),
            "--events-file",
            events.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 events → 2 sessions"));

    let v: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v.as_array().map(Vec::len), Some(2));
    assert_eq!(v[1]["dominant_category"], "Travel");

    let lines = fs::read_to_string(&events).unwrap().lines().count();
    assert_eq!(lines, 6);
}

#[test]
fn test_sessionize_refuses_overwrite_without_force() {
    let input = temp_file("cli_overwrite_in", "csv", SAMPLE_CSV_U1);
    let arg = format!("{}=u1", input.display());
    let out = temp_out("cli_overwrite", "csv");
    fs::write(&out, "existing").unwrap();

    rsi("cli_overwrite")
        .args(["sessionize", "-i", &arg, "--file", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "existing");

    rsi("cli_overwrite")
        .args([
            "sessionize",
            "-i",
            &arg,
            "--file",
            out.to_str().unwrap(),
            "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("user,session_id"));
}

#[test]
fn test_sessionize_explicit_format_wins() {
    let input = temp_file("cli_format", "csv", SAMPLE_CSV_U1);
    let arg = format!("{}=u1", input.display());
    let out = temp_out("cli_format", "dat");

    rsi("cli_format")
        .args([
            "sessionize",
            "-i",
            &arg,
            "--format",
            "json",
            "--file",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().trim_start().starts_with('['));
}

#[test]
fn test_sessionize_reports_skipped_rows() {
    let input = temp_file(
        "cli_skipped",
        "csv",
        "url,visit_time\nhttps://www.amazon.com/,2025-09-01 09:00\nhttps://x.com/,garbage\n",
    );
    rsi("cli_skipped")
        .args(["sessionize", "-i", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 rows skipped"));
}

#[test]
fn test_sessionize_missing_column_fails() {
    let input = temp_file("cli_missing_col", "csv", "link,when\nx,y\n");
    rsi("cli_missing_col")
        .args(["sessionize", "-i", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing column"));
}

#[test]
fn test_stats_sections() {
    let input = temp_file("cli_stats", "csv", SAMPLE_CSV_U1);
    let arg = format!("{}=u1", input.display());

    rsi("cli_stats")
        .args(["stats", "-i", &arg, "--top", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dominant category per session"))
        .stdout(predicate::str::contains("Sessions per hour of day"))
        .stdout(predicate::str::contains("Top domains"))
        .stdout(predicate::str::contains("amazon.com"))
        .stdout(predicate::str::contains("u1:"));
}

#[test]
fn test_init_then_check_config() {
    let home = temp_home("cli_init");
    let conf = home.join(".rsessionize").join("rsessionize.conf");
    fs::remove_file(&conf).ok();

    rsi("cli_init")
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration initialized"));
    assert!(conf.exists());

    rsi("cli_init")
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    rsi("cli_init")
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn test_custom_config_file() {
    let conf = temp_file("cli_custom", "conf", "window_minutes: 30\n");
    let input = temp_file("cli_custom_in", "csv", SAMPLE_CSV_U1);
    let arg = format!("{}=u1", input.display());

    rsi("cli_custom")
        .args(["--config", conf.to_str().unwrap(), "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("window_minutes: 30"));

    rsi("cli_custom")
        .args(["--config", conf.to_str().unwrap(), "config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("domain_table"));

    rsi("cli_custom")
        .args(["--config", conf.to_str().unwrap(), "sessionize", "-i", &arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("u1_win_202509010900"));
}

#[test]
fn test_invalid_window_in_config() {
    let conf = temp_file("cli_bad_window", "conf", "window_minutes: 0\n");
    let input = temp_file("cli_bad_window_in", "csv", SAMPLE_CSV_U1);

    rsi("cli_bad_window")
        .args([
            "--config",
            conf.to_str().unwrap(),
            "sessionize",
            "-i",
            input.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid session window"));
}

#[test]
fn test_history_extract_then_sessionize() {
    let db = temp_out("cli_history", "db");
    let conn = Connection::open(&db).unwrap();
    conn.execute_batch(
        "CREATE TABLE urls (id INTEGER PRIMARY KEY, url TEXT, title TEXT);
         CREATE TABLE visits (id INTEGER PRIMARY KEY, url INTEGER, visit_time INTEGER);
         INSERT INTO urls VALUES (1, 'https://www.booking.com/hotel', 'Booking');
         INSERT INTO visits (url, visit_time) VALUES (1, 13401190800000000);",
    )
    .unwrap();
    drop(conn);

    let csv = temp_out("cli_history", "csv");
    rsi("cli_history")
        .args([
            "history",
            "--browser",
            "chrome",
            "--source",
            db.to_str().unwrap(),
            "--file",
            csv.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 visits written"));

    let content = fs::read_to_string(&csv).unwrap();
    assert!(content.starts_with("url,title,visit_time"));
    assert!(content.contains("2025-09-01 09:00:00"));

    let arg = format!("{}=me", csv.display());
    rsi("cli_history")
        .args(["sessionize", "-i", &arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("me_hour_2025090109"));
}

#[test]
fn test_history_missing_source() {
    let missing = temp_out("cli_history_missing", "db");
    let csv = temp_out("cli_history_missing", "csv");
    rsi("cli_history_missing")
        .args([
            "history",
            "--browser",
            "chrome",
            "--source",
            missing.to_str().unwrap(),
            "--file",
            csv.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("history not found"));
}
