mod common;
use common::{rules, sample_events, temp_out};
use rsessionize::core::Core;
use rsessionize::export::{ExportFormat, write_classified, write_sessions};
use rsessionize::models::SessionTable;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[test]
fn test_format_from_extension() {
    assert_eq!(ExportFormat::from_path(Path::new("out.CSV")), Some(ExportFormat::Csv));
    assert_eq!(ExportFormat::from_path(Path::new("a/b.json")), Some(ExportFormat::Json));
    assert_eq!(ExportFormat::from_path(Path::new("x.xlsx")), Some(ExportFormat::Xlsx));
    assert_eq!(ExportFormat::from_path(Path::new("x.txt")), None);
    assert_eq!(ExportFormat::from_path(Path::new("noext")), None);
}

#[test]
fn test_csv_export_is_wide() {
    let (_, table) = Core::sessionize(&sample_events(), &rules());
    let out = temp_out("export_wide", "csv");
    write_sessions(&table, ExportFormat::Csv, &out, false).expect("export");

    let content = fs::read_to_string(&out).expect("read");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some(
            "user,session_id,session_start,session_end,num_visits,unique_domains,\
domains_list,categories_list,observed_span_minutes,nominal_duration_minutes,\
dominant_category,Shopping,Finance,Travel,Social/Entertainment"
        )
    );
    assert_eq!(
        lines.next(),
        Some(
            "u1,u1_hour_2025090109,2025-09-01 09:01:00,2025-09-01 09:59:00,4,4,\
amazon.com;paypal.com;ebay.com;chase.com,Shopping;Finance;Shopping;Finance,58,60,\
Shopping,0.5,0.5,0,0"
        )
    );
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_json_export() {
    let (_, table) = Core::sessionize(&sample_events(), &rules());
    let out = temp_out("export_sessions", "json");
    write_sessions(&table, ExportFormat::Json, &out, false).expect("export");

    let v: Value = serde_json::from_str(&fs::read_to_string(&out).expect("read")).expect("json");
    let rows = v.as_array().expect("array");
    assert_eq!(rows.len(), 3);

    let first = &rows[0];
    assert_eq!(first["session_id"], "u1_hour_2025090109");
    assert_eq!(first["dominant_category"], "Shopping");
    assert_eq!(first["num_visits"], 4);
    assert_eq!(first["domains_list"].as_array().map(Vec::len), Some(4));
    assert_eq!(first["proportions"]["Finance"], 0.5);
    assert_eq!(first["proportions"]["Social/Entertainment"], 0.0);

    let u2 = &rows[2];
    assert_eq!(u2["proportions"]["Social/Entertainment"], 1.0);
}

#[test]
fn test_json_proportions_follow_column_order() {
    let (_, table) = Core::sessionize(&sample_events(), &rules());
    let out = temp_out("export_json_order", "json");
    write_sessions(&table, ExportFormat::Json, &out, false).expect("export");

    let text = fs::read_to_string(&out).expect("read");
    let start = text.find("\"proportions\"").expect("proportions key");
    let body = &text[start..];
    let pos = |label: &str| body.find(&format!("\"{label}\":")).expect(label);
    assert!(pos("Shopping") < pos("Finance"));
    assert!(pos("Finance") < pos("Travel"));
    assert!(pos("Travel") < pos("Social/Entertainment"));
}

#[test]
fn test_xlsx_export_writes_file() {
    let (_, table) = Core::sessionize(&sample_events(), &rules());
    let out = temp_out("export_sessions", "xlsx");
    write_sessions(&table, ExportFormat::Xlsx, &out, false).expect("export");

    let meta = fs::metadata(&out).expect("xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_empty_table_exports_header_only() {
    let out = temp_out("export_empty", "csv");
    write_sessions(&SessionTable::default(), ExportFormat::Csv, &out, false).expect("export");
    let content = fs::read_to_string(&out).expect("read");
    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with("user,session_id,"));
}

#[test]
fn test_classified_events_export() {
    let (classified, _) = Core::sessionize(&sample_events(), &rules());
    let out = temp_out("export_events", "csv");
    write_classified(&classified, &out, false).expect("export");

    let content = fs::read_to_string(&out).expect("read");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("user,url,visit_time,domain,category"));
    assert_eq!(
        lines.next(),
        Some("u1,https://www.amazon.com/dp/1,2025-09-01T09:01:00,amazon.com,Shopping")
    );
    assert_eq!(content.lines().count(), 8);

    let empty = temp_out("export_events_empty", "csv");
    write_classified(&[], &empty, false).expect("export");
    assert_eq!(
        fs::read_to_string(&empty).expect("read").trim_end(),
        "user,url,visit_time,domain,category"
    );
}

#[test]
fn test_existing_file_needs_force() {
    let (_, table) = Core::sessionize(&sample_events(), &rules());
    let out = temp_out("export_force", "csv");
    fs::write(&out, "keep me").expect("seed");

    write_sessions(&table, ExportFormat::Csv, &out, true).expect("forced export");
    assert!(fs::read_to_string(&out).expect("read").starts_with("user,"));
}
