// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime};

/// Excel serial date (days since 1899-12-30, fractional part = time of day).
pub(crate) fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let Some(epoch) = NaiveDate::from_ymd_opt(1899, 12, 30).and_then(|d| d.and_hms_opt(0, 0, 0)) else {
        return 0.0;
    };
    let millis = (*dt - epoch).num_milliseconds();
    millis as f64 / 86_400_000.0
}
