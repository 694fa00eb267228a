use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default failure report filename with format: survey-tagger-failures-{YYMMDD}.txt
pub fn generate_default_report_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("survey-tagger-failures-{:02}{:02}{:02}.txt", year, month, day);
    PathBuf::from(filename)
}
