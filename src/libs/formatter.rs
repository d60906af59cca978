//! Date formatting helpers for table views and exports.
//!
//! All display formatting lives here so that table views, dashboards and
//! exports render dates identically.

use chrono::{NaiveDate, NaiveDateTime};

/// Formats a calendar date as "Jan 15, 2026".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats an optional due date, empty string when absent.
pub fn format_due_date(due_date: Option<NaiveDate>) -> String {
    due_date.map(format_date).unwrap_or_default()
}

/// Formats a creation timestamp as "Jan 15, 2026 14:30".
pub fn format_timestamp(timestamp: Option<NaiveDateTime>) -> String {
    timestamp.map(|ts| ts.format("%b %-d, %Y %H:%M").to_string()).unwrap_or_default()
}

/// Joins tags for display: "#home #errands".
pub fn format_tags(tags: &[String]) -> String {
    tags.iter().map(|t| format!("#{}", t)).collect::<Vec<_>>().join(" ")
}
