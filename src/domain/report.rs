// src/domain/report.rs

use crate::domain::tags::{Category, Priority, Status};
use crate::map::LatLng;
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::Serialize;

pub type ReportId = i64;

/// A citizen report. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: Status,
    /// Free-text address, display only.
    pub location: String,
    /// `None` when the stored pair was missing or out of range.
    pub coordinates: Option<LatLng>,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub image: Option<String>,
}

impl Report {
    pub fn href(&self) -> String {
        report_href(self.id)
    }
}

pub fn report_href(id: ReportId) -> String {
    format!("/reportes/{id}")
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Short es-AR date: `15/1/2024`.
pub fn format_date_es(dt: &DateTime<Utc>) -> String {
    format!("{}/{}/{}", dt.day(), dt.month(), dt.year())
}

/// Date plus time the way the timeline shows it: `15/1/2024 a las 10:30`.
pub fn format_datetime_es(dt: &DateTime<Utc>) -> String {
    format!(
        "{} a las {:02}:{:02}",
        format_date_es(dt),
        dt.hour(),
        dt.minute()
    )
}

/// Cuts `text` to at most `max_chars` characters, appending `...` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// First two characters of a name, uppercased. Falls back to `"U"`.
pub fn initials(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return "U".to_string();
    }
    trimmed.chars().take(2).flat_map(char::to_uppercase).collect()
}
