// src/domain/timeline.rs

use crate::domain::report::{initials, ReportId};
use crate::domain::tags::Status;
use chrono::{DateTime, Utc};

/// One status update on a report. Entries are append-only and kept in
/// insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub id: i64,
    pub report_id: ReportId,
    pub status: Status,
    pub description: String,
    pub date: DateTime<Utc>,
    pub author: String,
}

impl TimelineEntry {
    pub fn author_initials(&self) -> String {
        initials(&self.author)
    }
}

/// A validated update waiting to be appended.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimelineEntry {
    pub status: Status,
    pub description: String,
}

impl NewTimelineEntry {
    /// Validates raw form input. Only follow-up statuses are accepted and
    /// the description must not be blank.
    pub fn from_form(status: Option<&str>, description: Option<&str>) -> Result<Self, String> {
        let status = status
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or("Falta el estado")?;
        let status = Status::from_label(status);
        if !status.is_updatable() {
            return Err(format!("El estado '{status}' no se puede publicar como actualización"));
        }

        let description = description
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or("Falta la descripción")?
            .to_string();

        Ok(Self {
            status,
            description,
        })
    }
}
