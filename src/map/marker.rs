// src/map/marker.rs

use crate::domain::report::{Report, ReportId};
use crate::map::geo::LatLng;
use crate::map::popup::popup_markup;
use crate::map::style::priority_swatch;
use serde::Serialize;

/// Display state for one visible report. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: ReportId,
    pub position: LatLng,
    pub color: &'static str,
    pub title: String,
    pub href: String,
    pub popup_html: String,
}

impl Marker {
    /// `None` when the report has no usable coordinates.
    pub fn for_report(report: &Report) -> Option<Self> {
        let position = report.coordinates?;
        Some(Self {
            id: report.id,
            position,
            color: priority_swatch(&report.priority).hex,
            title: report.title.clone(),
            href: report.href(),
            popup_html: popup_markup(report).into_string(),
        })
    }
}

/// Emitted when a live marker is picked; routing consumes the `href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSelected {
    pub id: ReportId,
    pub href: String,
}
