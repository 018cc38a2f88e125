// src/db/reports.rs
use crate::domain::report::{parse_timestamp, Report, ReportId};
use crate::domain::store::ReportStore;
use crate::domain::tags::{Category, Priority, Status};
use crate::errors::ServerError;
use crate::map::LatLng;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::warn;

const REPORT_COLUMNS: &str = "id, title, description, category, priority, status, location, lat, lng, author, created_at, image";

struct ReportRow {
    id: i64,
    title: String,
    description: String,
    category: String,
    priority: String,
    status: String,
    location: String,
    lat: Option<f64>,
    lng: Option<f64>,
    author: String,
    created_at: String,
    image: Option<String>,
}

impl ReportRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let id: i64 = row.get(0)?;
        Ok(Self {
            id,
            title: row.get(1)?,
            description: row.get(2)?,
            category: row.get(3)?,
            priority: row.get(4)?,
            status: row.get(5)?,
            location: row.get(6)?,
            lat: read_coordinate(id, "lat", row.get_ref(7)?),
            lng: read_coordinate(id, "lng", row.get_ref(8)?),
            author: row.get(9)?,
            created_at: row.get(10)?,
            image: row.get(11)?,
        })
    }

    /// Lenient conversion: bad coordinates become `None`; an unreadable
    /// timestamp drops the row.
    fn into_report(self) -> Option<Report> {
        let coordinates = LatLng::from_parts(self.lat, self.lng);
        if coordinates.is_none() {
            warn!(
                report_id = self.id,
                lat = ?self.lat,
                lng = ?self.lng,
                "report has no usable coordinates"
            );
        }

        let Some(created_at) = parse_timestamp(&self.created_at) else {
            warn!(
                report_id = self.id,
                created_at = %self.created_at,
                "skipping report with unreadable created_at"
            );
            return None;
        };

        Some(Report {
            id: self.id,
            title: self.title,
            description: self.description,
            category: Category::from_label(&self.category),
            priority: Priority::from_label(&self.priority),
            status: Status::from_label(&self.status),
            location: self.location,
            coordinates,
            author: self.author,
            created_at,
            image: self.image.filter(|s| !s.trim().is_empty()),
        })
    }
}

/// Numeric columns only; text or blobs in `lat`/`lng` read as missing.
fn read_coordinate(report_id: i64, column: &'static str, value: ValueRef<'_>) -> Option<f64> {
    match value {
        ValueRef::Real(v) => Some(v),
        ValueRef::Integer(v) => Some(v as f64),
        ValueRef::Null => None,
        other => {
            warn!(
                report_id,
                column,
                kind = ?other.data_type(),
                "non-numeric coordinate ignored"
            );
            None
        }
    }
}

/// All reports in id order.
pub fn list_reports(conn: &Connection) -> Result<Vec<Report>, ServerError> {
    let mut stmt = conn
        .prepare(&format!("select {REPORT_COLUMNS} from reports order by id"))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], ReportRow::from_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        let row = r.map_err(|e| ServerError::DbError(e.to_string()))?;
        out.extend(row.into_report());
    }
    Ok(out)
}

pub fn load_store(conn: &Connection) -> Result<ReportStore, ServerError> {
    Ok(ReportStore::new(list_reports(conn)?))
}

pub fn get_report(conn: &Connection, id: ReportId) -> Result<Option<Report>, ServerError> {
    let row = conn
        .query_row(
            &format!("select {REPORT_COLUMNS} from reports where id = ?"),
            params![id],
            ReportRow::from_row,
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("load report failed: {e}")))?;

    Ok(row.and_then(ReportRow::into_report))
}

pub fn count_by_status(conn: &Connection) -> Result<Vec<(Status, i64)>, ServerError> {
    let mut stmt = conn
        .prepare("select status, count(*) from reports group by status order by count(*) desc, status")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        let (status, n) = r.map_err(|e| ServerError::DbError(e.to_string()))?;
        out.push((Status::from_label(&status), n));
    }
    Ok(out)
}

#[cfg(test)]
pub fn insert_report(conn: &Connection, report: &Report) -> Result<(), ServerError> {
    conn.execute(
        &format!("insert into reports ({REPORT_COLUMNS}) values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"),
        params![
            report.id,
            report.title,
            report.description,
            report.category.label(),
            report.priority.label(),
            report.status.label(),
            report.location,
            report.coordinates.map(|c| c.lat),
            report.coordinates.map(|c| c.lng),
            report.author,
            report.created_at.to_rfc3339(),
            report.image,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert report failed: {e}")))?;
    Ok(())
}
