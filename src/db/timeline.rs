// src/db/timeline.rs
use crate::domain::report::{parse_timestamp, ReportId};
use crate::domain::tags::Status;
use crate::domain::timeline::{NewTimelineEntry, TimelineEntry};
use crate::errors::ServerError;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{params, Connection};

const ENTRY_COLUMNS: &str = "id, report_id, status, description, date, author";

type EntryRow = (i64, i64, String, String, String, String);

fn query_entries(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<TimelineEntry>, ServerError> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params, |row| -> rusqlite::Result<EntryRow> {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut entries = Vec::new();
    for r in rows {
        let (id, report_id, status, description, date, author) =
            r.map_err(|e| ServerError::DbError(e.to_string()))?;
        let date = parse_timestamp(&date).ok_or_else(|| {
            ServerError::DbError(format!("timeline entry {id} has unreadable date {date:?}"))
        })?;
        entries.push(TimelineEntry {
            id,
            report_id,
            status: Status::from_label(&status),
            description,
            date,
            author,
        });
    }
    Ok(entries)
}

/// Entries for one report, in the order they were appended.
pub fn list_timeline(conn: &Connection, report_id: ReportId) -> Result<Vec<TimelineEntry>, ServerError> {
    query_entries(
        conn,
        &format!("select {ENTRY_COLUMNS} from timeline_entries where report_id = ? order by id"),
        params![report_id],
    )
}

/// Most recent entries posted by `author`, newest first.
pub fn recent_entries_by_author(
    conn: &Connection,
    author: &str,
    limit: usize,
) -> Result<Vec<TimelineEntry>, ServerError> {
    query_entries(
        conn,
        &format!(
            "select {ENTRY_COLUMNS} from timeline_entries where author = ? order by id desc limit ?"
        ),
        params![author, limit as i64],
    )
}

/// Appends an entry. Existing entries are never rewritten or reordered.
pub fn append_timeline_entry(
    conn: &Connection,
    report_id: ReportId,
    entry: &NewTimelineEntry,
    author: &str,
    now: DateTime<Utc>,
) -> Result<TimelineEntry, ServerError> {
    // Stored with whole seconds; hand back the same instant.
    let now = now.trunc_subsecs(0);
    conn.execute(
        "insert into timeline_entries (report_id, status, description, date, author) values (?, ?, ?, ?, ?)",
        params![
            report_id,
            entry.status.label(),
            entry.description,
            now.to_rfc3339_opts(SecondsFormat::Secs, true),
            author
        ],
    )
    .map_err(|e| ServerError::DbError(format!("append timeline entry failed: {e}")))?;

    Ok(TimelineEntry {
        id: conn.last_insert_rowid(),
        report_id,
        status: entry.status.clone(),
        description: entry.description.clone(),
        date: now,
        author: author.to_string(),
    })
}
