// src/domain/store.rs

use crate::domain::report::Report;
use crate::domain::tags::{fold_key, Status};

/// Read-only collection of reports in input order.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    reports: Vec<Report>,
}

impl ReportStore {
    pub fn new(reports: Vec<Report>) -> Self {
        Self { reports }
    }

    pub fn get_all(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Reports whose author matches `name`, compared like tag labels.
    pub fn by_author(&self, name: &str) -> Vec<&Report> {
        let key = fold_key(name);
        if key.is_empty() {
            return Vec::new();
        }
        self.reports
            .iter()
            .filter(|r| fold_key(&r.author) == key)
            .collect()
    }
}

/// Per-status totals in first-seen order.
pub fn status_counts<'a, I>(reports: I) -> Vec<(Status, usize)>
where
    I: IntoIterator<Item = &'a Report>,
{
    let mut counts: Vec<(Status, usize)> = Vec::new();
    for report in reports {
        match counts.iter_mut().find(|(s, _)| s.matches(&report.status)) {
            Some((_, n)) => *n += 1,
            None => counts.push((report.status.clone(), 1)),
        }
    }
    counts
}
