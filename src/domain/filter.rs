// src/domain/filter.rs

use crate::domain::report::Report;
use crate::domain::tags::{fold_key, Category, Priority, Status};
use std::collections::HashMap;

/// Current filter criteria. Every field `None` means "all" for that dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    /// Free text matched against title, description and location.
    pub search: Option<String>,
}

impl FilterState {
    /// Builds a filter from query parameters. Empty values and `all` are unset.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let criterion = |name: &str| {
            params
                .get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty() && fold_key(v) != "all")
        };

        Self {
            category: criterion("category").map(Category::from_label),
            status: criterion("status").map(Status::from_label),
            priority: criterion("priority").map(Priority::from_label),
            search: params
                .get("q")
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.search.is_none()
    }

    pub fn matches(&self, report: &Report) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .map_or(true, |c| c.matches(&report.category));
        let status_ok = self
            .status
            .as_ref()
            .map_or(true, |s| s.matches(&report.status));
        let priority_ok = self
            .priority
            .as_ref()
            .map_or(true, |p| p.matches(&report.priority));
        let search_ok = self.search.as_deref().map_or(true, |needle| {
            let needle = fold_key(needle);
            [&report.title, &report.description, &report.location]
                .iter()
                .any(|field| fold_key(field).contains(&needle))
        });

        category_ok && status_ok && priority_ok && search_ok
    }

    /// Query string that reproduces this filter, without the leading `?`.
    pub fn to_query(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        if let Some(c) = &self.category {
            ser.append_pair("category", c.label());
        }
        if let Some(s) = &self.status {
            ser.append_pair("status", s.label());
        }
        if let Some(p) = &self.priority {
            ser.append_pair("priority", p.label());
        }
        if let Some(q) = &self.search {
            ser.append_pair("q", q);
        }
        ser.finish()
    }
}

/// Keeps the reports matching every set criterion, preserving input order.
pub fn apply<'a, I>(reports: I, filter: &FilterState) -> Vec<&'a Report>
where
    I: IntoIterator<Item = &'a Report>,
{
    reports.into_iter().filter(|r| filter.matches(r)).collect()
}
