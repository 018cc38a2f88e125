use crate::domain::report::{format_date_es, Report};
use maud::{html, Markup};

pub mod badges;
pub mod error;
pub mod filters;

pub use badges::{category_badge, priority_badge, priority_dot, status_badge};
pub use error::error_page;
pub use filters::filter_form;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Single number with a caption.
pub fn stat_card(caption: &str, value: usize) -> Markup {
    html! {
        div class="card stat-card" {
            div class="stat-value" { (value) }
            p class="muted small" { (caption) }
        }
    }
}

/// Grid card used by the list view.
pub fn report_card(report: &Report) -> Markup {
    html! {
        article class="card report-card" data-report-id=(report.id) {
            header class="report-card-head" {
                h3 { a href=(report.href()) { (report.title) } }
                (priority_badge(&report.priority))
            }
            p class="muted" { "📍 " (report.location) }
            @if let Some(image) = &report.image {
                img class="report-image" src=(image) alt=(report.title);
            }
            p class="clamp-2" { (report.description) }
            div class="report-card-badges" {
                (status_badge(&report.status))
                (category_badge(&report.category))
            }
            div class="report-card-meta muted" {
                span { "👤 " (report.author) }
                span { "📅 " (format_date_es(&report.created_at)) }
            }
        }
    }
}
