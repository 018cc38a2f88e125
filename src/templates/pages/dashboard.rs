use crate::db::users::UserProfile;
use crate::domain::context::ViewContext;
use crate::domain::report::{format_date_es, format_datetime_es, initials, report_href, Report};
use crate::domain::tags::Status;
use crate::domain::timeline::TimelineEntry;
use crate::templates::components::{report_card, stat_card, status_badge};
use crate::templates::desktop_layout;
use chrono::DateTime;
use maud::{html, Markup};

pub fn dashboard_page(
    ctx: &ViewContext,
    profile: &UserProfile,
    mine: &[&Report],
    counts: &[(Status, usize)],
    activity: &[TimelineEntry],
) -> Markup {
    let member_since = DateTime::from_timestamp(profile.created_at, 0).map(|d| format_date_es(&d));

    desktop_layout(
        "Mi Panel",
        ctx,
        html! {
            main class="container" {
                section class="card profile" {
                    span class="avatar avatar-lg" { (initials(&profile.display_name)) }
                    div {
                        h1 { (profile.display_name) }
                        p class="muted" { (profile.email) }
                        @if let Some(date) = member_since {
                            p class="muted small" { "📅 Miembro desde " (date) }
                        }
                    }
                }

                div class="stats-grid" {
                    (stat_card("Mis reportes", mine.len()))
                    @for (status, n) in counts {
                        (stat_card(status.label(), *n))
                    }
                }

                div class="page-head" {
                    div {
                        h2 { "Mis Reportes" }
                        p class="muted" { "Reportes publicados con tu nombre" }
                    }
                }
                @if mine.is_empty() {
                    p class="empty" { "Todavía no hay reportes a tu nombre." }
                } @else {
                    div class="report-grid" {
                        @for report in mine {
                            (report_card(report))
                        }
                    }
                }

                section class="card" id="activity" {
                    h2 { "Actividad reciente" }
                    @if activity.is_empty() {
                        p class="muted" { "Sin actualizaciones publicadas." }
                    } @else {
                        ul class="activity" {
                            @for entry in activity {
                                (activity_item(entry))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn activity_item(entry: &TimelineEntry) -> Markup {
    html! {
        li class="activity-item" {
            (status_badge(&entry.status))
            div {
                p {
                    a href=(report_href(entry.report_id)) { "Reporte #" (entry.report_id) }
                    ": " (entry.description)
                }
                p class="muted small" { (format_datetime_es(&entry.date)) }
            }
        }
    }
}
