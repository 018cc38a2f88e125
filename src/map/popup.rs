// src/map/popup.rs

use crate::domain::report::{format_date_es, truncate_chars, Report};
use crate::map::style::status_swatch;
use maud::{html, Markup};

pub const POPUP_DESCRIPTION_CHARS: usize = 100;

/// Popup body for one report marker.
pub fn popup_markup(report: &Report) -> Markup {
    let status = status_swatch(&report.status);

    html! {
        div class="popup" style="min-width: 250px;" {
            div style="margin-bottom: 8px;" {
                h3 class="popup-title" {
                    a href=(report.href()) data-report-id=(report.id) { (report.title) }
                }
                p class="popup-location" { "📍 " (report.location) }
            }

            @if let Some(image) = &report.image {
                div style="margin-bottom: 8px;" {
                    img src=(image) alt=(report.title) class="popup-image";
                }
            }

            p class="popup-description" {
                (truncate_chars(&report.description, POPUP_DESCRIPTION_CHARS))
            }

            div class="popup-badges" {
                span
                    class="popup-badge"
                    style=(format!(
                        "background-color: {hex}20; color: {hex}; border: 1px solid {hex}40;",
                        hex = status.hex
                    ))
                { (report.status) }
                span class="popup-badge popup-badge-neutral" { (report.category) }
            }

            div class="popup-meta" {
                span { "👤 " (report.author) }
                span { "📅 " (format_date_es(&report.created_at)) }
            }
        }
    }
}
