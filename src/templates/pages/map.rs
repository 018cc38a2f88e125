use crate::domain::context::ViewContext;
use crate::domain::filter::FilterState;
use crate::domain::report::Report;
use crate::map::style::{AMBER, EMERALD, RED};
use crate::templates::components::{category_badge, filter_form, priority_dot, status_badge};
use crate::templates::layouts::desktop::desktop_layout_with_head;
use maud::{html, Markup, PreEscaped};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// JSON is embedded in a `<script>` block, so `</` must not appear verbatim.
pub fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

pub fn map_page(
    ctx: &ViewContext,
    filter: &FilterState,
    reports: &[Report],
    visible: &[&Report],
    initial_patch_json: &str,
) -> Markup {
    let head = html! {
        link rel="stylesheet" href=(LEAFLET_CSS);
        script src=(LEAFLET_JS) defer {}
        script src="/static/map.js" defer {}
    };

    desktop_layout_with_head(
        "Mapa de Reportes",
        ctx,
        head,
        html! {
            div class="map-page" {
                aside class="map-sidebar" {
                    div class="page-head" {
                        h2 { "Reportes en el Mapa" }
                        span class="badge badge-outline" id="visible-count" { (visible.len()) " reportes" }
                    }

                    (filter_form("/mapa", "map-filters", filter))

                    ul class="map-list" {
                        @for report in reports {
                            @let shown = visible.iter().any(|v| v.id == report.id);
                            li
                                class="map-list-item"
                                data-report-id=(report.id)
                                hidden[!shown]
                            {
                                (priority_dot(&report.priority))
                                div {
                                    h4 { a href=(report.href()) { (report.title) } }
                                    p class="muted small" { (report.location) }
                                    @if report.coordinates.is_none() {
                                        p class="muted small" { "Sin ubicación en el mapa" }
                                    }
                                    div class="report-card-badges" {
                                        (status_badge(&report.status))
                                        (category_badge(&report.category))
                                    }
                                }
                            }
                        }
                    }
                }

                div class="map-wrap" {
                    div id="map" {}
                    noscript { p { "El mapa necesita JavaScript." } }

                    div class="map-legend" {
                        h4 { "Leyenda" }
                        ul {
                            li { span class="dot" style=(format!("background-color: {};", RED.hex)) {} "Urgente" }
                            li { span class="dot" style=(format!("background-color: {};", AMBER.hex)) {} "Media" }
                            li { span class="dot" style=(format!("background-color: {};", EMERALD.hex)) {} "Baja" }
                        }
                    }
                    div class="map-hint" {
                        p class="muted small" { "Hacé clic en los marcadores para ver detalles" }
                    }
                }
            }

            script type="application/json" id="map-initial" {
                (PreEscaped(script_safe_json(initial_patch_json)))
            }
        },
    )
}
