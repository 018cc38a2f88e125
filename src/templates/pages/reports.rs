use crate::domain::context::ViewContext;
use crate::domain::filter::FilterState;
use crate::domain::report::Report;
use crate::templates::components::{filter_form, report_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn reports_page(
    ctx: &ViewContext,
    filter: &FilterState,
    visible: &[&Report],
    total: usize,
) -> Markup {
    let map_href = match filter.to_query() {
        q if q.is_empty() => "/mapa".to_string(),
        q => format!("/mapa?{q}"),
    };

    desktop_layout(
        "Reportes",
        ctx,
        html! {
            main class="container" {
                div class="page-head" {
                    div {
                        h1 { "Reportes Públicos" }
                        p class="muted" { "Explorá todos los reportes de problemas públicos en Posadas" }
                    }
                    a href=(map_href) class="btn btn-outline" { "Ver en el mapa" }
                }

                (filter_form("/reportes", "report-filters", filter))

                p class="muted result-count" {
                    "Mostrando " strong { (visible.len()) } " de " (total) " reportes"
                }

                @if visible.is_empty() {
                    p class="empty" { "No hay reportes que coincidan con los filtros." }
                } @else {
                    div class="report-grid" {
                        @for report in visible {
                            (report_card(report))
                        }
                    }
                }
            }
        },
    )
}
