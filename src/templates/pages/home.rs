// templates/pages/home.rs

use crate::domain::context::ViewContext;
use crate::domain::filter::FilterState;
use crate::domain::tags::Status;
use crate::templates::{
    components::{card, status_badge},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(ctx: &ViewContext, total: usize, by_status: &[(Status, i64)]) -> Markup {
    desktop_layout(
        "Inicio",
        ctx,
        html! {
            main class="container" {
                h1 { "Reportá los problemas de tu barrio" }
                p class="lead" {
                    "Baches, luminarias apagadas, semáforos rotos: seguí cada reporte hasta que se resuelva."
                }

                div class="actions" {
                    a href="/reportes" class="btn" { "Ver reportes" }
                    a href="/mapa" class="btn btn-outline" { "Abrir el mapa" }
                }

                (card("Estado de los reportes", html! {
                    p { strong { (total) } " reportes publicados." }
                    ul class="status-counts" {
                        @for (status, n) in by_status {
                            li {
                                (status_badge(status))
                                " "
                                a href=(status_href(status)) { (n) }
                            }
                        }
                    }
                }))
            }
        },
    )
}

/// List view filtered to one status.
fn status_href(status: &Status) -> String {
    let filter = FilterState {
        status: Some(status.clone()),
        ..FilterState::default()
    };
    format!("/reportes?{}", filter.to_query())
}
