use crate::domain::context::ViewContext;
use crate::domain::report::{format_date_es, format_datetime_es, initials, Report};
use crate::domain::tags::Status;
use crate::domain::timeline::TimelineEntry;
use crate::templates::components::{category_badge, priority_badge, status_badge};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn report_detail_page(ctx: &ViewContext, report: &Report, timeline: &[TimelineEntry]) -> Markup {
    let last_update = timeline
        .last()
        .map(|e| e.date)
        .unwrap_or(report.created_at);

    desktop_layout(
        &report.title,
        ctx,
        html! {
            main class="container detail" {
                p { a href="/reportes" { "← Volver" } }

                section class="card" {
                    div class="report-card-badges" {
                        (priority_badge(&report.priority))
                        (status_badge(&report.status))
                        (category_badge(&report.category))
                    }
                    h1 { (report.title) }
                    p class="muted" { "📍 " (report.location) }
                    p { (report.description) }
                    @if let Some(image) = &report.image {
                        img class="report-image" src=(image) alt=(format!("Imagen del reporte {}", report.id));
                    }
                    div class="report-card-meta muted" {
                        span {
                            span class="avatar" { (initials(&report.author)) }
                            " Reportado por " (report.author)
                        }
                        span { "📅 " (format_date_es(&report.created_at)) }
                    }
                }

                section class="card" id="timeline" {
                    div class="page-head" {
                        div {
                            h2 { "Cronología del Reporte" }
                            p class="muted" { "Seguimiento de las actualizaciones y progreso del reporte" }
                        }
                        @if !ctx.can_add_timeline_update() {
                            a href="/auth" class="btn btn-outline" { "Iniciar Sesión para actualizar" }
                        }
                    }

                    @if ctx.can_add_timeline_update() {
                        (update_form(report))
                    }

                    ol class="timeline" {
                        @for entry in timeline {
                            (timeline_item(entry))
                        }
                    }
                }

                aside class="card" {
                    h2 { "Información Rápida" }
                    dl {
                        dt { "Estado Actual" } dd { (status_badge(&report.status)) }
                        dt { "Prioridad" } dd { (priority_badge(&report.priority)) }
                        dt { "Categoría" } dd { (category_badge(&report.category)) }
                        dt { "Última Actualización" } dd { (format_date_es(&last_update)) }
                    }
                    @if let Some(c) = report.coordinates {
                        p {
                            a href=(format!("/mapa#{}", report.id)) {
                                "Ver en el mapa (" (format!("{:.4}, {:.4}", c.lat, c.lng)) ")"
                            }
                        }
                    }
                }
            }
        },
    )
}

fn update_form(report: &Report) -> Markup {
    html! {
        details class="update-form" {
            summary class="btn btn-outline" { "Agregar Actualización" }
            form method="post" action=(format!("/reportes/{}/timeline", report.id)) class="stack" {
                label for="status" { "Estado" }
                select id="status" name="status" required {
                    option value="" disabled selected { "Seleccioná el nuevo estado" }
                    @for s in Status::UPDATABLE {
                        option value=(s.label()) { (s) }
                    }
                }
                label for="description" { "Descripción" }
                textarea id="description" name="description" rows="3" required
                    placeholder="Describí la actualización del estado..." {}
                button type="submit" class="btn" { "Publicar Actualización" }
            }
        }
    }
}

fn timeline_item(entry: &TimelineEntry) -> Markup {
    html! {
        li class="timeline-item" {
            div class="timeline-head" {
                (status_badge(&entry.status))
                span class="muted" { (format_datetime_es(&entry.date)) }
            }
            p { (entry.description) }
            p class="muted small" {
                span class="avatar" { (entry.author_initials()) }
                " por " (entry.author)
            }
        }
    }
}
