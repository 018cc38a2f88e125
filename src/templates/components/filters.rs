use crate::domain::filter::FilterState;
use crate::domain::tags::{Category, Priority, Status};
use maud::{html, Markup};

/// GET form over the four filter criteria. `id` lets the map script hook it.
pub fn filter_form(action: &str, id: &str, filter: &FilterState) -> Markup {
    let selected_key = |value: Option<String>| value.unwrap_or_default();
    let category = selected_key(filter.category.as_ref().map(|c| c.key()));
    let status = selected_key(filter.status.as_ref().map(|s| s.key()));
    let priority = selected_key(filter.priority.as_ref().map(|p| p.key()));

    html! {
        form class="filters" id=(id) action=(action) method="get" {
            label class="sr-only" for="q" { "Buscar" }
            input
                type="search"
                id="q"
                name="q"
                placeholder="Buscar reportes..."
                value=(filter.search.as_deref().unwrap_or_default());

            select name="category" aria-label="Categoría" {
                option value="all" { "Todas las categorías" }
                @for c in Category::KNOWN {
                    option value=(c.label()) selected[category == c.key()] { (c) }
                }
            }
            select name="status" aria-label="Estado" {
                option value="all" { "Todos los estados" }
                @for s in Status::KNOWN {
                    option value=(s.label()) selected[status == s.key()] { (s) }
                }
            }
            select name="priority" aria-label="Prioridad" {
                option value="all" { "Todas las prioridades" }
                @for p in Priority::KNOWN {
                    option value=(p.label()) selected[priority == p.key()] { (p) }
                }
            }
            button type="submit" class="btn" { "Filtrar" }
        }
    }
}
