use crate::domain::tags::{Category, Priority, Status};
use crate::map::style::{priority_badge_class, priority_swatch, status_badge_class};
use maud::{html, Markup};

pub fn status_badge(status: &Status) -> Markup {
    html! { span class=(status_badge_class(status)) { (status) } }
}

pub fn priority_badge(priority: &Priority) -> Markup {
    html! { span class=(priority_badge_class(priority)) { (priority) } }
}

pub fn category_badge(category: &Category) -> Markup {
    html! { span class="badge badge-outline" { (category) } }
}

/// Small coloured dot matching the marker colour.
pub fn priority_dot(priority: &Priority) -> Markup {
    html! {
        span class="dot" style=(format!("background-color: {};", priority_swatch(priority).hex)) {}
    }
}
