// src/map/style.rs
//
// Fixed colour tables. Anything outside a table renders gray.

use crate::domain::tags::{Priority, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub hex: &'static str,
}

pub const RED: Swatch = Swatch { hex: "#ef4444" };
pub const AMBER: Swatch = Swatch { hex: "#f59e0b" };
pub const EMERALD: Swatch = Swatch { hex: "#10b981" };
pub const BLUE: Swatch = Swatch { hex: "#3b82f6" };
pub const GRAY: Swatch = Swatch { hex: "#6b7280" };

/// Marker colour.
pub fn priority_swatch(priority: &Priority) -> Swatch {
    match priority {
        Priority::Urgente => RED,
        Priority::Media => AMBER,
        Priority::Baja => EMERALD,
        Priority::Other(_) => GRAY,
    }
}

/// Popup status badge colour.
pub fn status_swatch(status: &Status) -> Swatch {
    match status {
        Status::Resuelto => EMERALD,
        Status::EnProgreso => BLUE,
        Status::Reportado => AMBER,
        _ => GRAY,
    }
}

/// Badge classes for the list and detail pages, which also colour the
/// intermediate workflow states.
pub fn status_badge_class(status: &Status) -> &'static str {
    match status {
        Status::Resuelto => "badge badge-green",
        Status::EnProgreso => "badge badge-blue",
        Status::Reportado => "badge badge-yellow",
        Status::Verificado => "badge badge-purple",
        Status::Pausado => "badge badge-orange",
        Status::Other(_) => "badge",
    }
}

pub fn priority_badge_class(priority: &Priority) -> &'static str {
    match priority {
        Priority::Urgente => "badge badge-destructive",
        Priority::Media => "badge badge-secondary",
        _ => "badge badge-outline",
    }
}
