// src/map/surface.rs

use crate::domain::report::ReportId;
use crate::map::marker::Marker;
use crate::map::viewport::Viewport;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
        }
    }
}

/// The mutable map widget. Only the renderer calls these.
pub trait DisplaySurface {
    fn attach_base_layer(&mut self, tiles: &TileLayer);
    fn add_marker(&mut self, marker: Marker);
    fn remove_marker(&mut self, id: ReportId);
    fn set_viewport(&mut self, viewport: Viewport);
}

/// Operations for the browser to replay, in the order they must be applied:
/// base layer, removals, additions, viewport.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach: Option<TileLayer>,
    pub remove: Vec<ReportId>,
    pub add: Vec<Marker>,
    pub viewport: Option<Viewport>,
}

#[cfg(test)]
impl MapPatch {
    pub fn is_noop(&self) -> bool {
        self.attach.is_none()
            && self.remove.is_empty()
            && self.add.is_empty()
            && self.viewport.is_none()
    }

    /// Number of marker create/destroy operations.
    pub fn churn(&self) -> usize {
        self.remove.len() + self.add.len()
    }
}

/// Surface that records calls into a [`MapPatch`] instead of drawing.
#[derive(Debug, Default)]
pub struct PatchSurface {
    patch: MapPatch,
}

impl PatchSurface {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn patch(&self) -> &MapPatch {
        &self.patch
    }

    /// Hands over what has been recorded so far and starts a fresh patch.
    pub fn take_patch(&mut self) -> MapPatch {
        std::mem::take(&mut self.patch)
    }
}

impl DisplaySurface for PatchSurface {
    fn attach_base_layer(&mut self, tiles: &TileLayer) {
        self.patch.attach = Some(tiles.clone());
    }

    fn add_marker(&mut self, marker: Marker) {
        self.patch.add.push(marker);
    }

    fn remove_marker(&mut self, id: ReportId) {
        self.patch.remove.push(id);
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.patch.viewport = Some(viewport);
    }
}
