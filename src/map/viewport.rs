// src/map/viewport.rs

use crate::map::geo::{BoundingBox, LatLng};
use serde::Serialize;

/// Zoom used when the visible points collapse to one location.
pub const SINGLE_POINT_ZOOM: u8 = 14;
/// Fraction of the box span added on each side before fitting.
pub const FIT_PADDING: f64 = 0.1;

/// The visible map region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Viewport {
    Center { center: LatLng, zoom: u8 },
    Bounds { bounds: BoundingBox },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    pub single_point_zoom: u8,
    pub padding: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            single_point_zoom: SINGLE_POINT_ZOOM,
            padding: FIT_PADDING,
        }
    }
}

/// Frames `points`. Returns `None` for an empty set so callers keep the
/// viewport they already have.
pub fn fit_viewport<I>(points: I, opts: &FitOptions) -> Option<Viewport>
where
    I: IntoIterator<Item = LatLng>,
{
    let tight = BoundingBox::covering(points)?;

    if tight.is_point() {
        return Some(Viewport::Center {
            center: LatLng {
                lat: tight.south,
                lng: tight.west,
            },
            zoom: opts.single_point_zoom,
        });
    }

    Some(Viewport::Bounds {
        bounds: tight.pad(opts.padding),
    })
}
