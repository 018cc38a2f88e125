// src/map/geo.rs

use serde::Serialize;

/// A validated latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Returns `None` for non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lng_ok = lng.is_finite() && (-180.0..=180.0).contains(&lng);
        (lat_ok && lng_ok).then_some(Self { lat, lng })
    }

    /// Both halves must be present and valid.
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        Self::new(lat?, lng?)
    }
}

/// Smallest padding applied to a side, about 10 cm. Spans narrower than a
/// float ulp would otherwise pad to nothing.
pub const MIN_PAD_DEGREES: f64 = 1e-6;

/// Axis-aligned box in degrees. `south <= north`, `west <= east`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn around(point: LatLng) -> Self {
        Self {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    /// Tight box over `points`, or `None` when there are none.
    pub fn covering<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::around(first), |mut bbox, p| {
            bbox.extend(p);
            bbox
        }))
    }

    pub fn extend(&mut self, p: LatLng) {
        self.south = self.south.min(p.lat);
        self.north = self.north.max(p.lat);
        self.west = self.west.min(p.lng);
        self.east = self.east.max(p.lng);
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// True when every point in the box coincides.
    pub fn is_point(&self) -> bool {
        self.height() == 0.0 && self.width() == 0.0
    }

    /// Grows each side by `fraction` of the box's span on that axis. An axis
    /// with zero span borrows the other axis's span so no side stays flush.
    /// No side moves by less than [`MIN_PAD_DEGREES`].
    pub fn pad(&self, fraction: f64) -> Self {
        let (h, w) = (self.height(), self.width());
        let dy = ((if h > 0.0 { h } else { w }) * fraction).max(MIN_PAD_DEGREES);
        let dx = ((if w > 0.0 { w } else { h }) * fraction).max(MIN_PAD_DEGREES);
        Self {
            south: self.south - dy,
            west: self.west - dx,
            north: self.north + dy,
            east: self.east + dx,
        }
    }

    /// True when `other` lies inside with a non-zero gap on all four sides.
    #[cfg(test)]
    pub fn strictly_contains(&self, other: &BoundingBox) -> bool {
        self.south < other.south
            && self.west < other.west
            && self.north > other.north
            && self.east > other.east
    }
}
