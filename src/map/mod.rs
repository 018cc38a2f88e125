//! Report map view engine: turns a visible-report sequence into markers,
//! popups and a fitted viewport on a [`DisplaySurface`].

pub mod geo;
pub mod marker;
pub mod popup;
pub mod renderer;
pub mod style;
pub mod surface;
pub mod viewport;

pub use geo::{BoundingBox, LatLng};
pub use marker::{Marker, ReportSelected};
pub use renderer::{MapOptions, MapRenderer, RendererState, SyncOutcome, SyncStats, SyncTicket};
pub use surface::{DisplaySurface, MapPatch, PatchSurface, TileLayer};
pub use viewport::{fit_viewport, FitOptions, Viewport};
