// src/map/renderer.rs

use crate::domain::report::{Report, ReportId};
use crate::map::geo::LatLng;
use crate::map::marker::{Marker, ReportSelected};
use crate::map::surface::{DisplaySurface, TileLayer};
use crate::map::viewport::{fit_viewport, FitOptions, Viewport};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub tiles: TileLayer,
    pub initial_center: LatLng,
    pub initial_zoom: u8,
    pub fit: FitOptions,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            tiles: TileLayer::default(),
            // Posadas, Misiones.
            initial_center: LatLng {
                lat: -27.3676,
                lng: -55.8961,
            },
            initial_zoom: 13,
            fit: FitOptions::default(),
        }
    }
}

impl MapOptions {
    pub fn initial_viewport(&self) -> Viewport {
        Viewport::Center {
            center: self.initial_center,
            zoom: self.initial_zoom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    Uninitialized,
    Ready,
}

/// Identifies one requested sync. Only the most recently issued ticket
/// may touch the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncTicket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub added: usize,
    pub removed: usize,
    pub kept: usize,
    /// Reports dropped for missing or invalid coordinates.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Applied(SyncStats),
    /// A newer ticket was issued before this one was applied.
    Superseded,
    /// `attach` has not run yet.
    NotAttached,
}

/// Keeps a [`DisplaySurface`] in step with a visible-report sequence.
///
/// Markers are keyed by report id. A sync removes ids that left the visible
/// set, adds ids that joined it and leaves every other marker alone, so the
/// work per filter change is proportional to the difference between the two
/// sets.
pub struct MapRenderer<S: DisplaySurface> {
    surface: S,
    options: MapOptions,
    state: RendererState,
    live: BTreeSet<ReportId>,
    viewport: Option<Viewport>,
    issued: u64,
}

impl<S: DisplaySurface> MapRenderer<S> {
    pub fn new(surface: S, options: MapOptions) -> Self {
        Self {
            surface,
            options,
            state: RendererState::Uninitialized,
            live: BTreeSet::new(),
            viewport: None,
            issued: 0,
        }
    }

    /// Picks up a surface that is already attached and showing `shown`.
    pub fn resume<I>(surface: S, options: MapOptions, shown: I) -> Self
    where
        I: IntoIterator<Item = ReportId>,
    {
        Self {
            surface,
            options,
            state: RendererState::Ready,
            live: shown.into_iter().collect(),
            viewport: None,
            issued: 0,
        }
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Installs the base layer and initial viewport. Returns `false` when the
    /// renderer was already attached; nothing is touched in that case.
    pub fn attach(&mut self) -> bool {
        if self.state == RendererState::Ready {
            return false;
        }

        self.surface.attach_base_layer(&self.options.tiles);
        let initial = self.options.initial_viewport();
        self.surface.set_viewport(initial);
        self.viewport = Some(initial);
        self.state = RendererState::Ready;

        info!(tiles = %self.options.tiles.url, "map surface attached");
        true
    }

    pub fn begin_sync(&mut self) -> SyncTicket {
        self.issued += 1;
        SyncTicket(self.issued)
    }

    /// Issues a ticket and applies it straight away.
    pub fn render<'a, I>(&mut self, visible: I) -> SyncOutcome
    where
        I: IntoIterator<Item = &'a Report>,
    {
        let ticket = self.begin_sync();
        self.sync(ticket, visible)
    }

    /// Brings the surface in line with `visible`: removals first, then
    /// additions in visible order, then the viewport.
    pub fn sync<'a, I>(&mut self, ticket: SyncTicket, visible: I) -> SyncOutcome
    where
        I: IntoIterator<Item = &'a Report>,
    {
        if ticket.0 != self.issued {
            debug!(ticket = ticket.0, latest = self.issued, "dropping superseded map sync");
            return SyncOutcome::Superseded;
        }
        if self.state != RendererState::Ready {
            warn!("map sync requested before the surface was attached");
            return SyncOutcome::NotAttached;
        }

        let mut stats = SyncStats::default();
        let mut desired: Vec<&Report> = Vec::new();
        let mut desired_ids = BTreeSet::new();

        for report in visible {
            if report.coordinates.is_none() {
                warn!(report_id = report.id, "skipping report without usable coordinates");
                stats.skipped += 1;
                continue;
            }
            if !desired_ids.insert(report.id) {
                debug!(report_id = report.id, "duplicate report id in visible set");
                continue;
            }
            desired.push(report);
        }

        let stale: Vec<ReportId> = self.live.difference(&desired_ids).copied().collect();
        for id in stale {
            self.surface.remove_marker(id);
            self.live.remove(&id);
            stats.removed += 1;
        }

        for report in &desired {
            if self.live.contains(&report.id) {
                stats.kept += 1;
                continue;
            }
            if let Some(marker) = Marker::for_report(report) {
                self.surface.add_marker(marker);
                self.live.insert(report.id);
                stats.added += 1;
            }
        }

        let points = desired.iter().filter_map(|r| r.coordinates);
        if let Some(viewport) = fit_viewport(points, &self.options.fit) {
            self.surface.set_viewport(viewport);
            self.viewport = Some(viewport);
        }

        debug!(
            added = stats.added,
            removed = stats.removed,
            kept = stats.kept,
            skipped = stats.skipped,
            viewport = ?self.viewport,
            "map sync applied"
        );
        SyncOutcome::Applied(stats)
    }

    /// A selection event for a live marker.
    pub fn select(&self, id: ReportId) -> Option<ReportSelected> {
        self.live.contains(&id).then(|| ReportSelected {
            id,
            href: crate::domain::report::report_href(id),
        })
    }
}

#[cfg(test)]
impl<S: DisplaySurface> MapRenderer<S> {
    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn live_ids(&self) -> &BTreeSet<ReportId> {
        &self.live
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
