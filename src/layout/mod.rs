//! Force-directed label layout
//!
//! This module is organized into submodules:
//! - `defaults`: Default tuning constants
//! - `geometry`: Vector helpers (zero-safe normalization, per-axis caps, spread)
//! - `force`: Repulsion/attraction displacements for one step
//! - `anneal`: Temperature schedule and step application
//! - `clamp`: Viewport clamp of settled labels
//! - `connector`: Connector endpoints and the deferred build queue
//!
//! [`settle`] runs the synchronous phase of a pass: spread, anneal, center,
//! clamp, write back. It returns the connector requests for the deferred
//! phase, which the engine owns.

pub mod anneal;
pub mod clamp;
pub mod connector;
pub mod defaults;
pub mod force;
pub mod geometry;

pub use anneal::{ForceField, Schedule};
pub use connector::{ConnectorRequest, DeferredConnectors};

use glam::DVec2;

use crate::config::LayoutConfig;
use crate::errors::LayoutError;
use crate::host::MapHost;
use crate::log::{debug, warn};
use crate::registry::Registry;
use crate::types::{Offset, PtPx, SizePx};
use geometry::{spread_position, to_point, to_vec};

/// Summary of the synchronous phase of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PassReport {
    /// Tracked pairs laid out
    pub labels: usize,
    /// Pairs inside the working-set cap
    pub working_set: usize,
    /// Annealing steps run
    pub steps: usize,
    pub start_temperature: f64,
    /// Labels the viewport clamp moved
    pub clamped: usize,
    /// Labels without a rendered size (treated as zero-sized)
    pub unmeasured: usize,
    /// Connectors queued for the deferred phase
    pub queued_connectors: usize,
}

/// Result of [`settle`].
#[derive(Debug)]
pub struct Settled<M> {
    pub report: PassReport,
    pub requests: Vec<ConnectorRequest<M>>,
}

/// Lay out every tracked label and write the positions back to the host.
pub fn settle<H: MapHost>(
    host: &mut H,
    registry: &Registry<H::Marker, H::Connector>,
    config: &LayoutConfig,
) -> Result<Settled<H::Marker>, LayoutError> {
    // Nothing to place; an unsized host is fine until labels arrive.
    if registry.is_empty() {
        return Ok(Settled { report: PassReport::default(), requests: Vec::new() });
    }

    let window = host.viewport_size();
    let (width, height) = (window.w.raw(), window.h.raw());
    if SizePx::try_positive(width, height).is_err() {
        return Err(LayoutError::InvalidViewport { width, height });
    }

    let pairs = registry.pairs();
    let labels = pairs.len();
    let working_set = registry.working_set(config.max_working_set).len();
    if working_set < labels {
        warn!(labels, working_set, "label count exceeds working-set cap; tail skips forces and clamping");
    }

    let anchors: Vec<PtPx> = pairs
        .iter()
        .map(|p| host.project(host.marker_lat_lng(&p.marker)))
        .collect();

    let mut positions: Vec<DVec2> = anchors
        .iter()
        .enumerate()
        .map(|(i, &a)| to_vec(spread_position(a, i, config.spread_radius, config.spread_sectors)))
        .collect();

    let anchor_vecs: Vec<DVec2> = anchors[..working_set].iter().map(|&a| to_vec(a)).collect();
    let field = ForceField { area: width * height / config.area_divisor, labels };
    let schedule = Schedule::new(config.steps.steps_for(labels), width, config.temperature_divisor);
    anneal::anneal(&mut positions[..working_set], &anchor_vecs, field, schedule);

    let mut unmeasured = 0;
    let sizes: Vec<SizePx> = pairs
        .iter()
        .map(|p| {
            host.label_size(&p.marker).unwrap_or_else(|| {
                unmeasured += 1;
                SizePx::ZERO
            })
        })
        .collect();
    if unmeasured > 0 {
        warn!(unmeasured, "labels without a rendered size are laid out as points");
    }

    // The force model works on a centre-ish coordinate; the host wants the
    // top-left of the box.
    let mut top_left: Vec<PtPx> = positions
        .iter()
        .zip(&sizes)
        .map(|(&p, size)| {
            let half = DVec2::new(size.w.raw(), size.h.raw()) / 2.0;
            to_point((p - half).ceil())
        })
        .collect();

    let bounds = host.viewport_bounds();
    let clamped = clamp::clamp_all(
        &mut top_left[..working_set],
        &anchors[..working_set],
        &sizes[..working_set],
        &bounds,
    );

    for (pair, &position) in pairs.iter().zip(&top_left) {
        host.set_label_position(&pair.marker, position);
    }

    let inset = Offset::new(config.connector_inset_x, config.connector_inset_y);
    let requests: Vec<ConnectorRequest<H::Marker>> = pairs
        .iter()
        .zip(anchors.iter().zip(&top_left))
        .filter_map(|(pair, (&anchor, &settled))| {
            let label = host.label_position(&pair.marker).unwrap_or(settled);
            connector::candidate_endpoint(label, anchor, inset).map(|candidate| ConnectorRequest {
                marker: pair.marker.clone(),
                anchor,
                candidate,
            })
        })
        .collect();

    let report = PassReport {
        labels,
        working_set,
        steps: schedule.steps,
        start_temperature: schedule.start,
        clamped,
        unmeasured,
        queued_connectors: requests.len(),
    };
    debug!(?report, "layout pass settled");

    Ok(Settled { report, requests })
}
