//! Annealing scheduler: repeated force steps under a linearly cooling,
//! per-axis displacement cap.

use glam::DVec2;

use super::force::displacements;
use super::geometry::{cap_per_axis, ideal_spacing};
use crate::log::{trace, warn};

/// Temperature schedule of one annealing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    /// Number of force steps
    pub steps: usize,
    /// Temperature of the first step
    pub start: f64,
}

impl Schedule {
    /// Schedule starting at `ceil(viewport_width / divisor)`.
    pub fn new(steps: usize, viewport_width: f64, divisor: f64) -> Self {
        Self { steps, start: (viewport_width / divisor).ceil() }
    }

    /// Temperature at step `i`: `start * (1 - i / (steps - 1))`.
    ///
    /// Cools linearly to zero at the last step. A single-step run has no
    /// slope and stays at `start`.
    pub fn temperature(&self, i: usize) -> f64 {
        if self.steps <= 1 {
            return self.start;
        }
        self.start * (1.0 - i as f64 / (self.steps - 1) as f64)
    }
}

/// Inputs of the force model that stay fixed for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceField {
    /// Usable area in square pixels
    pub area: f64,
    /// Label count the spacing is derived from
    pub labels: usize,
}

impl ForceField {
    pub fn spacing(&self) -> Option<f64> {
        ideal_spacing(self.area, self.labels)
    }
}

/// Run `schedule` over `positions` in place. Positions are snapped up to
/// whole pixels after every step.
pub fn anneal(positions: &mut [DVec2], anchors: &[DVec2], field: ForceField, schedule: Schedule) {
    for i in 0..schedule.steps {
        let Some(k) = field.spacing() else {
            return;
        };
        let t = schedule.temperature(i);
        trace!(step = i, temperature = t, k, "anneal step");
        step(positions, anchors, k, t);
    }
}

/// One force evaluation followed by the capped move. All displacements are
/// computed from the same snapshot before any label moves.
pub fn step(positions: &mut [DVec2], anchors: &[DVec2], k: f64, temperature: f64) {
    let disp = displacements(positions, anchors, k);
    for (p, d) in positions.iter_mut().zip(disp) {
        let next = (*p + cap_per_axis(d, temperature)).ceil();
        if next.is_finite() {
            *p = next;
        } else {
            warn!(from = ?*p, "non-finite annealing step discarded");
        }
    }
}
