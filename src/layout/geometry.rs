//! Geometry helpers shared by the force model, the annealer and the
//! connector builder. Math runs on `glam::DVec2`; the typed pixel
//! primitives only appear at the edges.

use std::f64::consts::TAU;

use glam::{DVec2, dvec2};

use crate::types::{Point, Px, PtPx};

#[inline]
pub fn to_vec(p: PtPx) -> DVec2 {
    dvec2(p.x.raw(), p.y.raw())
}

#[inline]
pub fn to_point(v: DVec2) -> PtPx {
    Point::new(Px(v.x), Px(v.y))
}

/// Unit vector in the direction of `v`, or zero when `v` has no length.
#[inline]
pub fn normalize(v: DVec2) -> DVec2 {
    v.normalize_or_zero()
}

/// Component-wise product (each axis scaled independently).
#[inline]
pub fn scale_to(a: DVec2, b: DVec2) -> DVec2 {
    a * b
}

/// Attractive force magnitude at `distance` for spacing `k`.
#[inline]
pub fn attraction(distance: f64, k: f64) -> f64 {
    distance * distance / k
}

/// Repulsive force magnitude at `distance` for spacing `k`.
/// Callers must skip `distance == 0`.
#[inline]
pub fn repulsion(distance: f64, k: f64) -> f64 {
    k * k / distance
}

/// Ideal label spacing `sqrt(area / count)`; None for an empty set or a
/// degenerate area.
pub fn ideal_spacing(area: f64, count: usize) -> Option<f64> {
    if count == 0 || !(area > 0.0) || !area.is_finite() {
        return None;
    }
    Some((area / count as f64).sqrt())
}

/// Cap a displacement per axis: the direction of `disp` scaled on each axis by
/// `min(|disp.axis|, temperature)`.
pub fn cap_per_axis(disp: DVec2, temperature: f64) -> DVec2 {
    let limit = dvec2(disp.x.abs().min(temperature), disp.y.abs().min(temperature));
    scale_to(normalize(disp), limit)
}

/// Starting position for label `index` around `anchor`, snapped up to whole
/// pixels. Labels walk `sectors` evenly spaced angles; each completed circle
/// adds another `radius`, so no two indices share a starting point.
pub fn spread_position(anchor: PtPx, index: usize, radius: Px, sectors: usize) -> PtPx {
    let sectors = sectors.max(1);
    let ring = (index / sectors) as f64 + 1.0;
    let angle = TAU / sectors as f64 * (index % sectors) as f64;
    let offset = dvec2(angle.sin(), angle.cos()) * radius.raw() * ring;
    to_point((to_vec(anchor) + offset).ceil())
}
