//! Viewport clamp: keep settled labels readable at the viewport edge.
//!
//! The marker decides the direction. A marker inside the viewport pulls its
//! escaped label back flush against the edge it crossed. A marker outside the
//! viewport keeps its label just outside the edge nearest to it, so the label
//! does not drift onto the far side of the boundary.

use crate::types::{PtPx, SizePx, Viewport};

/// Clamp one label box (top-left `label`, size `size`) for a marker at
/// `anchor`. Returns the corrected top-left.
pub fn clamp_label(label: PtPx, anchor: PtPx, size: SizePx, viewport: &Viewport) -> PtPx {
    let nw = viewport.north_west;
    let se = viewport.south_east;
    let mut out = label;
    let mut is_edge = false;

    if anchor.x > nw.x && out.x < nw.x {
        out.x = nw.x;
        is_edge = true;
    } else if anchor.x < se.x && out.x > se.x - size.w {
        out.x = se.x - size.w;
        is_edge = true;
    }

    if anchor.y > nw.y && out.y < nw.y {
        out.y = nw.y;
        is_edge = true;
    } else if anchor.y < se.y && out.y > se.y - size.h {
        out.y = se.y - size.h;
        is_edge = true;
    }

    if !is_edge {
        if anchor.x < nw.x && out.x > nw.x - size.w {
            out.x = nw.x - size.w;
        } else if anchor.x > se.x && out.x < se.x {
            out.x = se.x;
        }

        if anchor.y < nw.y && out.y > nw.y - size.h {
            out.y = nw.y - size.h;
        } else if anchor.y > se.y && out.y < se.y {
            out.y = se.y;
        }
    }

    out
}

/// Clamp every label in place. Returns how many labels moved.
pub fn clamp_all(labels: &mut [PtPx], anchors: &[PtPx], sizes: &[SizePx], viewport: &Viewport) -> usize {
    let mut moved = 0;
    for ((label, &anchor), &size) in labels.iter_mut().zip(anchors).zip(sizes) {
        let clamped = clamp_label(*label, anchor, size, viewport);
        if clamped != *label {
            *label = clamped;
            moved += 1;
        }
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Px, Size, px};

    fn viewport() -> Viewport {
        Viewport::new(px(0.0, 0.0), px(800.0, 600.0))
    }

    fn label_size() -> SizePx {
        Size::new(Px(60.0), Px(20.0))
    }

    // ==================== marker inside ====================

    #[test]
    fn inside_label_is_untouched() {
        let label = px(100.0, 100.0);
        assert_eq!(clamp_label(label, px(120.0, 90.0), label_size(), &viewport()), label);
    }

    #[test]
    fn escaped_west_snaps_to_west_edge() {
        let out = clamp_label(px(-200.0, 100.0), px(10.0, 90.0), label_size(), &viewport());
        assert_eq!(out, px(0.0, 100.0));
    }

    #[test]
    fn escaped_east_snaps_flush_inside() {
        let out = clamp_label(px(900.0, 100.0), px(790.0, 90.0), label_size(), &viewport());
        assert_eq!(out, px(740.0, 100.0));
    }

    #[test]
    fn escaped_north_and_south() {
        let out = clamp_label(px(100.0, -50.0), px(100.0, 5.0), label_size(), &viewport());
        assert_eq!(out, px(100.0, 0.0));
        let out = clamp_label(px(100.0, 650.0), px(100.0, 595.0), label_size(), &viewport());
        assert_eq!(out, px(100.0, 580.0));
    }

    #[test]
    fn escaped_corner_clamps_both_axes() {
        let out = clamp_label(px(-500.0, 900.0), px(3.0, 597.0), label_size(), &viewport());
        assert_eq!(out, px(0.0, 580.0));
    }

    #[test]
    fn fully_outside_label_intersects_viewport_after_clamp() {
        let vp = viewport();
        let size = label_size();
        let anchor = px(400.0, 300.0);
        for label in [px(-1000.0, 300.0), px(5000.0, 300.0), px(400.0, -999.0), px(400.0, 4000.0)] {
            assert!(!(vp.overlaps_x(label, size) && vp.overlaps_y(label, size)));
            let out = clamp_label(label, anchor, size, &vp);
            assert!(vp.overlaps_x(out, size), "{out:?} misses x");
            assert!(vp.overlaps_y(out, size), "{out:?} misses y");
        }
    }

    // ==================== marker outside ====================

    #[test]
    fn marker_west_of_viewport_keeps_label_outside_west() {
        // Label has drifted inside; it goes back to sit just outside.
        let out = clamp_label(px(30.0, 100.0), px(-40.0, 100.0), label_size(), &viewport());
        assert_eq!(out, px(-60.0, 100.0));
    }

    #[test]
    fn marker_east_of_viewport_keeps_label_outside_east() {
        let out = clamp_label(px(700.0, 100.0), px(850.0, 100.0), label_size(), &viewport());
        assert_eq!(out, px(800.0, 100.0));
    }

    #[test]
    fn marker_north_and_south_of_viewport() {
        let out = clamp_label(px(100.0, 10.0), px(100.0, -30.0), label_size(), &viewport());
        assert_eq!(out, px(100.0, -20.0));
        let out = clamp_label(px(100.0, 500.0), px(100.0, 640.0), label_size(), &viewport());
        assert_eq!(out, px(100.0, 600.0));
    }

    #[test]
    fn edge_snap_suppresses_outside_placement() {
        // x is an inside-marker snap; the outside-marker y rule must not run.
        let out = clamp_label(px(-100.0, 10.0), px(50.0, -30.0), label_size(), &viewport());
        assert_eq!(out, px(0.0, 10.0));
    }

    #[test]
    fn clamp_all_counts_moves() {
        let mut labels = vec![px(10.0, 10.0), px(-90.0, 10.0)];
        let anchors = vec![px(20.0, 20.0), px(20.0, 20.0)];
        let sizes = vec![label_size(); 2];
        assert_eq!(clamp_all(&mut labels, &anchors, &sizes, &viewport()), 1);
        assert_eq!(labels[1], px(0.0, 10.0));
    }
}
