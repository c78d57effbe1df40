//! Force model: label/label repulsion and label/anchor attraction.

use glam::DVec2;

use super::geometry::{attraction, normalize, repulsion};

/// Net displacement of every label for one annealing step.
///
/// `positions[i]` is label `i`'s working coordinate and `anchors[i]` its
/// marker. Every ordered pair `(i, j)` contributes to `i`, so each pairwise
/// repulsion is counted from both sides. Coincident labels push each other
/// by zero.
pub fn displacements(positions: &[DVec2], anchors: &[DVec2], k: f64) -> Vec<DVec2> {
    debug_assert_eq!(positions.len(), anchors.len());

    let mut disp = vec![DVec2::ZERO; positions.len()];

    for (i, &v) in positions.iter().enumerate() {
        for (j, &u) in positions.iter().enumerate() {
            if i == j {
                continue;
            }
            let delta = v - u;
            let distance = delta.length();
            if distance == 0.0 {
                continue;
            }
            disp[i] += normalize(delta) * repulsion(distance, k);
        }
    }

    for (i, (&v, &anchor)) in positions.iter().zip(anchors).enumerate() {
        let delta = v - anchor;
        disp[i] -= normalize(delta) * attraction(delta.length(), k);
    }

    disp
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn label_on_its_anchor_feels_nothing_alone() {
        let d = displacements(&[dvec2(5.0, 5.0)], &[dvec2(5.0, 5.0)], 10.0);
        assert_eq!(d, vec![DVec2::ZERO]);
    }

    #[test]
    fn attraction_pulls_toward_anchor() {
        // distance 10, k 5 → magnitude 100 / 5 = 20 toward the anchor
        let d = displacements(&[dvec2(10.0, 0.0)], &[dvec2(0.0, 0.0)], 5.0);
        assert!(close(d[0], dvec2(-20.0, 0.0)));
    }

    #[test]
    fn repulsion_is_symmetric_and_double_counted() {
        // Two labels sitting on their own anchors 4 px apart, k = 2.
        let positions = [dvec2(0.0, 0.0), dvec2(4.0, 0.0)];
        let d = displacements(&positions, &positions, 2.0);
        // k² / d = 1, pushed apart along x.
        assert!(close(d[0], dvec2(-1.0, 0.0)));
        assert!(close(d[1], dvec2(1.0, 0.0)));
        assert!(close(d[0] + d[1], DVec2::ZERO));
    }

    #[test]
    fn coincident_labels_stay_finite() {
        let positions = [dvec2(3.0, 3.0), dvec2(3.0, 3.0), dvec2(3.0, 3.0)];
        let anchors = [dvec2(0.0, 0.0); 3];
        let d = displacements(&positions, &anchors, 7.0);
        assert!(d.iter().all(|v| v.is_finite()));
        // Only attraction remains, identical for all three.
        assert!(close(d[0], d[1]) && close(d[1], d[2]));
        assert!(d[0].x < 0.0 && d[0].y < 0.0);
    }

    #[test]
    fn empty_set() {
        assert!(displacements(&[], &[], 1.0).is_empty());
    }
}
