//! Per-stroke geometry for every transition.
//!
//! Each stroke has its own solver module with one closed-form recipe per
//! [`Transition`]. The middle stroke only turns about the canvas centre (or
//! the check pivot); the top and bottom strokes also move their pivots and
//! flip about their own centres.

mod bottom;
mod middle;
mod top;

use crate::geometry::{IconGeometry, StrokeGeometry};
use crate::metrics::Metrics;
use crate::ratio::{self, is_forward, triangular_ratio};
use crate::shape::{IconShape, Transition};

const ARROW_MID_ANGLE: f64 = 180.0;
const ARROW_TOP_ANGLE: f64 = 135.0;
const ARROW_BOTTOM_ANGLE: f64 = 225.0;
const CROSS_TOP_ANGLE: f64 = 44.0;
const CROSS_BOTTOM_ANGLE: f64 = -44.0;
const CROSS_FLIP_ANGLE: f64 = 90.0;
const CHECK_MIDDLE_ANGLE: f64 = 135.0;
const CHECK_BOTTOM_ANGLE: f64 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stroke {
    Top,
    Middle,
    Bottom,
}

impl Stroke {
    pub const ALL: [Self; 3] = [Self::Top, Self::Middle, Self::Bottom];
}

/// Inputs shared by the three stroke solvers for one frame.
struct Frame<'a> {
    transition: Transition,
    /// Folded progress, see [`triangular_ratio`].
    ratio: f64,
    forward: bool,
    metrics: &'a Metrics,
}

impl Frame<'_> {
    fn u(&self, n: f64) -> f64 {
        self.metrics.u(n)
    }

    fn shorten(&self, ratio: f64) -> f64 {
        ratio::stroke_shortening(ratio, self.metrics.weight, self.transition, self.metrics)
    }

    fn width(&self) -> f64 {
        f64::from(self.metrics.width)
    }

    fn height(&self) -> f64 {
        f64::from(self.metrics.height)
    }
}

/// `progress` must already lie in `[0, 2]`.
pub fn solve(transition: Transition, progress: f64, metrics: &Metrics) -> IconGeometry {
    IconGeometry {
        top: solve_stroke(Stroke::Top, transition, progress, metrics),
        middle: solve_stroke(Stroke::Middle, transition, progress, metrics),
        bottom: solve_stroke(Stroke::Bottom, transition, progress, metrics),
    }
}

pub fn solve_stroke(
    stroke: Stroke,
    transition: Transition,
    progress: f64,
    metrics: &Metrics,
) -> StrokeGeometry {
    let frame = Frame {
        transition,
        ratio: triangular_ratio(progress),
        forward: is_forward(progress),
        metrics,
    };

    let mut geometry = match stroke {
        Stroke::Top => top::solve(&frame),
        Stroke::Middle => middle::solve(&frame),
        Stroke::Bottom => bottom::solve(&frame),
    };

    // A stroke squeezed to nothing on its way to hidden must not leave a
    // round-capped dot behind.
    if transition.involves(IconShape::Hidden) && geometry.is_collapsed() {
        geometry.alpha = 0;
    }

    geometry
}

#[cfg(test)]
mod tests {
    use kurbo::Line;

    use super::*;
    use crate::metrics::StrokeWeight;

    const EPSILON: f64 = 1e-7;
    const TOLERANCE: f64 = 1e-3;

    fn all_metrics() -> Vec<Metrics> {
        [StrokeWeight::Bold, StrokeWeight::Regular, StrokeWeight::Thin]
            .into_iter()
            .flat_map(|w| [1.0, 2.75].map(|unit| Metrics::new(unit, w).unwrap()))
            .collect()
    }

    /// Drawn length, counting transparent strokes as empty.
    fn visible_extent(g: &StrokeGeometry) -> f64 {
        if g.alpha == 0 {
            0.0
        } else {
            let line = g.resolved();
            (line.p1 - line.p0).hypot()
        }
    }

    fn lines_near(a: Line, b: Line) -> bool {
        a.p0.distance(b.p0) < TOLERANCE && a.p1.distance(b.p1) < TOLERANCE
    }

    #[test]
    fn continuous_across_midpoint() {
        for m in all_metrics() {
            for t in Transition::ALL {
                for s in Stroke::ALL {
                    let below = solve_stroke(s, t, 1.0 - EPSILON, &m);
                    let above = solve_stroke(s, t, 1.0 + EPSILON, &m);

                    let both_invisible =
                        visible_extent(&below) < TOLERANCE && visible_extent(&above) < TOLERANCE;
                    let converged = lines_near(below.resolved(), above.resolved())
                        && below.alpha.abs_diff(above.alpha) <= 1;

                    assert!(
                        both_invisible || converged,
                        "{t:?} {s:?} {:?}: {below:?} vs {above:?}",
                        m.weight
                    );
                }
            }
        }
    }

    #[test]
    fn geometry_is_finite_everywhere() {
        let m = Metrics::default();

        for t in Transition::ALL {
            for i in 0..=400 {
                let p = i as f64 / 200.0;
                let g = solve(t, p, &m);

                for stroke in g.strokes() {
                    let line = stroke.resolved();
                    assert!(
                        line.p0.is_finite() && line.p1.is_finite(),
                        "{t:?} p={p}: {stroke:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn solving_is_pure() {
        let m = Metrics::new(1.5, StrokeWeight::Thin).unwrap();

        for t in Transition::ALL {
            for p in [0.0, 0.3, 1.0, 1.4, 2.0] {
                let a = solve(t, p, &m);
                let b = solve(t, p, &m);
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn stack_pose_is_three_parallel_lines() {
        let m = Metrics::default();
        let g = solve(Transition::StackArrow, 0.0, &m);

        for stroke in g.strokes() {
            let line = stroke.resolved();
            assert!((line.p0.y - line.p1.y).abs() < 1e-9);
            assert!((line.p0.x - 10.0).abs() < 1e-9);
            assert!((line.p1.x - 30.0).abs() < 1e-9);
            assert_eq!(stroke.alpha, 255);
        }

        assert_eq!(g.top.start.y, 14.5);
        assert_eq!(g.middle.start.y, 20.0);
        assert_eq!(g.bottom.start.y, 25.5);
    }

    #[test]
    fn arrow_loops_back_to_stack() {
        let m = Metrics::default();
        let start = solve(Transition::StackArrow, 0.0, &m);
        let end = solve(Transition::StackArrow, 2.0, &m);

        assert_eq!(start.top.primary.degrees, 0.0);
        assert_eq!(end.top.primary.degrees, 360.0);
        assert_eq!(end.middle.primary.degrees, 360.0);
        assert_eq!(end.bottom.primary.degrees, 360.0);

        for (a, b) in start.strokes().into_iter().zip(end.strokes()) {
            assert!(lines_near(a.resolved(), b.resolved()), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn arrow_head_meets_at_the_tip() {
        let m = Metrics::new(1.0, StrokeWeight::Bold).unwrap();
        let g = solve(Transition::StackArrow, 1.0, &m);

        let top = g.top.resolved();
        let bottom = g.bottom.resolved();
        let shaft = g.middle.resolved();

        // The arrow points left: both head strokes end near the shaft's far
        // end, mirrored about the horizontal axis.
        let tip = shaft.p1;
        assert!(tip.x < m.center_x());
        assert!((top.p1.x - bottom.p1.x).abs() < 1e-9, "{top:?} {bottom:?}");
        assert!((top.p1.y + bottom.p1.y - 2.0 * m.center_y()).abs() < 1e-9);
        assert!((top.p1.x - tip.x).abs() < 1.0, "{top:?} {shaft:?}");
    }

    #[test]
    fn hidden_pose_draws_nothing() {
        let m = Metrics::default();

        for t in Transition::ALL.into_iter().filter(|t| t.second() == IconShape::Hidden) {
            let g = solve(t, 1.0, &m);

            for stroke in g.strokes() {
                assert_eq!(stroke.alpha, 0, "{t:?}: {stroke:?}");
            }
        }
    }

    #[test]
    fn check_fades_out_top_stroke() {
        let m = Metrics::default();

        assert_eq!(solve(Transition::StackCheck, 0.0, &m).top.alpha, 255);
        assert_eq!(solve(Transition::StackCheck, 1.0, &m).top.alpha, 0);
        assert_eq!(solve(Transition::CrossCheck, 0.0, &m).middle.alpha, 0);
        assert_eq!(solve(Transition::CrossCheck, 1.0, &m).middle.alpha, 255);
    }

    #[test]
    fn cross_strokes_flip_about_their_centre() {
        let m = Metrics::default();
        let g = solve(Transition::ArrowCross, 1.0, &m);

        assert_eq!(g.top.secondary.degrees, CROSS_FLIP_ANGLE);
        assert_eq!(g.bottom.secondary.degrees, -CROSS_FLIP_ANGLE);
        assert_eq!(g.middle.secondary.degrees, 0.0);
    }

    /// Resolved `[x0, y0, x1, y1]` of the top, middle and bottom strokes.
    type Lines = [[f64; 4]; 3];

    /// Poses at unit 1: transition, progress, lines and alphas.
    type Fixture = (Transition, f64, Lines, [u8; 3]);

    #[rustfmt::skip]
    const BOLD_POSES: &[Fixture] = &[
        (Transition::StackArrow, 1.0, [[21.0607, 28.8388, 11.1612, 18.9393], [30.0, 20.0, 11.5, 20.0], [21.0607, 11.1612, 11.1612, 21.0607]], [255, 255, 255]),
        (Transition::StackCross, 1.0, [[13.9753, 14.086, 26.2041, 25.8952], [10.0, 20.0, 10.0, 20.0], [13.9753, 25.914, 26.2041, 14.1048]], [255, 255, 255]),
        (Transition::StackCheck, 1.0, [[10.0, 14.5, 30.0, 14.5], [29.1569, 14.3431, 18.1967, 25.3033], [13.4541, 19.4749, 19.818, 25.8388]], [0, 255, 255]),
        (Transition::StackArrow, 0.5, [[28.3341, 14.2518, 21.8285, 29.9577], [20.0, 10.0, 20.0, 29.625], [11.6659, 14.2518, 18.1715, 29.9577]], [255, 255, 255]),
        (Transition::StackCross, 0.5, [[12.0566, 13.6363, 29.2095, 20.5665], [10.0, 20.0, 18.8889, 20.0], [12.0566, 26.3637, 29.2095, 19.4335]], [255, 255, 255]),
        (Transition::StackCheck, 0.5, [[10.0, 14.5, 30.0, 14.5], [19.3862, 10.0683, 26.1788, 26.4672], [11.8921, 22.097, 25.2884, 27.6459]], [127, 255, 255]),
        (Transition::StackHidden, 0.5, [[7.2222, 14.5, 11.0185, 14.5], [8.3333, 20.0, 19.1667, 20.0], [9.3333, 25.5, 25.8667, 25.5]], [255, 255, 255]),
        (Transition::ArrowCross, 0.5, [[24.6636, 23.1634, 9.1642, 23.2987], [27.0, 20.0, 30.0, 20.0], [24.6636, 16.8366, 9.1642, 16.7013]], [255, 255, 255]),
        (Transition::ArrowCheck, 0.5, [[21.0607, 28.8388, 11.1612, 18.9393], [20.0558, 11.6851, 26.1788, 26.4672], [14.5, 12.5, 14.5, 24.0]], [127, 255, 255]),
        (Transition::ArrowHidden, 0.5, [[11.1612, 18.9393, 11.1612, 18.9393], [10.8667, 20.0, 30.0, 20.0], [16.5352, 15.6866, 11.1612, 21.0607]], [0, 255, 255]),
        (Transition::CrossCheck, 0.5, [[25.9943, 13.8762, 13.1431, 27.184], [19.3862, 10.0683, 26.1788, 26.4672], [17.1789, 29.7315, 26.4512, 20.6196]], [127, 127, 255]),
        (Transition::CrossHidden, 0.5, [[25.9943, 13.8762, 16.4561, 23.7533], [10.0, 20.0, 30.0, 20.0], [25.9943, 26.1238, 24.0261, 24.0857]], [255, 0, 255]),
        (Transition::CheckHidden, 0.5, [[10.0, 14.5, 30.0, 14.5], [29.1569, 14.3431, 21.7322, 21.7678], [18.4038, 24.4246, 18.4038, 24.4246]], [0, 255, 0]),
    ];

    #[rustfmt::skip]
    const REGULAR_POSES: &[Fixture] = &[
        (Transition::StackArrow, 1.0, [[21.0607, 28.8388, 11.5147, 19.2929], [30.0, 20.0, 11.75, 20.0], [21.0607, 11.1612, 11.5147, 20.7071]], [255, 255, 255]),
        (Transition::StackCross, 1.0, [[13.9753, 14.086, 26.2041, 25.8952], [10.0, 20.0, 10.0, 20.0], [13.9753, 25.914, 26.2041, 14.1048]], [255, 255, 255]),
        (Transition::StackCheck, 1.0, [[10.0, 14.5, 30.0, 14.5], [29.1569, 14.3431, 18.1967, 25.3033], [13.4541, 19.4749, 19.4645, 25.4853]], [0, 255, 255]),
        (Transition::StackArrow, 0.5, [[28.3341, 14.2518, 21.9242, 29.7268], [20.0, 10.0, 20.0, 29.5625], [11.6659, 14.2518, 18.0758, 29.7268]], [255, 255, 255]),
        (Transition::StackCross, 0.5, [[12.0566, 13.6363, 29.2095, 20.5665], [10.0, 20.0, 18.8889, 20.0], [12.0566, 26.3637, 29.2095, 19.4335]], [255, 255, 255]),
        (Transition::StackCheck, 0.5, [[10.0, 14.5, 30.0, 14.5], [19.3862, 10.0683, 26.1788, 26.4672], [11.8921, 22.097, 25.0574, 27.5503]], [127, 255, 255]),
        (Transition::StackHidden, 0.5, [[7.2222, 14.5, 11.0185, 14.5], [8.3333, 20.0, 19.1667, 20.0], [9.3333, 25.5, 25.8667, 25.5]], [255, 255, 255]),
        (Transition::ArrowCross, 0.5, [[24.6636, 23.1634, 9.4142, 23.2965], [27.0, 20.0, 30.0, 20.0], [24.6636, 16.8366, 9.4142, 16.7035]], [255, 255, 255]),
        (Transition::ArrowCheck, 0.5, [[21.0607, 28.8388, 11.5147, 19.2929], [20.0558, 11.6851, 26.1788, 26.4672], [14.5, 12.5, 14.5, 23.5]], [127, 255, 255]),
        (Transition::ArrowHidden, 0.5, [[11.5147, 19.2929, 11.5147, 19.2929], [11.0667, 20.0, 30.0, 20.0], [16.6766, 15.5452, 11.5147, 20.7071]], [0, 255, 255]),
        (Transition::CrossCheck, 0.5, [[25.9943, 13.8762, 13.1431, 27.184], [19.3862, 10.0683, 26.1788, 26.4672], [17.1789, 29.7315, 26.2729, 20.7949]], [127, 127, 255]),
        (Transition::CrossHidden, 0.5, [[25.9943, 13.8762, 16.4561, 23.7533], [10.0, 20.0, 30.0, 20.0], [25.9943, 26.1238, 24.0261, 24.0857]], [255, 0, 255]),
        (Transition::CheckHidden, 0.5, [[10.0, 14.5, 30.0, 14.5], [29.1569, 14.3431, 21.7322, 21.7678], [18.0503, 24.0711, 18.0503, 24.0711]], [0, 255, 0]),
    ];

    #[rustfmt::skip]
    const THIN_POSES: &[Fixture] = &[
        (Transition::StackArrow, 1.0, [[21.0607, 28.8388, 11.8683, 19.6464], [30.0, 20.0, 12.0, 20.0], [21.0607, 11.1612, 11.8683, 20.3536]], [255, 255, 255]),
        (Transition::StackCross, 1.0, [[13.9753, 14.086, 26.2041, 25.8952], [10.0, 20.0, 10.0, 20.0], [13.9753, 25.914, 26.2041, 14.1048]], [255, 255, 255]),
        (Transition::StackCheck, 1.0, [[10.0, 14.5, 30.0, 14.5], [29.1569, 14.3431, 18.1967, 25.3033], [13.4541, 19.4749, 19.1109, 25.1317]], [0, 255, 255]),
        (Transition::StackArrow, 0.5, [[28.3341, 14.2518, 22.0199, 29.4958], [20.0, 10.0, 20.0, 29.5], [11.6659, 14.2518, 17.9801, 29.4958]], [255, 255, 255]),
        (Transition::StackCross, 0.5, [[12.0566, 13.6363, 29.2095, 20.5665], [10.0, 20.0, 18.8889, 20.0], [12.0566, 26.3637, 29.2095, 19.4335]], [255, 255, 255]),
        (Transition::StackCheck, 0.5, [[10.0, 14.5, 30.0, 14.5], [19.3862, 10.0683, 26.1788, 26.4672], [11.8921, 22.097, 24.8264, 27.4546]], [127, 255, 255]),
        (Transition::StackHidden, 0.5, [[7.2222, 14.5, 11.0185, 14.5], [8.3333, 20.0, 19.1667, 20.0], [9.3333, 25.5, 25.8667, 25.5]], [255, 255, 255]),
        (Transition::ArrowCross, 0.5, [[24.6636, 23.1634, 9.6642, 23.2943], [27.0, 20.0, 30.0, 20.0], [24.6636, 16.8366, 9.6642, 16.7057]], [255, 255, 255]),
        (Transition::ArrowCheck, 0.5, [[21.0607, 28.8388, 11.8683, 19.6464], [20.0558, 11.6851, 26.1788, 26.4672], [14.5, 12.5, 14.5, 23.0]], [127, 255, 255]),
        (Transition::ArrowHidden, 0.5, [[11.8683, 19.6464, 11.8683, 19.6464], [11.2667, 20.0, 30.0, 20.0], [16.818, 15.4038, 11.8683, 20.3536]], [0, 255, 255]),
        (Transition::CrossCheck, 0.5, [[25.9943, 13.8762, 13.1431, 27.184], [19.3862, 10.0683, 26.1788, 26.4672], [17.1789, 29.7315, 26.0946, 20.9701]], [127, 127, 255]),
        (Transition::CrossHidden, 0.5, [[25.9943, 13.8762, 16.4561, 23.7533], [10.0, 20.0, 30.0, 20.0], [25.9943, 26.1238, 24.0261, 24.0857]], [255, 0, 255]),
        (Transition::CheckHidden, 0.5, [[10.0, 14.5, 30.0, 14.5], [29.1569, 14.3431, 21.7322, 21.7678], [17.6967, 23.7175, 17.6967, 23.7175]], [0, 255, 0]),
    ];

    fn pose(transition: Transition, progress: f64, m: &Metrics) -> (Lines, [u8; 3]) {
        let g = solve(transition, progress, m);
        let [top, middle, bottom] = g.strokes().map(|s| {
            let line = s.resolved();
            [line.p0.x, line.p0.y, line.p1.x, line.p1.y]
        });

        ([top, middle, bottom], [g.top.alpha, g.middle.alpha, g.bottom.alpha])
    }

    fn assert_poses(weight: StrokeWeight, table: &[Fixture]) {
        let m = Metrics::new(1.0, weight).unwrap();

        for &(t, p, lines, alphas) in table {
            let (actual, actual_alphas) = pose(t, p, &m);

            for (i, (a, e)) in actual.iter().zip(&lines).enumerate() {
                let off = a.iter().zip(e).map(|(a, e)| (a - e).abs()).fold(0.0, f64::max);
                assert!(off < TOLERANCE, "{weight:?} {t:?}@{p} stroke {i}: {a:?} != {e:?}");
            }

            assert_eq!(actual_alphas, alphas, "{weight:?} {t:?}@{p}");
        }
    }

    #[test]
    fn bold_poses() {
        assert_poses(StrokeWeight::Bold, BOLD_POSES);
    }

    #[test]
    fn regular_poses() {
        assert_poses(StrokeWeight::Regular, REGULAR_POSES);
    }

    #[test]
    fn thin_poses() {
        assert_poses(StrokeWeight::Thin, THIN_POSES);
    }

    fn distance(a: [f64; 4], b: [f64; 4]) -> (f64, f64) {
        let d = |x0: f64, y0: f64, x1: f64, y1: f64| (x1 - x0).hypot(y1 - y0);
        (d(a[0], a[1], b[0], b[1]), d(a[2], a[3], b[2], b[3]))
    }

    #[test]
    fn cross_from_arrow_mirrors_cross_from_stack() {
        for weight in [StrokeWeight::Bold, StrokeWeight::Regular, StrokeWeight::Thin] {
            let m = Metrics::new(1.0, weight).unwrap();
            let (from_stack, _) = pose(Transition::StackCross, 1.0, &m);
            let (from_arrow, _) = pose(Transition::ArrowCross, 1.0, &m);
            let (to_check, _) = pose(Transition::CrossCheck, 0.0, &m);

            for i in [0, 2] {
                let (start, end) = distance(from_arrow[i], to_check[i]);
                assert!(start < TOLERANCE && end < TOLERANCE, "{weight:?} stroke {i}");
            }

            // Top and bottom swap diagonals: the top stroke falls to the
            // left instead of the right, like the stack cross's bottom one.
            let slope = |l: [f64; 4]| (l[3] - l[1]) / (l[2] - l[0]);
            assert!(slope(from_stack[0]) > 0.0 && slope(from_stack[2]) < 0.0);
            assert!(slope(from_arrow[0]) < 0.0 && slope(from_arrow[2]) > 0.0);
            assert!((slope(from_arrow[0]) - slope(from_stack[2])).abs() < 0.1);
        }
    }

    #[test]
    fn hidden_check_starts_off_the_check_pose() {
        for weight in [StrokeWeight::Bold, StrokeWeight::Regular, StrokeWeight::Thin] {
            let m = Metrics::new(1.0, weight).unwrap();
            let (check, _) = pose(Transition::StackCheck, 1.0, &m);
            let (hiding, _) = pose(Transition::CheckHidden, 0.0, &m);

            let (start, end) = distance(check[1], hiding[1]);
            assert!(start < TOLERANCE && (end - 0.25).abs() < TOLERANCE, "{weight:?} {end}");

            let (start, end) = distance(check[2], hiding[2]);
            assert!(start < TOLERANCE && (end - 2.0).abs() < TOLERANCE, "{weight:?} {end}");
        }
    }

    #[test]
    fn arrow_check_starts_with_a_shorter_shaft() {
        let m = Metrics::new(1.0, StrokeWeight::Bold).unwrap();
        let (arrow, _) = pose(Transition::StackArrow, 1.0, &m);
        let (checking, _) = pose(Transition::ArrowCheck, 0.0, &m);

        let (start, end) = distance(arrow[0], checking[0]);
        assert!(start < TOLERANCE && end < TOLERANCE);

        // Same shaft line, but it starts 2u further right and is drawn
        // in the opposite direction.
        let span = |l: [f64; 4]| (l[0].min(l[2]), l[0].max(l[2]));
        let (arrow_left, arrow_right) = span(arrow[1]);
        let (check_left, check_right) = span(checking[1]);
        assert!((arrow_right - check_right).abs() < TOLERANCE);
        assert!((check_left - arrow_left - 2.0).abs() < TOLERANCE, "{arrow:?} {checking:?}");
    }
}
