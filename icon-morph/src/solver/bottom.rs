use kurbo::Point;

use super::{
    ARROW_BOTTOM_ANGLE, ARROW_TOP_ANGLE, CHECK_BOTTOM_ANGLE, CROSS_BOTTOM_ANGLE,
    CROSS_FLIP_ANGLE, Frame,
};
use crate::geometry::{Rotation, StrokeGeometry};
use crate::ratio::remap;
use crate::shape::Transition;

/// Rest angle of the long check stroke.
const CHECK_ANGLE: f64 = CHECK_BOTTOM_ANGLE + ARROW_TOP_ANGLE;

pub(super) fn solve(f: &Frame<'_>) -> StrokeGeometry {
    let m = f.metrics;
    let r = f.ratio;
    let width = f.width();
    let height = f.height();
    let y = height - m.top_padding - f.u(2.0);
    let center = Point::new(m.center_x(), m.center_y());
    let cross_pivot = Point::new(m.side_padding + f.u(4.0), height - m.top_padding - f.u(3.0));
    let check_pivot = Point::new(center.x + f.u(3.0), center.y - f.u(3.0));

    let mut rotation = 0.0;
    let mut pivot = Point::ZERO;
    let mut flip = 0.0;
    let mut start = Point::new(m.side_padding, y);
    let mut end = Point::new(width - m.side_padding, y);

    match f.transition {
        Transition::StackArrow => {
            rotation = if f.forward {
                ARROW_TOP_ANGLE * r
            } else {
                ARROW_TOP_ANGLE + (1.0 - r) * ARROW_BOTTOM_ANGLE
            };
            pivot = center;
            end.x = width - m.side_padding - f.shorten(r);
            start.x = m.side_padding + f.u(3.0) * r;
        }

        Transition::StackCross => {
            rotation = CROSS_BOTTOM_ANGLE * r;
            pivot = cross_pivot;
            start.x += f.u(3.0) * r;
        }

        Transition::StackCheck => {
            rotation = r * CHECK_ANGLE;
            pivot = Point::new(center.x + f.u(3.0) * r, center.y - f.u(3.0) * r);
            start.x += f.u(8.0) * r;
            end.x -= f.shorten(r);
        }

        Transition::StackHidden => {
            let t = if f.forward {
                remap(r, 0.4, 0.9)
            } else {
                remap(r, 0.0, 0.6)
            };
            start.x = (1.0 - t) * start.x + t * start.x / 1.5;
            end.x = (1.0 - t) * end.x + t * start.x;
        }

        Transition::ArrowCross => {
            // Ends just short of a full turn so the flip lands on the cross.
            rotation = ARROW_TOP_ANGLE + (360.0 + CROSS_BOTTOM_ANGLE - ARROW_TOP_ANGLE) * r;
            flip = -CROSS_FLIP_ANGLE * r;
            pivot = Point::new(
                center.x + (cross_pivot.x - center.x) * r,
                center.y + (center.y - m.top_padding - f.u(3.0)) * r,
            );
            end.x -= f.shorten(r);
            start.x += f.u(3.0);
        }

        Transition::ArrowCheck => {
            rotation = ARROW_TOP_ANGLE + r * CHECK_BOTTOM_ANGLE;
            pivot = Point::new(center.x + f.u(3.0) * r, center.y - f.u(3.0) * r);
            end.x -= f.shorten(1.0);
            start.x += f.u(3.0) + f.u(5.0) * r;
        }

        Transition::ArrowHidden => {
            rotation = ARROW_TOP_ANGLE;
            pivot = center;
            let slide = if f.forward {
                0.0
            } else {
                remap(r, 0.1, 1.0) * m.side_padding / 8.0
            };
            start.y -= slide;
            end.y -= slide;
            end.x = width - m.side_padding - f.shorten(1.0) - slide;

            let t = if f.forward {
                remap(r, 0.3, 0.8)
            } else {
                remap(r, 0.1, 0.6)
            };
            start.x = (1.0 - t) * (m.side_padding - slide + f.u(3.0)) + t * (end.x + f.u(2.0));
            start.x = start.x.min(end.x);
        }

        Transition::CrossCheck => {
            flip = -CROSS_FLIP_ANGLE * (1.0 - r);
            rotation = CROSS_BOTTOM_ANGLE + (CHECK_ANGLE - CROSS_BOTTOM_ANGLE) * r;
            pivot = Point::new(
                cross_pivot.x + (center.x + f.u(3.0) - cross_pivot.x) * r,
                cross_pivot.y + (m.top_padding + center.y - height) * r,
            );
            start.x += f.u(8.0) - f.u(5.0) * (1.0 - r);
            end.x -= f.shorten(1.0 - r);
        }

        Transition::CrossHidden => {
            rotation = CROSS_BOTTOM_ANGLE;
            flip = -CROSS_FLIP_ANGLE;
            pivot = cross_pivot;

            if f.forward {
                let t = remap(r, 0.0, 0.6);
                start.x += f.u(3.0);
                end.x = (1.0 - t) * end.x + t * start.x;
            } else {
                let t = remap(r, 0.3, 1.0);
                start.x = (1.0 - t) * (start.x + f.u(3.0)) + t * end.x;
            }
        }

        Transition::CheckHidden => {
            rotation = CHECK_ANGLE;
            pivot = check_pivot;

            if f.forward {
                let t = remap(r, 0.0, 0.3);
                end.x -= f.shorten(1.0) + f.u(2.0);
                start.x = (1.0 - t) * (start.x + f.u(8.0)) + t * end.x;
            } else {
                let t = remap(r, 0.7, 1.0);
                start.x += f.u(8.0);
                end.x = (1.0 - t) * (end.x - f.shorten(1.0)) + t * start.x;
            }
        }
    }

    StrokeGeometry {
        primary: Rotation::new(rotation, pivot),
        secondary: Rotation::new(flip, Point::new(m.center_x() + f.u(1.5), y)),
        start,
        end,
        alpha: 255,
    }
}
