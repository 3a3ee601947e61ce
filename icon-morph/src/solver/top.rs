use kurbo::Point;

use super::{
    ARROW_BOTTOM_ANGLE, ARROW_TOP_ANGLE, CROSS_FLIP_ANGLE, CROSS_TOP_ANGLE, Frame,
};
use crate::geometry::{Rotation, StrokeGeometry};
use crate::ratio::{alpha, remap};
use crate::shape::Transition;

pub(super) fn solve(f: &Frame<'_>) -> StrokeGeometry {
    let m = f.metrics;
    let r = f.ratio;
    let y = m.top_padding + f.u(2.0);
    let center = Point::new(m.center_x(), m.center_y());
    let cross_pivot = Point::new(m.side_padding + f.u(4.0), m.top_padding + f.u(3.0));

    let mut rotation = 0.0;
    let mut pivot = Point::ZERO;
    let mut flip = 0.0;
    let mut start = Point::new(m.side_padding, y);
    let mut end = Point::new(f.width() - m.side_padding, y);
    let mut opacity = 255;

    match f.transition {
        Transition::StackArrow => {
            // Spin past a full turn on the way back so the stack is reached
            // from the other side.
            rotation = if f.forward {
                r * ARROW_BOTTOM_ANGLE
            } else {
                ARROW_BOTTOM_ANGLE + (1.0 - r) * ARROW_TOP_ANGLE
            };
            pivot = center;
            end.x -= f.shorten(r);
            start.x += f.u(3.0) * r;
        }

        Transition::StackCross => {
            rotation = CROSS_TOP_ANGLE * r;
            pivot = cross_pivot;
            start.x += f.u(3.0) * r;
        }

        Transition::StackCheck => {
            opacity = alpha(1.0 - r);
        }

        Transition::StackHidden => {
            let t = if f.forward {
                remap(r, 0.0, 0.6)
            } else {
                remap(r, 0.4, 0.9)
            };
            start.x = (1.0 - t) * start.x + t * start.x / 1.5;
            end.x = (1.0 - t) * end.x + t * start.x;
        }

        Transition::ArrowCross => {
            rotation = ARROW_BOTTOM_ANGLE + (CROSS_TOP_ANGLE - ARROW_BOTTOM_ANGLE) * r;
            flip = CROSS_FLIP_ANGLE * r;
            pivot = Point::new(
                center.x + (cross_pivot.x - center.x) * r,
                center.y + (cross_pivot.y - center.y) * r,
            );
            end.x -= f.shorten(r);
            start.x += f.u(3.0);
        }

        Transition::ArrowCheck => {
            opacity = alpha(1.0 - r);
            rotation = ARROW_BOTTOM_ANGLE;
            pivot = center;
            end.x -= f.shorten(1.0);
            start.x += f.u(3.0);
        }

        Transition::ArrowHidden => {
            rotation = ARROW_BOTTOM_ANGLE;
            pivot = center;
            let slide = if f.forward {
                0.0
            } else {
                remap(r, 0.1, 1.0) * m.side_padding / 8.0
            };
            start.y += slide;
            end.y += slide;
            end.x -= f.shorten(1.0) + slide;

            let t = remap(r, 0.0, if f.forward { 0.5 } else { 0.4 });
            start.x = (1.0 - t) * (start.x - slide + f.u(3.0)) + t * (end.x + f.u(2.0));
            start.x = start.x.min(end.x);
        }

        Transition::CrossCheck => {
            rotation = CROSS_TOP_ANGLE;
            flip = CROSS_FLIP_ANGLE;
            pivot = cross_pivot;
            end.x += f.u(3.0) - f.u(3.0) * (1.0 - r);
            start.x += f.u(3.0);
            opacity = alpha(1.0 - r);
        }

        Transition::CrossHidden => {
            rotation = CROSS_TOP_ANGLE;
            flip = CROSS_FLIP_ANGLE;
            pivot = cross_pivot;

            if f.forward {
                let t = remap(r, 0.4, 0.92);
                start.x += f.u(3.0);
                end.x = (1.0 - t) * end.x + t * start.x;
            } else {
                let t = remap(r, 0.0, 0.5);
                start.x = (1.0 - t) * (start.x + f.u(3.0)) + t * end.x;
            }
        }

        Transition::CheckHidden => {
            opacity = 0;
        }
    }

    StrokeGeometry {
        primary: Rotation::new(rotation, pivot),
        // Flips spin the line about its own centre.
        secondary: Rotation::new(flip, Point::new(m.center_x() + f.u(1.5), y)),
        start,
        end,
        alpha: opacity,
    }
}
