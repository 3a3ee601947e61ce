use kurbo::Point;

use super::{ARROW_MID_ANGLE, CHECK_MIDDLE_ANGLE, Frame};
use crate::geometry::{Rotation, StrokeGeometry};
use crate::ratio::{alpha, remap};
use crate::shape::Transition;

pub(super) fn solve(f: &Frame<'_>) -> StrokeGeometry {
    let m = f.metrics;
    let r = f.ratio;
    let y = m.top_padding + f.u(7.5);
    let check_pivot_x = m.center_x() + f.u(3.5);

    let mut rotation = 0.0;
    let mut pivot = Point::new(m.center_x(), m.center_y());
    let mut start = Point::new(m.side_padding, y);
    let mut end = Point::new(f.width() - m.side_padding, y);
    let mut opacity = 255;

    match f.transition {
        Transition::StackArrow => {
            rotation = if f.forward {
                r * ARROW_MID_ANGLE
            } else {
                ARROW_MID_ANGLE + (1.0 - r) * ARROW_MID_ANGLE
            };
            end.x -= r * f.shorten(r) / 2.0;
        }

        Transition::StackCross => {
            let t = remap(r, 0.0, 0.9);
            end.x -= t * (end.x - start.x);
        }

        Transition::StackCheck => {
            rotation = r * CHECK_MIDDLE_ANGLE;
            start.x += r * f.u(5.5);
            end.x += r * f.u(1.0);
            pivot.x = check_pivot_x;
        }

        Transition::StackHidden => {
            let t = remap(r, 0.2, 0.8);
            start.x = (1.0 - t) * start.x + t * start.x / 1.5;
            end.x = (1.0 - t) * end.x + t * start.x;
        }

        Transition::ArrowCross => {
            let t = remap(r, 0.0, 0.6);
            start.x += f.u(2.0) + t * (end.x - start.x - f.u(2.0));
        }

        Transition::ArrowCheck => {
            rotation = if f.forward {
                r * CHECK_MIDDLE_ANGLE
            } else {
                CHECK_MIDDLE_ANGLE - CHECK_MIDDLE_ANGLE * (1.0 - r)
            };
            start.x += f.u(5.5) - (1.0 - r) * f.u(2.0);
            end.x += r * f.u(1.0);
            pivot.x = check_pivot_x;
        }

        Transition::ArrowHidden => {
            if f.forward {
                let slide = remap(r, 0.4, 0.9);
                let t = remap(r, 0.5, 0.9);
                start.x = (1.0 - slide) * (start.x + f.shorten(1.0) / 2.0)
                    + slide * (start.x - m.side_padding / 6.0);
                end.x = (1.0 - t) * end.x + t * start.x;
            } else {
                let slide = remap(r, 0.1, 1.0) * m.side_padding;
                let t = remap(r, 0.6, 1.0);
                end.x += slide / 2.0;
                start.x = (1.0 - t) * (start.x + slide / 4.0 + f.shorten(1.0) / 2.0) + t * end.x;
            }
        }

        Transition::CrossCheck => {
            opacity = alpha(r);
            rotation = r * CHECK_MIDDLE_ANGLE;
            start.x += r * f.u(5.5);
            end.x += r * f.u(1.0);
            pivot.x = check_pivot_x;
        }

        Transition::CrossHidden => {
            opacity = 0;
        }

        Transition::CheckHidden => {
            rotation = CHECK_MIDDLE_ANGLE;
            pivot.x = check_pivot_x;

            if f.forward {
                let t = remap(r, 0.3, 0.9);
                start.x += f.u(5.5);
                end.x = (1.0 - t) * (end.x + f.u(1.25)) + t * start.x;
            } else {
                let t = remap(r, 0.0, 0.7);
                end.x -= f.u(0.75);
                start.x = (1.0 - t) * (start.x + f.u(5.5)) + t * end.x;
            }
        }
    }

    StrokeGeometry {
        primary: Rotation::new(rotation, pivot),
        secondary: Rotation::NONE,
        start,
        end,
        alpha: opacity,
    }
}
