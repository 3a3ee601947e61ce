/// Maps normalised time `[0, 1]` to normalised progress `[0, 1]`.
pub type Easing = fn(f64) -> f64;

pub fn linear(t: f64) -> f64 {
    t
}

pub fn ease_in(t: f64) -> f64 {
    t * t
}

pub fn ease_out(t: f64) -> f64 {
    t * (2.0 - t)
}

pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Fast start, long settle: `1 - (1 - t)^(2 * factor)` with factor 3.
pub fn decelerate(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(6)
}

/// Material "standard" curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
pub fn fast_out_slow_in(t: f64) -> f64 {
    CubicBezier::new(0.4, 0.0, 0.2, 1.0).at(t)
}

/// Material "decelerate" curve, `cubic-bezier(0, 0, 0.2, 1)`.
pub fn linear_out_slow_in(t: f64) -> f64 {
    CubicBezier::new(0.0, 0.0, 0.2, 1.0).at(t)
}

/// Material "accelerate" curve, `cubic-bezier(0.4, 0, 1, 1)`.
pub fn fast_out_linear_in(t: f64) -> f64 {
    CubicBezier::new(0.4, 0.0, 1.0, 1.0).at(t)
}

/// Timing curve through (0,0) and (1,1) with two control points, as in
/// CSS `cubic-bezier()`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn at(self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        component(self.param_for(x), self.y1, self.y2)
    }

    /// Newton steps on the x component, bisection when the slope flattens.
    fn param_for(self, x: f64) -> f64 {
        let mut s = x;

        for _ in 0..8 {
            let residual = component(s, self.x1, self.x2) - x;
            if residual.abs() < 1e-9 {
                return s;
            }

            let slope = slope(s, self.x1, self.x2);
            if slope.abs() < 1e-9 {
                break;
            }

            s = (s - residual / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        for _ in 0..40 {
            if component(s, self.x1, self.x2) < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }

        s
    }
}

fn component(s: f64, p1: f64, p2: f64) -> f64 {
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
}

fn slope(s: f64, p1: f64, p2: f64) -> f64 {
    let ms = 1.0 - s;
    3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}
