use kurbo::{Affine, Line, Point};

/// Rotation by `degrees` (clockwise on a y-down canvas) about `pivot`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub degrees: f64,
    pub pivot: Point,
}

impl Rotation {
    pub const NONE: Self = Self {
        degrees: 0.0,
        pivot: Point::ZERO,
    };

    pub const fn new(degrees: f64, pivot: Point) -> Self {
        Self { degrees, pivot }
    }

    pub fn affine(&self) -> Affine {
        Affine::rotate_about(self.degrees.to_radians(), self.pivot)
    }
}

/// Solved pose of one stroke for a single frame.
///
/// The line is drawn from `start` to `end` after applying `secondary` and
/// then `primary`, i.e. the secondary rotation happens in the stroke's own
/// frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeGeometry {
    pub primary: Rotation,
    pub secondary: Rotation,
    pub start: Point,
    pub end: Point,
    pub alpha: u8,
}

impl StrokeGeometry {
    pub fn line(&self) -> Line {
        Line::new(self.start, self.end)
    }

    /// Canvas transform for this stroke, excluding any whole-icon mirroring.
    pub fn transform(&self) -> Affine {
        self.primary.affine() * self.secondary.affine()
    }

    /// The line as it lands on the canvas.
    pub fn resolved(&self) -> Line {
        self.transform() * self.line()
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// All three strokes, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconGeometry {
    pub top: StrokeGeometry,
    pub middle: StrokeGeometry,
    pub bottom: StrokeGeometry,
}

impl IconGeometry {
    pub fn strokes(&self) -> [&StrokeGeometry; 3] {
        [&self.top, &self.middle, &self.bottom]
    }
}
