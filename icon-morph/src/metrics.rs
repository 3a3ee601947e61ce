use crate::error::{MorphError, Result};

const BASE_SIZE: f64 = 40.0;
const BASE_ICON_WIDTH: f64 = 20.0;

/// Stroke thickness, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeWeight {
    Bold,
    Regular,
    Thin,
}

impl StrokeWeight {
    pub const fn units(self) -> f64 {
        match self {
            Self::Bold => 3.0,
            Self::Regular => 2.0,
            Self::Thin => 1.0,
        }
    }
}

/// Fixed layout of the icon in pixels, derived from the size of one layout
/// unit. The canvas is 40 x 40 units and the strokes span the middle 20.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub unit: f64,
    pub weight: StrokeWeight,
    pub width: u32,
    pub height: u32,
    pub icon_width: f64,
    pub stroke_width: f64,
    pub side_padding: f64,
    pub top_padding: f64,
}

impl Metrics {
    /// `unit` is the pixel size of one layout unit (density times scale).
    pub fn new(unit: f64, weight: StrokeWeight) -> Result<Self> {
        if !unit.is_finite() || unit <= 0.0 {
            return Err(MorphError::InvalidArgument(format!(
                "unit size must be positive and finite, got {unit}"
            )));
        }

        // Truncated like a pixel-aligned bounds rect.
        let width = (BASE_SIZE * unit) as u32;
        let height = (BASE_SIZE * unit) as u32;
        let icon_width = BASE_ICON_WIDTH * unit;

        Ok(Self {
            unit,
            weight,
            width,
            height,
            icon_width,
            stroke_width: weight.units() * unit,
            side_padding: (f64::from(width) - icon_width) / 2.0,
            top_padding: (f64::from(height) - 15.0 * unit) / 2.0,
        })
    }

    /// Horizontal canvas centre, on the integer pixel grid.
    pub fn center_x(&self) -> f64 {
        f64::from(self.width / 2)
    }

    /// Vertical canvas centre, on the integer pixel grid.
    pub fn center_y(&self) -> f64 {
        f64::from(self.height / 2)
    }

    /// `n` layout units in pixels.
    pub fn u(&self, n: f64) -> f64 {
        n * self.unit
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            unit: 1.0,
            weight: StrokeWeight::Regular,
            width: 40,
            height: 40,
            icon_width: 20.0,
            stroke_width: 2.0,
            side_padding: 10.0,
            top_padding: 12.5,
        }
    }
}
