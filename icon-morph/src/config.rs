use std::time::Duration;

use ratatui::style::Color;

use crate::easing::{self, Easing};
use crate::error::Result;
use crate::metrics::{Metrics, StrokeWeight};
use crate::timeline::validate_duration;

/// Icon-wide settings. Geometry only depends on `weight` and `unit`.
#[derive(Debug, Clone, Copy)]
pub struct MorphConfig {
    pub weight: StrokeWeight,
    /// Pixel size of one layout unit.
    pub unit: f64,
    pub duration: Duration,
    pub easing: Easing,
    pub color: Color,
    pub visible: bool,
    /// Mirror the finished drawing for right-to-left layouts.
    pub rtl: bool,
}

impl MorphConfig {
    pub const BOLD: Self = Self::with_weight(StrokeWeight::Bold);
    pub const REGULAR: Self = Self::with_weight(StrokeWeight::Regular);
    pub const THIN: Self = Self::with_weight(StrokeWeight::Thin);

    const fn with_weight(weight: StrokeWeight) -> Self {
        Self {
            weight,
            unit: 1.0,
            duration: Duration::from_millis(800),
            easing: easing::decelerate,
            color: Color::White,
            visible: true,
            rtl: false,
        }
    }

    /// Same settings drawn at another stroke weight.
    pub fn reweighted(self, weight: StrokeWeight) -> Self {
        Self { weight, ..self }
    }

    pub fn metrics(&self) -> Result<Metrics> {
        Metrics::new(self.unit, self.weight)
    }

    pub fn validate(&self) -> Result<()> {
        validate_duration(self.duration)?;
        self.metrics().map(|_| ())
    }
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self::REGULAR
    }
}
