use kurbo::{Affine, Line};
use ratatui::style::Color;

use crate::config::MorphConfig;
use crate::geometry::IconGeometry;
use crate::metrics::Metrics;

/// Everything a surface needs to stroke one line. Passed by value per draw;
/// nothing is shared between the three strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub alpha: u8,
    pub width: f64,
}

/// A surface that can stroke an anti-aliased straight line.
pub trait Painter {
    /// Draw `line` after mapping it through `transform`.
    fn stroke_line(&mut self, line: Line, transform: Affine, style: StrokeStyle);
}

/// Mirrors the icon's box horizontally.
pub fn mirror(metrics: &Metrics) -> Affine {
    Affine::new([-1.0, 0.0, 0.0, 1.0, f64::from(metrics.width), 0.0])
}

/// Strokes the three lines top to bottom. Invisible icons paint nothing; in
/// right-to-left mode one flip is applied around the whole icon.
pub fn paint(
    geometry: &IconGeometry,
    config: &MorphConfig,
    metrics: &Metrics,
    painter: &mut impl Painter,
) {
    if !config.visible {
        return;
    }

    let base = if config.rtl {
        mirror(metrics)
    } else {
        Affine::IDENTITY
    };

    for stroke in geometry.strokes() {
        let style = StrokeStyle {
            color: config.color,
            alpha: stroke.alpha,
            width: metrics.stroke_width,
        };

        painter.stroke_line(stroke.line(), base * stroke.transform(), style);
    }
}
