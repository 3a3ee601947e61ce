use kurbo::{Affine, Line};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{self, Canvas, Context};
use ratatui::widgets::{Block, Widget};

use crate::color;
use crate::config::MorphConfig;
use crate::driver::MorphDriver;
use crate::geometry::IconGeometry;
use crate::metrics::Metrics;
use crate::render::{self, Painter, StrokeStyle};

/// Shorter lines are skipped: flat caps leave nothing to draw.
const MIN_LENGTH: f64 = 1e-6;

/// Strokes onto a ratatui canvas whose bounds are the icon's pixel box.
/// The canvas y axis points up, so lines are flipped on the way in.
pub struct CanvasPainter<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,
    background: Color,
}

impl<'a, 'b> CanvasPainter<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>, metrics: &Metrics, background: Color) -> Self {
        Self {
            ctx,
            height: f64::from(metrics.height),
            background,
        }
    }
}

impl Painter for CanvasPainter<'_, '_> {
    fn stroke_line(&mut self, line: Line, transform: Affine, style: StrokeStyle) {
        let line = transform * line;

        if (line.p1 - line.p0).hypot() < MIN_LENGTH {
            return;
        }

        let Some(color) = color::with_alpha(style.color, style.alpha, self.background) else {
            return;
        };

        self.ctx.draw(&canvas::Line::new(
            line.p0.x,
            self.height - line.p0.y,
            line.p1.x,
            self.height - line.p1.y,
            color,
        ));
    }
}

/// Widget drawing the icon's current frame.
pub struct IconCanvas<'a> {
    geometry: IconGeometry,
    config: &'a MorphConfig,
    metrics: &'a Metrics,
    background: Color,
    marker: Marker,
    block: Option<Block<'a>>,
}

impl<'a> IconCanvas<'a> {
    pub fn new(driver: &'a MorphDriver) -> Self {
        Self {
            geometry: driver.compute_geometry(),
            config: driver.config(),
            metrics: driver.metrics(),
            background: Color::Reset,
            marker: Marker::Braille,
            block: None,
        }
    }

    /// Faded strokes blend toward this colour.
    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for IconCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Self {
            geometry,
            config,
            metrics,
            background,
            marker,
            block,
        } = self;

        let mut canvas = Canvas::default()
            .marker(marker)
            .background_color(background)
            .x_bounds([0.0, f64::from(metrics.width)])
            .y_bounds([0.0, f64::from(metrics.height)])
            .paint(move |ctx| {
                let mut painter = CanvasPainter::new(ctx, metrics, background);
                render::paint(&geometry, config, metrics, &mut painter);
            });

        if let Some(block) = block {
            canvas = canvas.block(block);
        }

        canvas.render(area, buf);
    }
}
