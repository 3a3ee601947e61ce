//! Three-stroke icon that morphs between a stack, an arrow, a cross, a check
//! and nothing.
//!
//! [`MorphDriver`] owns the state and turns jump / animate / scrub commands
//! into a transition plus a progress value in `[0, 2]`; [`solver::solve`]
//! maps that pair to the pose of each stroke. [`IconCanvas`] draws the
//! result on a ratatui canvas, and [`render::Painter`] lets any other surface
//! do the same.

pub mod canvas;
pub mod color;
pub mod config;
pub mod driver;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod metrics;
pub mod ratio;
pub mod render;
pub mod shape;
pub mod shared;
pub mod solver;
pub mod timeline;

pub use canvas::IconCanvas;
pub use config::MorphConfig;
pub use driver::{MorphDriver, MorphState};
pub use error::{MorphError, Result};
pub use geometry::{IconGeometry, StrokeGeometry};
pub use metrics::{Metrics, StrokeWeight};
pub use shape::{IconShape, Transition};
pub use shared::SharedMorph;
