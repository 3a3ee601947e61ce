use std::sync::Arc;
use std::time::Instant;

use parking_lot::{Mutex, MutexGuard};

use crate::driver::MorphDriver;
use crate::error::Result;
use crate::geometry::IconGeometry;
use crate::shape::{IconShape, Transition};

/// Cloneable handle serialising every command on one driver.
///
/// Each call holds the lock for its whole duration, so a cancel-then-restart
/// inside `animate_to` is atomic. Completion listeners run under the lock and
/// must not call back into the same handle.
#[derive(Debug, Clone)]
pub struct SharedMorph {
    inner: Arc<Mutex<MorphDriver>>,
}

impl SharedMorph {
    pub fn new(driver: MorphDriver) -> Self {
        Self {
            inner: Arc::new(Mutex::new(driver)),
        }
    }

    /// For sequences of calls that must not interleave with other threads.
    pub fn lock(&self) -> MutexGuard<'_, MorphDriver> {
        self.inner.lock()
    }

    pub fn jump_to(&self, shape: IconShape) -> Result<()> {
        self.inner.lock().jump_to(shape)
    }

    pub fn animate_to(&self, shape: IconShape) -> Result<()> {
        self.inner.lock().animate_to(shape)
    }

    pub fn set_offset(&self, transition: Transition, offset: f64) -> Result<IconShape> {
        self.inner.lock().set_offset(transition, offset)
    }

    pub fn tick(&self, now: Instant) -> Option<f64> {
        self.inner.lock().tick(now)
    }

    pub fn current_shape(&self) -> IconShape {
        self.inner.lock().current_shape()
    }

    pub fn is_running(&self) -> bool {
        self.inner.lock().is_running()
    }

    pub fn compute_geometry(&self) -> IconGeometry {
        self.inner.lock().compute_geometry()
    }
}
