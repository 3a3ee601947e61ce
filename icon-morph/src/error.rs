use thiserror::Error;

use crate::shape::IconShape;

/// Caller-input errors. Neither is transient, so nothing retries them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MorphError {
    #[error("morphing from {from:?} to {to:?} is not supported")]
    UnsupportedTransition { from: IconShape, to: IconShape },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T, E = MorphError> = std::result::Result<T, E>;
