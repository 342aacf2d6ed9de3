use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum XkdTreeError {
    /// A point was rejected because it lies outside the tree's bounding box.
    ///
    /// Raised before the tree is touched, so a failed insert never leaves a partial batch behind.
    #[error("Attempt to insert a point outside bounding box: {label} ({x}, {y})")]
    OutOfBounds {
        /// Label of the offending point
        label: String,
        /// x coordinate of the offending point
        x: f64,
        /// y coordinate of the offending point
        y: f64,
    },

    /// The tree structure failed an internal consistency check.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, XkdTreeError>;
