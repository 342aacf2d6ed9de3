#![doc = include_str!("../README.md")]

mod error;
mod labeled;
mod rect;
mod r#type;
pub mod xkdtree;

pub use error::{Result, XkdTreeError};
pub use labeled::{LabeledPoint, LabeledPoint2D};
pub use r#type::{Coordinate, Point2D};
pub use rect::Rectangle2D;

#[cfg(test)]
pub(crate) mod test;
