//! A mutable, bucketed k-d tree with sliding-midpoint splits.

#![warn(missing_docs)]

mod index;
mod node;
mod traversal;

pub use index::{XkdTree, DEFAULT_BUCKET_SIZE};
pub use traversal::NodeRef;
