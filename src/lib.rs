//! Perfect maze generation over rectangular and polar cell lattices
//!
//! A perfect maze is a spanning tree over a cell space: exactly one path
//! joins any two cells. The carver walks an abstract topology with a
//! randomized depth-first search, opening one wall per tree edge, then
//! punches an entrance through the innermost boundary and an exit through
//! the outermost. Rendering is left to callers, which consume the finished
//! maze's wall state and per-cell geometry read-only.

#![forbid(unsafe_code)]

/// Randomized depth-first carving and the finished maze aggregate
pub mod carve;
/// Per-cell geometric descriptors for downstream rendering
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Cell lattices and their adjacency models
pub mod topology;

pub use io::error::{MazeError, Result};
