//! Randomized depth-first carving and the finished maze aggregate

/// Explicit-stack randomized depth-first carver
pub mod carver;
/// Immutable carved maze handed to callers and renderers
pub mod maze;

pub use carver::{Carver, generate_grid, generate_ring};
pub use maze::Maze;
