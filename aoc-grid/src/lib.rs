//! 2D integer-vector utilities for grid and path puzzles.
//!
//! [`Vec2d`] uses screen coordinates: x grows to the right, y grows
//! downwards, so [`NORTH`] is negative y.

mod direction;
mod vec2d;

pub use direction::{EAST, LEFT, NORTH, RIGHT, SOUTH, WEST, motion};
pub use vec2d::Vec2d;
