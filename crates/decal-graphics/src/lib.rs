//! Pure math/data for geometry and transforms in Decal
//!
//! This crate contains the geometry primitives and the transform layer
//! description shared by the input and scene-graph crates. It carries no
//! dependencies and does no rendering of its own.

mod geometry;
mod layer;

pub use geometry::*;
pub use layer::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size, Vector};
    pub use crate::layer::GraphicsLayer;
}
