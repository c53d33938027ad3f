//! Pure domain types with minimal dependencies
//!
//! This module contains core types used throughout the engine: the shape
//! model, geometry helpers, and the display-to-native coordinate mapper.
//! Types here should have no raster or framework dependencies.

pub mod geometry;
pub mod shape;
pub mod viewport;

pub use geometry::*;
pub use shape::*;
pub use viewport::*;
