//! Lattice geometry: points, sides, adjacent-side pairs and polygons.
//!
//! Purpose
//! - Exact-integer data model for polygons whose vertices sit on a square grid.
//! - Edge-set identity for `Polygon`: start vertex and winding do not matter.
//!
//! Conventions
//! - Points are `(row, column)`; rows grow downwards as on screen.
//! - Decisions (parallel, right angle, collinear, crossing) never use floats.
//! - Code cross-refs: `grid::GridRotation` (maps polygons), `search` (pipeline).

mod polygon;
mod types;

pub use polygon::{EdgeSet, Metrics, Polygon, PolygonError};
pub use types::{round_hundredths, AdjacentSides, Point, Side};
