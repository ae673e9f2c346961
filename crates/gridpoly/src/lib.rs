//! Simple polygons on square lattice grids.
//!
//! Enumerates every simple polygon with `k` vertices drawn from the admissible
//! points of an `S×S` grid (optionally with interior rings removed), collapses
//! polygons that share an edge set, sorts them canonically and groups each
//! quarter-turn orbit into a contiguous run.
//!
//! Layout
//! - `lattice`: `Point`, `Side`, `AdjacentSides`, `Polygon` (exact integer predicates).
//! - `grid`: admissible point sets and the grid rotation.
//! - `search`: permutation enumeration, dedup, canonical order, rotation reduction.
//!
//! Quick start
//! ```
//! use gridpoly::prelude::*;
//!
//! let seq = enumerate_polygons(EnumerationCfg::new(2, 0, 3));
//! assert_eq!(seq.len(), 4);
//! assert_eq!(seq.orbit_count(), 1);
//! ```

pub mod grid;
pub mod lattice;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for callers.
pub mod prelude {
    pub use crate::grid::{Grid, GridRotation};
    pub use crate::lattice::{AdjacentSides, Metrics, Point, Polygon, PolygonError, Side};
    pub use crate::search::{
        enumerate_polygons, enumerate_polygons_with_stats, try_enumerate_polygons, ConfigError,
        EnumerationCfg, PolygonSequence, RunStats,
    };
}
