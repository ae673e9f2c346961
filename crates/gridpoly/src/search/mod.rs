//! Polygon search: candidate enumeration, filtering, canonical order, orbits.
//!
//! Pipeline
//! - `grid::Grid::points` gives the admissible points (ascending).
//! - `enumerate` visits every ordered k-tuple of distinct points.
//! - Each tuple becomes a `Polygon`; invalid ones are dropped.
//! - `dedup` collapses edge-set-equal polygons (first discovery wins).
//! - `order` sorts by the canonical keys.
//! - `reduce` emits rotational orbits as contiguous runs.
//!
//! Everything runs synchronously on one thread and returns an immutable
//! `PolygonSequence`; consumers only read from it.

mod cfg;
mod dedup;
mod enumerate;
mod order;
mod pipeline;
mod reduce;
mod sequence;

pub use cfg::{ConfigError, EnumerationCfg};
pub use dedup::{dedup_by_edges, EdgeSetDedup};
pub use enumerate::{k_permutations, permutation_count, visit_k_permutations};
pub use order::{canonical_cmp, rotated_vertex_cmp, sort_canonical};
pub use pipeline::{
    enumerate_polygons, enumerate_polygons_with_stats, try_enumerate_polygons, RunStats,
};
pub use reduce::reduce_rotations;
pub use sequence::PolygonSequence;
