//! End-to-end run: grid → permutations → valid polygons → dedup → sort → orbits.

use super::cfg::{ConfigError, EnumerationCfg};
use super::dedup::EdgeSetDedup;
use super::enumerate::visit_k_permutations;
use super::order::sort_canonical;
use super::reduce::reduce_rotations;
use super::sequence::PolygonSequence;
use crate::lattice::Polygon;

/// Per-stage counts of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub admissible_points: usize,
    pub candidates: u64,
    pub valid: u64,
    pub distinct: usize,
    pub emitted: usize,
    pub orbits: usize,
}

/// Run the pipeline, or report why `cfg` cannot produce polygons.
pub fn try_enumerate_polygons(
    cfg: EnumerationCfg,
) -> Result<(PolygonSequence, RunStats), ConfigError> {
    cfg.validate()?;
    let grid = cfg.grid();
    let points = grid.points();
    let mut stats = RunStats {
        admissible_points: points.len(),
        ..RunStats::default()
    };

    let mut dedup = EdgeSetDedup::new();
    visit_k_permutations(&points, cfg.vertices, |tuple| {
        stats.candidates += 1;
        // Permutations never repeat a point.
        let polygon = Polygon::from_distinct(tuple.to_vec());
        if polygon.is_valid() {
            stats.valid += 1;
            dedup.offer(polygon);
        }
    });

    let mut distinct = dedup.into_vec();
    stats.distinct = distinct.len();
    sort_canonical(&mut distinct);

    let sequence = reduce_rotations(distinct, &grid.rotation());
    stats.emitted = sequence.len();
    stats.orbits = sequence.orbit_count();
    tracing::debug!(
        size = cfg.size,
        depth = cfg.depth,
        vertices = cfg.vertices,
        points = stats.admissible_points,
        candidates = stats.candidates,
        valid = stats.valid,
        distinct = stats.distinct,
        orbits = stats.orbits,
        "enumeration finished"
    );
    Ok((sequence, stats))
}

/// Run the pipeline; an unusable configuration yields an empty sequence.
pub fn enumerate_polygons(cfg: EnumerationCfg) -> PolygonSequence {
    enumerate_polygons_with_stats(cfg).0
}

/// As `enumerate_polygons`, also returning stage counts (all zero on rejection).
pub fn enumerate_polygons_with_stats(cfg: EnumerationCfg) -> (PolygonSequence, RunStats) {
    match try_enumerate_polygons(cfg) {
        Ok(out) => out,
        Err(err) => {
            tracing::warn!(?cfg, %err, "configuration rejected; returning empty sequence");
            (PolygonSequence::empty(), RunStats::default())
        }
    }
}
