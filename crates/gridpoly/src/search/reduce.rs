//! Rotation reduction: group each rotational orbit into one contiguous run.

use std::collections::HashMap;

use crate::grid::GridRotation;
use crate::lattice::{EdgeSet, Polygon};

use super::sequence::PolygonSequence;

/// Emit `sorted` orbit by orbit.
///
/// Takes the smallest remaining polygon, then keeps rotating the last emitted
/// polygon while its image is still remaining (edge-set equality); the image
/// itself is emitted, so a run shares its leader's winding. `sorted` must already
/// be in canonical order and free of edge-set duplicates.
pub fn reduce_rotations(sorted: Vec<Polygon>, rotation: &GridRotation) -> PolygonSequence {
    let position: HashMap<EdgeSet, usize> = sorted
        .iter()
        .enumerate()
        .map(|(i, p)| (p.edge_set().clone(), i))
        .collect();
    let mut remaining: Vec<Option<Polygon>> = sorted.into_iter().map(Some).collect();

    let mut out = Vec::with_capacity(remaining.len());
    let mut orbit_starts = Vec::new();
    for i in 0..remaining.len() {
        let Some(leader) = remaining[i].take() else {
            continue;
        };
        orbit_starts.push(out.len());
        let mut current = leader.rotated(rotation);
        out.push(leader);
        while let Some(&j) = position.get(current.edge_set()) {
            if remaining[j].take().is_none() {
                break;
            }
            let next = current.rotated(rotation);
            out.push(current);
            current = next;
        }
    }
    PolygonSequence::from_parts(out, orbit_starts)
}
