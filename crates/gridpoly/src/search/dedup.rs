//! Edge-set deduplication keeping the first-seen representative.

use std::collections::HashSet;

use crate::lattice::{EdgeSet, Polygon};

#[derive(Debug, Default)]
pub struct EdgeSetDedup {
    seen: HashSet<EdgeSet>,
    kept: Vec<Polygon>,
}

impl EdgeSetDedup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `polygon` unless an edge-set-equal one was offered before.
    pub fn offer(&mut self, polygon: Polygon) -> bool {
        if self.seen.contains(polygon.edge_set()) {
            return false;
        }
        self.seen.insert(polygon.edge_set().clone());
        self.kept.push(polygon);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }

    /// Representatives in the order they were first offered.
    pub fn into_vec(self) -> Vec<Polygon> {
        self.kept
    }
}

/// Collapse edge-set-equal polygons, first occurrence wins.
pub fn dedup_by_edges<I>(polygons: I) -> Vec<Polygon>
where
    I: IntoIterator<Item = Polygon>,
{
    let mut dedup = EdgeSetDedup::new();
    for p in polygons {
        dedup.offer(p);
    }
    dedup.into_vec()
}
