//! Lattice polygon: ordered vertices, cyclic sides, edge-set identity.
//!
//! Invariants:
//! - At least 3 pairwise distinct vertices.
//! - `sides[i] = (v[i], v[i+1 mod n])`, `adjacent[i] = (sides[i], sides[i+1 mod n])`.
//! - Equality and hashing use the undirected edge set only, so every starting
//!   vertex and both winding directions of one boundary compare equal.
//! - Metrics and validity are pure functions of the vertex list and are cached
//!   in `OnceCell`s on first access.

use std::cell::OnceCell;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::types::{AdjacentSides, Point, Side};

/// Errors from `Polygon::new`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    TooFewVertices { count: usize },
    RepeatedVertex { vertex: Point },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices, got {count}")
            }
            PolygonError::RepeatedVertex { vertex } => {
                write!(f, "vertex {vertex} appears more than once")
            }
        }
    }
}

impl std::error::Error for PolygonError {}

/// Undirected edge set, sorted by `(min, max)` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeSet(Vec<(Point, Point)>);

impl EdgeSet {
    fn from_sides(sides: &[Side]) -> Self {
        let mut edges: Vec<(Point, Point)> = sides.iter().map(Side::endpoints_sorted).collect();
        edges.sort_unstable();
        edges.dedup();
        EdgeSet(edges)
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    #[inline]
    pub fn contains(&self, side: &Side) -> bool {
        self.0.binary_search(&side.endpoints_sorted()).is_ok()
    }
}

/// Scalar shape metrics used for ordering and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metrics {
    /// `2 × area` from the shoelace sum (absolute value).
    pub twice_area: i64,
    pub right_angles: usize,
    /// Number of distinct side lengths after two-decimal rounding.
    pub distinct_sides: usize,
}

#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point>,
    sides: Vec<Side>,
    adjacent: Vec<AdjacentSides>,
    edges: EdgeSet,
    metrics: OnceCell<Metrics>,
    valid: OnceCell<bool>,
}

impl Polygon {
    /// Build from an ordered vertex list (the winding).
    pub fn new(vertices: Vec<Point>) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices {
                count: vertices.len(),
            });
        }
        let mut seen = BTreeSet::new();
        for &v in &vertices {
            if !seen.insert(v) {
                return Err(PolygonError::RepeatedVertex { vertex: v });
            }
        }
        Ok(Self::from_distinct(vertices))
    }

    /// Caller guarantees ≥ 3 pairwise distinct vertices.
    pub(crate) fn from_distinct(vertices: Vec<Point>) -> Self {
        let n = vertices.len();
        let sides: Vec<Side> = (0..n)
            .map(|i| Side::new(vertices[i], vertices[(i + 1) % n]))
            .collect();
        let adjacent = (0..n)
            .map(|i| AdjacentSides::new(sides[i], sides[(i + 1) % n]))
            .collect();
        let edges = EdgeSet::from_sides(&sides);
        Self {
            vertices,
            sides,
            adjacent,
            edges,
            metrics: OnceCell::new(),
            valid: OnceCell::new(),
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    #[inline]
    pub fn sides(&self) -> &[Side] {
        &self.sides
    }
    #[inline]
    pub fn adjacent_sides(&self) -> &[AdjacentSides] {
        &self.adjacent
    }
    #[inline]
    pub fn edge_set(&self) -> &EdgeSet {
        &self.edges
    }
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn metrics(&self) -> Metrics {
        *self.metrics.get_or_init(|| Metrics {
            twice_area: twice_area(&self.sides),
            right_angles: self.adjacent.iter().filter(|a| a.is_right_angle()).count(),
            distinct_sides: self
                .sides
                .iter()
                .map(Side::length_hundredths)
                .collect::<BTreeSet<_>>()
                .len(),
        })
    }
    #[inline]
    pub fn twice_area(&self) -> i64 {
        self.metrics().twice_area
    }
    /// Area for display (`twice_area / 2`).
    #[inline]
    pub fn area(&self) -> f64 {
        self.twice_area() as f64 / 2.0
    }
    #[inline]
    pub fn right_angles(&self) -> usize {
        self.metrics().right_angles
    }
    #[inline]
    pub fn distinct_sides(&self) -> usize {
        self.metrics().distinct_sides
    }
    /// Rounded side lengths in side order.
    pub fn side_lengths(&self) -> Vec<f64> {
        self.sides.iter().map(Side::length).collect()
    }

    /// Simple-polygon test.
    ///
    /// 1. No corner is a straight or reversing turn.
    /// 2. No two sides without a shared endpoint are collinear with each other
    ///    (the later side's start on the earlier side's line) or cross.
    pub fn is_valid(&self) -> bool {
        *self.valid.get_or_init(|| {
            if self.adjacent.iter().any(AdjacentSides::is_parallel) {
                return false;
            }
            let n = self.sides.len();
            for i in 0..n {
                let a = &self.sides[i];
                for b in &self.sides[(i + 1)..] {
                    if !b.is_non_adjacent_to(a) {
                        continue;
                    }
                    if a.projection_contains(b.start()) || a.intersects(b) {
                        return false;
                    }
                }
            }
            true
        })
    }

    /// Index of the first smallest vertex.
    pub fn lowest_vertex_offset(&self) -> usize {
        let mut best = 0;
        for (i, v) in self.vertices.iter().enumerate().skip(1) {
            if *v < self.vertices[best] {
                best = i;
            }
        }
        best
    }

    /// Vertices rotated to start at `lowest_vertex_offset`, winding kept.
    pub fn canonical_vertices(&self) -> impl Iterator<Item = &Point> + '_ {
        let n = self.vertices.len();
        let off = self.lowest_vertex_offset();
        (0..n).map(move |i| &self.vertices[(i + off) % n])
    }
}

/// Absolute shoelace sum over directed sides (column·row' − row·column').
fn twice_area(sides: &[Side]) -> i64 {
    sides
        .iter()
        .map(|s| s.start().col() * s.end().row() - s.start().row() * s.end().col())
        .sum::<i64>()
        .abs()
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}
impl Eq for Polygon {}

impl Hash for Polygon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.edges.hash(state);
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}
