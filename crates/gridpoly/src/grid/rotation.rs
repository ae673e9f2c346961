//! Quarter-turn rotation of a grid as an integer affine map.

use nalgebra::{Matrix2, Vector2};

use crate::lattice::{Point, Polygon};

/// Integer affine map `p ↦ M p + t` on `(row, col)` vectors.
///
/// Invariant: `det M = ±1`, so the map is a bijection on lattice points. Only
/// the constructors below exist, which keeps that true.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridRotation {
    m: Matrix2<i64>,
    t: Vector2<i64>,
}

impl GridRotation {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    /// 90° turn of an `size×size` grid: `(r, c) ↦ (c, size−1−r)`.
    pub fn quarter_turn(size: usize) -> Self {
        Self {
            m: Matrix2::new(0, 1, -1, 0),
            t: Vector2::new(0, size as i64 - 1),
        }
    }

    #[inline]
    pub fn matrix(&self) -> Matrix2<i64> {
        self.m
    }
    #[inline]
    pub fn offset(&self) -> Vector2<i64> {
        self.t
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::from_vector(self.m * p.to_vector() + self.t)
    }

    /// Composition `self ∘ other`.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    /// `self` applied `n` times.
    pub fn pow(&self, n: u32) -> Self {
        (0..n).fold(Self::identity(), |acc, _| self.compose(&acc))
    }
}

impl Polygon {
    /// Image under `rot`, vertex order kept.
    pub fn rotated(&self, rot: &GridRotation) -> Polygon {
        // `rot` is a bijection on points, so distinct vertices stay distinct.
        Polygon::from_distinct(self.vertices().iter().map(|&v| rot.apply(v)).collect())
    }
}
