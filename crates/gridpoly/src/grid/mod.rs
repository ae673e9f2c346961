//! Square lattice grids with optional interior removal, and their 90° rotation.
//!
//! Model
//! - An `S×S` grid has rows/columns `0..S`. With removal depth `D`, a point is
//!   kept iff it lies within `B = ⌊(S − D)/2⌋` of some border, leaving a square
//!   annulus. `D = 0` keeps the whole grid for even `S`; for odd `S` the centre
//!   point is still dropped.
//! - `GridRotation` is the quarter turn `(r, c) ↦ (c, S−1−r)` written as the
//!   integer affine map `M p + t`; the kept point set is closed under it.

mod rotation;

pub use rotation::GridRotation;

use crate::lattice::Point;

/// Grid geometry: side length and interior-removal depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub size: usize,
    pub depth: usize,
}

impl Grid {
    #[inline]
    pub fn new(size: usize, depth: usize) -> Self {
        Self { size, depth }
    }

    /// Ring width `B = ⌊(S − D)/2⌋`; zero when `D ≥ S` (nothing admissible).
    #[inline]
    pub fn boundary(&self) -> usize {
        self.size.saturating_sub(self.depth) / 2
    }

    /// Admissibility test; points outside the grid are never admissible.
    pub fn contains(&self, p: Point) -> bool {
        let s = self.size as i64;
        let (r, c) = (p.row(), p.col());
        if r < 0 || c < 0 || r >= s || c >= s {
            return false;
        }
        let b = self.boundary() as i64;
        r < b || s - 1 - r < b || c < b || s - 1 - c < b
    }

    /// Admissible points in ascending point order.
    pub fn points(&self) -> Vec<Point> {
        let s = self.size as i64;
        (0..s)
            .flat_map(|r| (0..s).map(move |c| Point::new(r, c)))
            .filter(|&p| self.contains(p))
            .collect()
    }

    #[inline]
    pub fn rotation(&self) -> GridRotation {
        GridRotation::quarter_turn(self.size)
    }
}

#[cfg(test)]
mod tests;
