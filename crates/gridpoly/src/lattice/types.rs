//! Lattice value types: points, sides and adjacent-side pairs.
//!
//! - `Point`: integer (row, column) with lexicographic order.
//! - `Side`: directed construction, undirected identity (a side equals its reverse).
//! - `AdjacentSides`: two consecutive sides of a polygon boundary.
//!
//! Every decision predicate here is exact integer arithmetic. The only float is
//! `Side::length`, used for the distinct-side metric and display.
//!
//! Vectors are `nalgebra::Vector2<i64>` with component 0 = row, component 1 = column.

use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

/// Lattice point `(row, column)`.
///
/// Ordered by row, then column (field order matters for the derived `Ord`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    row: i64,
    col: i64,
}

impl Point {
    #[inline]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
    #[inline]
    pub fn row(&self) -> i64 {
        self.row
    }
    #[inline]
    pub fn col(&self) -> i64 {
        self.col
    }
    /// Position vector `(row, col)`.
    #[inline]
    pub fn to_vector(self) -> Vector2<i64> {
        Vector2::new(self.row, self.col)
    }
    #[inline]
    pub fn from_vector(v: Vector2<i64>) -> Self {
        Self::new(v[0], v[1])
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r={},c={})", self.row, self.col)
    }
}

/// 2D cross product `a × b` (zero iff parallel).
#[inline]
pub(crate) fn cross(a: Vector2<i64>, b: Vector2<i64>) -> i64 {
    a[0] * b[1] - a[1] * b[0]
}

/// Round half-up to two decimals (`floor(100·d + 0.5) / 100`).
#[inline]
pub fn round_hundredths(d: f64) -> f64 {
    hundredths(d) as f64 / 100.0
}

/// `d` in hundredths, rounded half-up.
#[inline]
pub(crate) fn hundredths(d: f64) -> i64 {
    (100.0 * d + 0.5).floor() as i64
}

/// Polygon side between two lattice points.
///
/// Invariants:
/// - `start != end` for sides built by `Polygon` (vertices are distinct).
/// - Equality and hashing ignore direction: `Side(a, b) == Side(b, a)`.
#[derive(Clone, Copy, Debug)]
pub struct Side {
    start: Point,
    end: Point,
}

impl Side {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }
    #[inline]
    pub fn reversed(&self) -> Side {
        Side::new(self.end, self.start)
    }

    /// `end − start`; only meaningful for the directed construction.
    #[inline]
    pub fn direction(&self) -> Vector2<i64> {
        self.end.to_vector() - self.start.to_vector()
    }

    /// Endpoints as `(min, max)` in point order; identifies the undirected side.
    #[inline]
    pub fn endpoints_sorted(&self) -> (Point, Point) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    /// Euclidean length rounded half-up to two decimals.
    pub fn length(&self) -> f64 {
        round_hundredths(self.exact_length())
    }

    /// Rounded length in hundredths; the key used for distinct-length counting.
    #[inline]
    pub(crate) fn length_hundredths(&self) -> i64 {
        hundredths(self.exact_length())
    }

    #[inline]
    fn exact_length(&self) -> f64 {
        let d = self.direction();
        let (dr, dc) = (d[0] as f64, d[1] as f64);
        (dr * dr + dc * dc).sqrt()
    }

    /// True iff the two sides have four pairwise distinct endpoints.
    pub fn is_non_adjacent_to(&self, other: &Side) -> bool {
        let ends = [self.start, self.end, other.start, other.end];
        (0..ends.len()).all(|i| ((i + 1)..ends.len()).all(|j| ends[i] != ends[j]))
    }

    /// True iff `p` lies on the infinite line through this side.
    #[inline]
    pub fn projection_contains(&self, p: Point) -> bool {
        let d = self.direction();
        d[0] * (p.col - self.start.col) == (p.row - self.start.row) * d[1]
    }

    /// Closed segment intersection by the integer discriminant test.
    ///
    /// With x = column and y = row, `disc` is the cross term of the two lines; the
    /// line parameters are `dA/disc` and `dB/disc`, and the segments meet iff both
    /// lie in `[0, 1]`. Parallel (disc = 0) sides never intersect here; collinear
    /// overlap is `projection_contains`' job.
    pub fn intersects(&self, other: &Side) -> bool {
        let (x1a, y1a) = (self.start.col, self.start.row);
        let (x2a, y2a) = (self.end.col, self.end.row);
        let (x1b, y1b) = (other.start.col, other.start.row);
        let (x2b, y2b) = (other.end.col, other.end.row);

        let disc = (x2b - x1b) * (y1a - y2a) - (x1a - x2a) * (y2b - y1b);
        if disc == 0 {
            return false;
        }
        let d_a = (y1b - y2b) * (x1a - x1b) + (x2b - x1b) * (y1a - y1b);
        let d_b = (y1a - y2a) * (x1a - x1b) + (x2a - x1a) * (y1a - y1b);

        let within = |d: i64| {
            if disc > 0 {
                (0..=disc).contains(&d)
            } else {
                (disc..=0).contains(&d)
            }
        };
        within(d_a) && within(d_b)
    }
}

impl PartialEq for Side {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints_sorted() == other.endpoints_sorted()
    }
}
impl Eq for Side {}

impl Hash for Side {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints_sorted().hash(state);
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)
    }
}

/// Consecutive sides of a boundary: `first.end() == second.start()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdjacentSides {
    first: Side,
    second: Side,
}

impl AdjacentSides {
    #[inline]
    pub fn new(first: Side, second: Side) -> Self {
        Self { first, second }
    }
    #[inline]
    pub fn first(&self) -> Side {
        self.first
    }
    #[inline]
    pub fn second(&self) -> Side {
        self.second
    }
    /// Shared vertex.
    #[inline]
    pub fn corner(&self) -> Point {
        self.first.end
    }

    /// Directions are parallel (a straight or reversing turn).
    #[inline]
    pub fn is_parallel(&self) -> bool {
        cross(self.first.direction(), self.second.direction()) == 0
    }

    #[inline]
    pub fn is_right_angle(&self) -> bool {
        self.first.direction().dot(&self.second.direction()) == 0
    }
}

impl fmt::Display for AdjacentSides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(r: i64, c: i64) -> Point {
        Point::new(r, c)
    }

    #[test]
    fn point_order_is_row_then_column() {
        assert!(p(0, 5) < p(1, 0));
        assert!(p(1, 0) < p(1, 2));
        assert_eq!(p(2, 3), Point::from((2, 3)));
        assert_eq!(p(3, 5) - p(1, 1), p(2, 4));
        assert_eq!(p(1, 2).to_string(), "(r=1,c=2)");
    }

    #[test]
    fn length_rounds_half_up() {
        assert_eq!(Side::new(p(0, 0), p(1, 1)).length(), 1.41);
        assert_eq!(Side::new(p(0, 0), p(1, 2)).length(), 2.24);
        assert_eq!(Side::new(p(0, 0), p(0, 3)).length(), 3.0);
        assert_eq!(round_hundredths(0.125), 0.13);
        let s = Side::new(p(4, 1), p(0, 4));
        assert_eq!(s.length(), s.reversed().length());
    }

    #[test]
    fn adjacent_parallel_and_right_angle() {
        let a = Side::new(p(0, 0), p(0, 1));
        let straight = AdjacentSides::new(a, Side::new(p(0, 1), p(0, 3)));
        let back = AdjacentSides::new(a, Side::new(p(0, 1), p(0, 0)));
        let corner = AdjacentSides::new(a, Side::new(p(0, 1), p(2, 1)));
        let slant = AdjacentSides::new(a, Side::new(p(0, 1), p(1, 2)));
        assert!(straight.is_parallel() && back.is_parallel());
        assert!(!corner.is_parallel() && corner.is_right_angle());
        assert!(!slant.is_parallel() && !slant.is_right_angle());
        assert_eq!(corner.corner(), p(0, 1));
    }
}
