//! The finished, immutable output sequence.

use std::ops::Range;

use crate::lattice::Polygon;

/// Ordered polygons with rotational orbits stored as contiguous runs.
///
/// Invariants:
/// - `orbit_starts` is strictly increasing, starts at 0 when non-empty, and every
///   start is `< polygons.len()`.
#[derive(Clone, Debug, Default)]
pub struct PolygonSequence {
    polygons: Vec<Polygon>,
    orbit_starts: Vec<usize>,
}

impl PolygonSequence {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(polygons: Vec<Polygon>, orbit_starts: Vec<usize>) -> Self {
        debug_assert!(polygons.is_empty() || orbit_starts.first() == Some(&0));
        debug_assert!(orbit_starts.windows(2).all(|w| w[0] < w[1]));
        Self {
            polygons,
            orbit_starts,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }
    #[inline]
    pub fn as_slice(&self) -> &[Polygon] {
        &self.polygons
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    #[inline]
    pub fn orbit_count(&self) -> usize {
        self.orbit_starts.len()
    }

    /// Index range of orbit `k`.
    pub fn orbit_range(&self, k: usize) -> Option<Range<usize>> {
        let start = *self.orbit_starts.get(k)?;
        let end = self
            .orbit_starts
            .get(k + 1)
            .copied()
            .unwrap_or(self.polygons.len());
        Some(start..end)
    }

    /// Orbit number of the polygon at `index`.
    pub fn orbit_of(&self, index: usize) -> Option<usize> {
        if index >= self.polygons.len() {
            return None;
        }
        Some(match self.orbit_starts.binary_search(&index) {
            Ok(k) => k,
            Err(k) => k - 1,
        })
    }

    /// Contiguous orbit runs in output order.
    pub fn orbits(&self) -> impl Iterator<Item = &[Polygon]> + '_ {
        (0..self.orbit_starts.len()).filter_map(move |k| {
            self.orbit_range(k).map(|r| &self.polygons[r])
        })
    }

    pub fn into_vec(self) -> Vec<Polygon> {
        self.polygons
    }
}

impl<'a> IntoIterator for &'a PolygonSequence {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;
    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
