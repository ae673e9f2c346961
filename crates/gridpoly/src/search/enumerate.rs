//! Ordered k-permutations of a point list.
//!
//! Traversal picks, at each depth, every unused point in list order, so tuples
//! come out in lexicographic order of their index sequences. With a sorted input
//! list this is also lexicographic in point order.

use crate::lattice::Point;

/// Call `visit` once per ordered `k`-tuple of distinct points from `points`.
pub fn visit_k_permutations<F>(points: &[Point], k: usize, visit: F)
where
    F: FnMut(&[Point]),
{
    if k > points.len() {
        return;
    }
    PermutationWalker {
        points,
        k,
        used: vec![false; points.len()],
        chosen: Vec::with_capacity(k),
        visit,
    }
    .recur();
}

/// Collecting form of `visit_k_permutations`.
pub fn k_permutations(points: &[Point], k: usize) -> Vec<Vec<Point>> {
    let mut out = Vec::new();
    visit_k_permutations(points, k, |tuple| out.push(tuple.to_vec()));
    out
}

/// `n·(n−1)·…·(n−k+1)`, or `None` on overflow.
pub fn permutation_count(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    (0..k).try_fold(1u64, |acc, i| acc.checked_mul((n - i) as u64))
}

struct PermutationWalker<'a, F> {
    points: &'a [Point],
    k: usize,
    used: Vec<bool>,
    chosen: Vec<Point>,
    visit: F,
}

impl<F: FnMut(&[Point])> PermutationWalker<'_, F> {
    fn recur(&mut self) {
        if self.chosen.len() == self.k {
            (self.visit)(&self.chosen);
            return;
        }
        for i in 0..self.points.len() {
            if self.used[i] {
                continue;
            }
            self.used[i] = true;
            self.chosen.push(self.points[i]);
            self.recur();
            self.chosen.pop();
            self.used[i] = false;
        }
    }
}
