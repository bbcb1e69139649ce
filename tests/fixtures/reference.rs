//! Reference implementations used to check the solvers.

use hike_route_planner::matrix::{build_distance_matrix, DistanceMatrix, Metric};
use hike_route_planner::point::GeoPoint;
use hike_route_planner::route::path_cost;

/// Deterministic xorshift64 generator so failures reproduce.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }

    pub fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Random planar instance of `n` points on a 1000x1000 canvas.
pub fn random_matrix(rng: &mut XorShift, n: usize) -> DistanceMatrix {
    let points: Vec<GeoPoint<usize>> = (0..n)
        .map(|i| GeoPoint::new(i, format!("P{}", i)).planar(rng.unit() * 1000.0, rng.unit() * 1000.0))
        .collect();
    build_distance_matrix(&points, &Metric::Planar).unwrap()
}

/// Cheapest path found by trying every ordering of the middle indices.
///
/// `constraint` is `(index, min_position)` with 1-indexed positions.
pub fn brute_force(
    matrix: &DistanceMatrix,
    start: usize,
    end: usize,
    constraint: Option<(usize, usize)>,
) -> Option<(Vec<usize>, f64)> {
    let mut middle: Vec<usize> = (0..matrix.len()).filter(|&i| i != start && i != end).collect();
    let mut best: Option<(Vec<usize>, f64)> = None;

    permute(&mut middle, 0, &mut |order: &[usize]| {
        let mut path = Vec::with_capacity(order.len() + 2);
        path.push(start);
        path.extend_from_slice(order);
        path.push(end);

        if let Some((index, min_position)) = constraint {
            let position = path.iter().position(|&i| i == index).map_or(0, |p| p + 1);
            if position < min_position {
                return;
            }
        }

        let cost = path_cost(matrix, &path);
        if best.as_ref().is_none_or(|(_, best_cost)| cost < *best_cost) {
            best = Some((path, cost));
        }
    });

    best
}

fn permute(items: &mut Vec<usize>, k: usize, visit: &mut dyn FnMut(&[usize])) {
    if k == items.len() {
        visit(items.as_slice());
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, visit);
        items.swap(k, i);
    }
}

/// Path starts at `start`, ends at `end`, and visits each index once.
pub fn assert_valid_path(path: &[usize], n: usize, start: usize, end: usize) {
    assert_eq!(path.len(), n, "Path should visit all {} points: {:?}", n, path);
    assert_eq!(path.first(), Some(&start), "Path should begin at start");
    assert_eq!(path.last(), Some(&end), "Path should finish at end");

    let mut seen = vec![false; n];
    for &index in path {
        assert!(!seen[index], "Index {} visited twice in {:?}", index, path);
        seen[index] = true;
    }
}
