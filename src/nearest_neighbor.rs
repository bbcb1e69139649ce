//! Nearest-neighbor route approximation.
//!
//! Polynomial fallback for inputs above the exact solver's limit, or a fast
//! preview. No optimality guarantee, and position constraints are ignored:
//! a constrained point is routed like any other waypoint.

use tracing::debug;

use crate::error::{PlannerError, PlannerResult};
use crate::matrix::DistanceMatrix;
use crate::route::SolvedRoute;

/// Greedy route from `start` to `end`: always walk to the nearest unvisited
/// waypoint, ties going to the lowest index, then finish at `end`.
///
/// Only fails on malformed indices. Infinite legs are taken if nothing else
/// remains, leaving an infinite cost on the route.
pub fn solve_heuristic(matrix: &DistanceMatrix, start: usize, end: usize) -> PlannerResult<SolvedRoute> {
    let n = matrix.len();
    if start >= n || end >= n {
        return Err(PlannerError::invalid_input(format!(
            "start {} or end {} out of range for {} points",
            start, end, n
        )));
    }
    if start == end {
        return Err(PlannerError::invalid_input("start and end must differ"));
    }

    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start && i != end).collect();
    let mut path = Vec::with_capacity(n);
    path.push(start);

    let mut current = start;
    while !unvisited.is_empty() {
        let mut best: Option<(usize, f64)> = None;
        for (slot, &candidate) in unvisited.iter().enumerate() {
            let dist = matrix.get(current, candidate);
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((slot, dist));
            }
        }

        let Some((slot, _)) = best else { break };
        current = unvisited.remove(slot);
        path.push(current);
    }

    path.push(end);

    let route = SolvedRoute::new(path, matrix, None);
    debug!(points = n, cost = route.cost, "heuristic solve done");

    Ok(route)
}
