//! Exact Held-Karp solver for fixed start/end Hamiltonian paths.
//!
//! State `(subset, last)` holds the cheapest way to leave the start, visit
//! exactly `subset`, and stand on `last`. Subsets are processed in ascending
//! numeric order, which always visits a subset before any of its supersets.
//! Time is O(2^n * n^2) and memory O(2^n * n), so inputs are capped.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PlannerError, PlannerResult};
use crate::matrix::DistanceMatrix;
use crate::route::SolvedRoute;

/// Default cap on the number of points the exact solver accepts.
pub const DEFAULT_MAX_EXACT_POINTS: usize = 20;

/// Largest point count the DP tables are ever sized for, whatever the
/// configuration says. Tables take about 9 * n * 2^n bytes.
pub const HARD_MAX_EXACT_POINTS: usize = 25;

const NO_PARENT: u8 = u8::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactSolverConfig {
    pub max_points: usize,
}

impl Default for ExactSolverConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_EXACT_POINTS,
        }
    }
}

impl ExactSolverConfig {
    /// Limit actually enforced: the configured cap, bounded by
    /// [`HARD_MAX_EXACT_POINTS`].
    pub fn effective_limit(&self) -> usize {
        self.max_points.min(HARD_MAX_EXACT_POINTS)
    }
}

/// Keeps one index inside a window of 1-indexed path positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionConstraint {
    pub index: usize,
    pub min_position: usize,
    pub max_position: Option<usize>,
}

impl PositionConstraint {
    pub fn at_least(index: usize, min_position: usize) -> Self {
        Self {
            index,
            min_position,
            max_position: None,
        }
    }

    pub fn exactly(index: usize, position: usize) -> Self {
        Self {
            index,
            min_position: position,
            max_position: Some(position),
        }
    }

    pub fn allows(&self, position: usize) -> bool {
        position >= self.min_position && self.max_position.is_none_or(|max| position <= max)
    }
}

/// Solves with [`ExactSolverConfig::default`].
pub fn solve_exact(
    matrix: &DistanceMatrix,
    start: usize,
    end: usize,
    constraint: Option<PositionConstraint>,
) -> PlannerResult<SolvedRoute> {
    solve_exact_with_config(matrix, start, end, constraint, &ExactSolverConfig::default())
}

/// Minimum-cost path from `start` to `end` through every index exactly once.
///
/// Fails with `NoFeasiblePath` rather than return a path that breaks the
/// constraint or walks an infinite leg.
pub fn solve_exact_with_config(
    matrix: &DistanceMatrix,
    start: usize,
    end: usize,
    constraint: Option<PositionConstraint>,
    config: &ExactSolverConfig,
) -> PlannerResult<SolvedRoute> {
    let n = matrix.len();
    validate(n, start, end, constraint, config)?;

    debug!(points = n, start, end, ?constraint, "exact solve");

    if n == 2 {
        if !matrix.get(start, end).is_finite() {
            return Err(PlannerError::no_feasible_path("start and end are not connected"));
        }
        return Ok(SolvedRoute::new(vec![start, end], matrix, constraint.map(|c| c.index)));
    }

    let limit = config.effective_limit();
    let (states, table_len) = 1usize
        .checked_shl(n as u32)
        .and_then(|states| states.checked_mul(n).map(|len| (states, len)))
        .ok_or(PlannerError::InputTooLarge { points: n, limit })?;
    let full = states - 1;
    let start_bit = 1usize << start;

    let mut cost = vec![f64::INFINITY; table_len];
    let mut parent = vec![NO_PARENT; table_len];
    cost[start_bit * n + start] = 0.0;

    for subset in start_bit..states {
        if subset & start_bit == 0 {
            continue;
        }

        for last in 0..n {
            if subset & (1 << last) == 0 {
                continue;
            }
            let current = cost[subset * n + last];
            if !current.is_finite() {
                continue;
            }

            for next in 0..n {
                let bit = 1usize << next;
                if subset & bit != 0 {
                    continue;
                }
                let next_subset = subset | bit;

                // The end may only be entered as the final step.
                if next == end && next_subset != full {
                    continue;
                }
                if let Some(c) = constraint {
                    if next == c.index && !c.allows(next_subset.count_ones() as usize) {
                        continue;
                    }
                }

                let leg = matrix.get(last, next);
                if !leg.is_finite() {
                    continue;
                }

                let candidate = current + leg;
                let slot = next_subset * n + next;
                if candidate < cost[slot] {
                    cost[slot] = candidate;
                    parent[slot] = last as u8;
                }
            }
        }
    }

    if !cost[full * n + end].is_finite() {
        warn!(points = n, ?constraint, "no feasible path");
        return Err(PlannerError::no_feasible_path(match constraint {
            Some(c) => format!(
                "index {} cannot be placed within positions {}..={} of {}",
                c.index,
                c.min_position,
                c.max_position.unwrap_or(n),
                n
            ),
            None => "every complete path uses an unwalkable leg".to_string(),
        }));
    }

    let path = reconstruct(&parent, n, start, end)?;
    let route = SolvedRoute::new(path, matrix, constraint.map(|c| c.index));

    debug!(cost = route.cost, stops = route.path.len(), "exact solve done");

    Ok(route)
}

fn validate(
    n: usize,
    start: usize,
    end: usize,
    constraint: Option<PositionConstraint>,
    config: &ExactSolverConfig,
) -> PlannerResult<()> {
    if n < 2 {
        return Err(PlannerError::invalid_input(format!("need at least 2 points, got {}", n)));
    }

    let limit = config.effective_limit();
    if n > limit {
        return Err(PlannerError::InputTooLarge { points: n, limit });
    }

    if start >= n || end >= n {
        return Err(PlannerError::invalid_input(format!(
            "start {} or end {} out of range for {} points",
            start, end, n
        )));
    }
    if start == end {
        return Err(PlannerError::invalid_input("start and end must differ"));
    }

    if let Some(c) = constraint {
        if c.index >= n {
            return Err(PlannerError::invalid_input(format!(
                "constrained index {} out of range for {} points",
                c.index, n
            )));
        }
        if c.max_position.is_some_and(|max| max < c.min_position) {
            return Err(PlannerError::no_feasible_path(format!(
                "empty position window {}..={:?}",
                c.min_position, c.max_position
            )));
        }
        if c.min_position > n {
            return Err(PlannerError::no_feasible_path(format!(
                "minimum position {} exceeds the {} points in the route",
                c.min_position, n
            )));
        }
        if c.index == start && !c.allows(1) {
            return Err(PlannerError::no_feasible_path("the start is always at position 1"));
        }
        if c.index == end && !c.allows(n) {
            return Err(PlannerError::no_feasible_path(format!(
                "the end is always at position {}",
                n
            )));
        }
    }

    Ok(())
}

fn reconstruct(parent: &[u8], n: usize, start: usize, end: usize) -> PlannerResult<Vec<usize>> {
    let mut path = Vec::with_capacity(n);
    let mut subset = (1usize << n) - 1;
    let mut node = end;

    loop {
        path.push(node);
        if node == start {
            break;
        }

        let prev = parent[subset * n + node];
        if prev == NO_PARENT || path.len() >= n + 1 {
            return Err(PlannerError::no_feasible_path("predecessor chain is broken"));
        }
        subset &= !(1usize << node);
        node = prev as usize;
    }

    path.reverse();
    Ok(path)
}
