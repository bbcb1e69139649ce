//! Solved routes.

use serde::Serialize;

use crate::matrix::DistanceMatrix;

/// Visiting order over matrix indices from start to end, with its cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolvedRoute {
    pub path: Vec<usize>,
    pub cost: f64,
    /// 1-indexed position of the constrained index, start counted as 1.
    pub constrained_position: Option<usize>,
}

impl SolvedRoute {
    pub(crate) fn new(path: Vec<usize>, matrix: &DistanceMatrix, constrained: Option<usize>) -> Self {
        let cost = path_cost(matrix, &path);
        let constrained_position =
            constrained.and_then(|index| path.iter().position(|&i| i == index).map(|p| p + 1));
        Self {
            path,
            cost,
            constrained_position,
        }
    }

    pub fn start(&self) -> Option<usize> {
        self.path.first().copied()
    }

    pub fn end(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// Number of legs walked.
    pub fn leg_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Sum of consecutive leg distances along `path`, summed from the start.
pub fn path_cost(matrix: &DistanceMatrix, path: &[usize]) -> f64 {
    path.windows(2)
        .fold(0.0, |total, leg| total + matrix.get(leg[0], leg[1]))
}
