//! Pairwise distance matrices.

use serde::Serialize;
use tracing::debug;

use crate::error::{PlannerError, PlannerResult};
use crate::haversine::HaversineMetric;
use crate::point::CoordinateSpace;
use crate::traits::{DistanceMetric, RoutePoint};

/// Plain Euclidean distance in pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanarMetric;

impl DistanceMetric for PlanarMetric {
    fn space(&self) -> CoordinateSpace {
        CoordinateSpace::Planar
    }

    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        (to.0 - from.0).hypot(to.1 - from.1)
    }
}

/// The two metrics the planner ships with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Planar,
    GreatCircle(HaversineMetric),
}

impl Metric {
    /// Great-circle metric in kilometres.
    pub fn great_circle() -> Self {
        Self::GreatCircle(HaversineMetric::kilometres())
    }
}

impl DistanceMetric for Metric {
    fn space(&self) -> CoordinateSpace {
        match self {
            Self::Planar => PlanarMetric.space(),
            Self::GreatCircle(haversine) => haversine.space(),
        }
    }

    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        match self {
            Self::Planar => PlanarMetric.distance(from, to),
            Self::GreatCircle(haversine) => haversine.distance(from, to),
        }
    }
}

/// Symmetric `n x n` table of leg distances, indexed by input position.
///
/// Entries may be `+inf` to mark a leg that cannot be walked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Wraps a precomputed table after checking it is square, symmetric,
    /// zero on the diagonal, and free of NaN or negative entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> PlannerResult<Self> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(PlannerError::invalid_input(format!(
                    "matrix row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            if row[i] != 0.0 {
                return Err(PlannerError::invalid_input(format!(
                    "matrix diagonal at {} is {}, expected 0",
                    i, row[i]
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                if value.is_nan() || value < 0.0 {
                    return Err(PlannerError::invalid_input(format!(
                        "matrix entry [{}][{}] = {} is not a distance",
                        i, j, value
                    )));
                }
            }
        }

        for i in 0..n {
            for j in i + 1..n {
                if rows[i][j] != rows[j][i] {
                    return Err(PlannerError::invalid_input(format!(
                        "matrix is not symmetric at [{}][{}]",
                        i, j
                    )));
                }
            }
        }

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance from `from` to `to`. Panics if either index is out of range.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

/// Builds the distance matrix for `points` in input order.
///
/// Every point must carry a resolved, finite coordinate in the metric's
/// space; otherwise the whole batch is rejected.
pub fn build_distance_matrix<P, M>(points: &[P], metric: &M) -> PlannerResult<DistanceMatrix>
where
    P: RoutePoint,
    M: DistanceMetric,
{
    if points.len() < 2 {
        return Err(PlannerError::invalid_input(format!(
            "need at least 2 points, got {}",
            points.len()
        )));
    }

    let space = metric.space();
    let mut pairs = Vec::with_capacity(points.len());
    for point in points {
        let coordinate = point.coordinate().ok_or_else(|| {
            PlannerError::invalid_input(format!("point '{}' has no resolved coordinate", point.label()))
        })?;

        if coordinate.space() != space {
            return Err(PlannerError::invalid_input(format!(
                "point '{}' is in {:?} space but the metric expects {:?}",
                point.label(),
                coordinate.space(),
                space
            )));
        }

        let (a, b) = coordinate.pair();
        if !a.is_finite() || !b.is_finite() {
            return Err(PlannerError::invalid_input(format!(
                "point '{}' has a non-finite coordinate",
                point.label()
            )));
        }
        if space == CoordinateSpace::Geographic && !(-90.0..=90.0).contains(&a) {
            return Err(PlannerError::invalid_input(format!(
                "point '{}' has latitude {} outside [-90, 90]",
                point.label(),
                a
            )));
        }

        pairs.push((a, b));
    }

    let n = pairs.len();
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i + 1..n {
            let dist = metric.distance(pairs[i], pairs[j]);
            // `+inf` is reserved for legs marked unwalkable via `from_rows`.
            if !dist.is_finite() || dist < 0.0 {
                return Err(PlannerError::invalid_input(format!(
                    "distance between '{}' and '{}' is {}",
                    points[i].label(),
                    points[j].label(),
                    dist
                )));
            }
            rows[i][j] = dist;
            rows[j][i] = dist;
        }
    }

    debug!(points = n, space = ?space, "built distance matrix");

    Ok(DistanceMatrix { rows })
}
