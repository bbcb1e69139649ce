//! Route planner entrypoint.
//!
//! Validates a request of caller points, builds the matrix, picks the exact
//! or heuristic solver, and annotates the result for display.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::annotate::{annotate, Normalization, RouteAnnotation};
use crate::error::{PlannerError, PlannerResult};
use crate::held_karp::{solve_exact_with_config, ExactSolverConfig, PositionConstraint, DEFAULT_MAX_EXACT_POINTS};
use crate::matrix::{build_distance_matrix, DistanceMatrix};
use crate::nearest_neighbor::solve_heuristic;
use crate::point::{Coordinate, PointRole};
use crate::polyline::Polyline;
use crate::route::SolvedRoute;
use crate::traits::{DistanceMetric, RoutePoint};

/// Default earliest position for a constrained stop: start, one waypoint,
/// then the constrained stop.
pub const DEFAULT_CONSTRAINED_MIN_POSITION: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Exact when the point count allows it, heuristic otherwise.
    #[default]
    Auto,
    Exact,
    Heuristic,
}

/// Solver that actually produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolverKind {
    Exact,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    pub strategy: Strategy,
    /// Largest point count handed to the exact solver.
    pub max_exact_points: usize,
    pub normalization: Normalization,
    /// Earliest 1-indexed position of the constrained point.
    pub constrained_min_position: usize,
    /// Latest 1-indexed position of the constrained point, if bounded.
    pub constrained_max_position: Option<usize>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            max_exact_points: DEFAULT_MAX_EXACT_POINTS,
            normalization: Normalization::FirstLeg,
            constrained_min_position: DEFAULT_CONSTRAINED_MIN_POSITION,
            constrained_max_position: None,
        }
    }
}

impl SolveOptions {
    pub fn exact_config(&self) -> ExactSolverConfig {
        ExactSolverConfig {
            max_points: self.max_exact_points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedStop<I> {
    pub id: I,
    pub label: String,
    /// Position of the point in the request.
    pub index: usize,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan<I> {
    pub stops: Vec<PlannedStop<I>>,
    pub route: SolvedRoute,
    pub annotation: RouteAnnotation,
    pub solver: SolverKind,
    /// False when a constrained point was routed as a plain waypoint.
    pub constraint_enforced: bool,
}

impl<I> RoutePlan<I> {
    pub fn polyline(&self) -> Polyline {
        Polyline::new(self.stops.iter().map(|stop| stop.coordinate).collect())
    }

    pub fn labels(&self) -> Vec<&str> {
        self.stops.iter().map(|stop| stop.label.as_str()).collect()
    }

    pub fn ids(&self) -> Vec<&I> {
        self.stops.iter().map(|stop| &stop.id).collect()
    }
}

/// Plan for one fixed position of the constrained point.
#[derive(Debug, Clone)]
pub struct PositionedPlan<I> {
    pub position: usize,
    pub plan: PlannerResult<RoutePlan<I>>,
}

#[derive(Debug, Clone, Copy)]
struct Roles {
    start: usize,
    end: usize,
    constrained: Option<usize>,
}

/// Orders `points` into the shortest route under `options`.
pub fn plan_route<P, M>(points: &[P], metric: &M, options: &SolveOptions) -> PlannerResult<RoutePlan<P::Id>>
where
    P: RoutePoint,
    M: DistanceMetric,
{
    let roles = classify(points)?;
    let matrix = build_distance_matrix(points, metric)?;

    let constraint = roles.constrained.map(|index| PositionConstraint {
        index,
        min_position: options.constrained_min_position,
        max_position: options.constrained_max_position,
    });

    plan_with_constraint(points, &matrix, roles, constraint, options)
}

/// Solves once for each exact `position` of the constrained point, in
/// parallel. Results come back in the order of `positions`.
///
/// Always uses the exact solver, so each plan honours its position.
pub fn plan_for_each_position<P, M>(
    points: &[P],
    metric: &M,
    options: &SolveOptions,
    positions: &[usize],
) -> PlannerResult<Vec<PositionedPlan<P::Id>>>
where
    P: RoutePoint + Sync,
    P::Id: Send,
    M: DistanceMetric,
{
    let roles = classify(points)?;
    let constrained = roles
        .constrained
        .ok_or_else(|| PlannerError::invalid_input("no constrained point to position"))?;
    let matrix = build_distance_matrix(points, metric)?;

    let exact = SolveOptions {
        strategy: Strategy::Exact,
        ..options.clone()
    };

    let plans = positions
        .par_iter()
        .map(|&position| PositionedPlan {
            position,
            plan: plan_with_constraint(
                points,
                &matrix,
                roles,
                Some(PositionConstraint::exactly(constrained, position)),
                &exact,
            ),
        })
        .collect();

    Ok(plans)
}

fn plan_with_constraint<P>(
    points: &[P],
    matrix: &DistanceMatrix,
    roles: Roles,
    constraint: Option<PositionConstraint>,
    options: &SolveOptions,
) -> PlannerResult<RoutePlan<P::Id>>
where
    P: RoutePoint,
{
    let n = matrix.len();
    let config = options.exact_config();

    let solver = match options.strategy {
        Strategy::Auto if n <= config.effective_limit() => SolverKind::Exact,
        Strategy::Auto | Strategy::Heuristic => SolverKind::Heuristic,
        Strategy::Exact => SolverKind::Exact,
    };

    let route = match solver {
        SolverKind::Exact => solve_exact_with_config(matrix, roles.start, roles.end, constraint, &config)?,
        SolverKind::Heuristic => {
            if constraint.is_some() {
                warn!(points = n, "heuristic route ignores the constrained point's position");
            }
            let route = solve_heuristic(matrix, roles.start, roles.end)?;
            SolvedRoute::new(route.path, matrix, roles.constrained)
        }
    };

    let annotation = annotate(&route.path, matrix, options.normalization)?;

    let stops = route
        .path
        .iter()
        .map(|&index| -> PlannerResult<PlannedStop<P::Id>> {
            let point = &points[index];
            let coordinate = point.coordinate().ok_or_else(|| {
                PlannerError::invalid_input(format!("point '{}' has no resolved coordinate", point.label()))
            })?;
            Ok(PlannedStop {
                id: point.id().clone(),
                label: point.label().to_string(),
                index,
                coordinate,
            })
        })
        .collect::<PlannerResult<Vec<_>>>()?;

    info!(points = n, solver = ?solver, cost = route.cost, "planned route");

    Ok(RoutePlan {
        stops,
        route,
        annotation,
        solver,
        constraint_enforced: constraint.is_none() || solver == SolverKind::Exact,
    })
}

fn classify<P: RoutePoint>(points: &[P]) -> PlannerResult<Roles> {
    if points.len() < 2 {
        return Err(PlannerError::invalid_input(format!(
            "need at least 2 points, got {}",
            points.len()
        )));
    }

    let mut seen = HashSet::new();
    let mut starts = Vec::new();
    let mut ends = Vec::new();
    let mut constrained = Vec::new();

    for (index, point) in points.iter().enumerate() {
        if !seen.insert(point.id()) {
            return Err(PlannerError::invalid_input(format!(
                "duplicate point id at '{}'",
                point.label()
            )));
        }
        match point.role() {
            PointRole::Start => starts.push(index),
            PointRole::End => ends.push(index),
            PointRole::Constrained => constrained.push(index),
            PointRole::Waypoint => {}
        }
    }

    let start = match starts.as_slice() {
        [start] => *start,
        _ => {
            return Err(PlannerError::invalid_input(format!(
                "expected exactly one start point, got {}",
                starts.len()
            )));
        }
    };
    let end = match ends.as_slice() {
        [end] => *end,
        _ => {
            return Err(PlannerError::invalid_input(format!(
                "expected exactly one end point, got {}",
                ends.len()
            )));
        }
    };
    if constrained.len() > 1 {
        return Err(PlannerError::invalid_input(format!(
            "at most one constrained point is supported, got {}",
            constrained.len()
        )));
    }

    Ok(Roles {
        start,
        end,
        constrained: constrained.first().copied(),
    })
}
