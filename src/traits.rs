//! Core domain traits for the route planner.
//!
//! These are intentionally minimal. Apps with their own waypoint models
//! implement [`RoutePoint`] instead of converting into [`GeoPoint`].
//!
//! [`GeoPoint`]: crate::point::GeoPoint

use std::hash::Hash;

use crate::point::{Coordinate, CoordinateSpace, PointRole};

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A single stop offered to the planner.
pub trait RoutePoint {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Display label. Never used for cost.
    fn label(&self) -> &str;

    /// Resolved location, or `None` if upstream resolution failed
    /// (e.g. an unparseable grid reference).
    fn coordinate(&self) -> Option<Coordinate>;

    fn role(&self) -> PointRole;
}

/// Distance between two coordinates of a single coordinate space.
///
/// The matrix builder checks every point against [`DistanceMetric::space`]
/// before calling [`DistanceMetric::distance`], so implementations only see
/// coordinates from their own space.
pub trait DistanceMetric {
    fn space(&self) -> CoordinateSpace;

    /// Distance between two `(a, b)` pairs: `(x, y)` for planar space,
    /// `(lat, lon)` in degrees for geographic space.
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}
