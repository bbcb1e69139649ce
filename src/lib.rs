//! hike-route-planner core
//!
//! Orders a set of hiking stops into the shortest walking route between a
//! fixed start and end, optionally holding one stop to a position window.

pub mod error;
pub mod traits;
pub mod point;
pub mod haversine;
pub mod matrix;
pub mod route;
pub mod held_karp;
pub mod nearest_neighbor;
pub mod annotate;
pub mod polyline;
pub mod solver;

pub use error::{PlannerError, PlannerResult};
