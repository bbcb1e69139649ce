//! Route geometry handed to rendering and export layers.
//!
//! The planner never draws or writes files; it only hands over the visited
//! coordinates in walking order. Encoding (GPX track points, canvas strokes)
//! happens at the boundary.

use serde::{Deserialize, Serialize};

use crate::point::Coordinate;

/// Visited coordinates in walking order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Midpoint of each segment, where the UI draws leg labels.
    pub fn segment_midpoints(&self) -> Vec<(f64, f64)> {
        self.points
            .windows(2)
            .map(|pair| {
                let (a0, b0) = pair[0].pair();
                let (a1, b1) = pair[1].pair();
                ((a0 + a1) / 2.0, (b0 + b1) / 2.0)
            })
            .collect()
    }
}
