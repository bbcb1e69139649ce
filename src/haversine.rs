//! Haversine great-circle metric for geographic points.
//!
//! Distances follow the sphere, not the footpath, so real walking
//! distances will come out somewhat longer.

use serde::{Deserialize, Serialize};

use crate::point::CoordinateSpace;
use crate::traits::DistanceMetric;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine-based distance metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HaversineMetric {
    /// Sphere radius; its unit is the unit of every distance produced.
    pub radius: f64,
}

impl Default for HaversineMetric {
    fn default() -> Self {
        Self::kilometres()
    }
}

impl HaversineMetric {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn kilometres() -> Self {
        Self::new(EARTH_RADIUS_KM)
    }

    pub fn metres() -> Self {
        Self::new(EARTH_RADIUS_M)
    }

    /// Central angle in radians between two `(lat, lon)` points in degrees.
    fn central_angle(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lon1) = from;
        let (lat2, lon2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lon = (lon2 - lon1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        // Rounding can push `a` marginally past 1 for antipodal points.
        let a = a.clamp(0.0, 1.0);

        2.0 * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

impl DistanceMetric for HaversineMetric {
    fn space(&self) -> CoordinateSpace {
        CoordinateSpace::Geographic
    }

    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        self.radius * Self::central_angle(from, to)
    }
}
