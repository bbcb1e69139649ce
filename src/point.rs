//! Route points and their coordinates.

use serde::{Deserialize, Serialize};

use crate::traits::{Id, RoutePoint};

/// Which coordinate space a location lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateSpace {
    /// Pixel space of a map image.
    Planar,
    /// Latitude/longitude in degrees.
    Geographic,
}

/// A resolved location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "snake_case")]
pub enum Coordinate {
    Planar { x: f64, y: f64 },
    Geographic { lat: f64, lon: f64 },
}

impl Coordinate {
    pub fn planar(x: f64, y: f64) -> Self {
        Self::Planar { x, y }
    }

    pub fn geographic(lat: f64, lon: f64) -> Self {
        Self::Geographic { lat, lon }
    }

    pub fn space(&self) -> CoordinateSpace {
        match self {
            Self::Planar { .. } => CoordinateSpace::Planar,
            Self::Geographic { .. } => CoordinateSpace::Geographic,
        }
    }

    /// The raw pair: `(x, y)` or `(lat, lon)`.
    pub fn pair(&self) -> (f64, f64) {
        match *self {
            Self::Planar { x, y } => (x, y),
            Self::Geographic { lat, lon } => (lat, lon),
        }
    }
}

/// Role of a point within one planning request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointRole {
    Start,
    End,
    Waypoint,
    /// Must land inside a position window, e.g. a lunch stop.
    Constrained,
}

/// Concrete route point with builder-style construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint<I> {
    pub id: I,
    pub label: String,
    pub coordinate: Option<Coordinate>,
    pub role: PointRole,
}

impl<I> GeoPoint<I> {
    pub fn new(id: I, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            coordinate: None,
            role: PointRole::Waypoint,
        }
    }

    pub fn at(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    pub fn planar(self, x: f64, y: f64) -> Self {
        self.at(Coordinate::planar(x, y))
    }

    pub fn geographic(self, lat: f64, lon: f64) -> Self {
        self.at(Coordinate::geographic(lat, lon))
    }

    pub fn with_role(mut self, role: PointRole) -> Self {
        self.role = role;
        self
    }

    pub fn start(self) -> Self {
        self.with_role(PointRole::Start)
    }

    pub fn end(self) -> Self {
        self.with_role(PointRole::End)
    }

    pub fn constrained(self) -> Self {
        self.with_role(PointRole::Constrained)
    }
}

impl<I: Id> RoutePoint for GeoPoint<I> {
    type Id = I;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    fn role(&self) -> PointRole {
        self.role
    }
}

/// Sequential id source owned by a single planning session.
#[derive(Debug, Clone, Default)]
pub struct PointIdGenerator {
    next: u32,
}

impl PointIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// A fresh waypoint with a default `WP<n>` label.
    pub fn waypoint(&mut self) -> GeoPoint<u32> {
        let id = self.next_id();
        GeoPoint::new(id, format!("WP{}", id + 1))
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u32 {
        self.next
    }
}
