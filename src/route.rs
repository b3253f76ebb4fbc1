//! Provider-agnostic route request and result types.

use serde::{Deserialize, Serialize};

use crate::polyline::Polyline;
use crate::traits::ProviderKind;

pub const METERS_PER_MILE: f64 = 1609.344;

/// Where a technician's route starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginMode {
    /// Start at the technician's home; every assignment is a waypoint.
    Home,
    /// Start at the first assignment, which stays fixed.
    First,
}

/// Where a technician's route ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationMode {
    /// Return home after the last assignment.
    Home,
    /// End at the last assignment, which stays fixed.
    Last,
}

/// Fixed ends of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteAnchors {
    pub origin: OriginMode,
    pub destination: DestinationMode,
    /// Home location (lat, lng). Required when either end is `Home`.
    pub home: Option<(f64, f64)>,
}

impl RouteAnchors {
    pub fn new(origin: OriginMode, destination: DestinationMode) -> Self {
        Self {
            origin,
            destination,
            home: None,
        }
    }

    pub fn with_home(mut self, home: (f64, f64)) -> Self {
        self.home = Some(home);
        self
    }

    pub fn starts_at_home(&self) -> bool {
        self.origin == OriginMode::Home
    }

    pub fn ends_at_home(&self) -> bool {
        self.destination == DestinationMode::Home
    }
}

impl Default for RouteAnchors {
    fn default() -> Self {
        Self::new(OriginMode::First, DestinationMode::Last)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub origin: (f64, f64),
    pub destination: (f64, f64),
    /// Intermediate stops, in the current visiting order.
    pub waypoints: Vec<(f64, f64)>,
    pub optimize_waypoints: bool,
}

impl RouteRequest {
    /// Waypoints plus origin and destination.
    pub fn total_stops(&self) -> usize {
        self.waypoints.len() + 2
    }

    /// All stops in travel order.
    pub fn stops(&self) -> Vec<(f64, f64)> {
        let mut stops = Vec::with_capacity(self.total_stops());
        stops.push(self.origin);
        stops.extend(self.waypoints.iter().copied());
        stops.push(self.destination);
        stops
    }
}

/// Travel segment between two consecutive stops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub duration_secs: f64,
    pub distance_meters: f64,
}

impl RouteLeg {
    pub fn new(duration_secs: f64, distance_meters: f64) -> Self {
        Self {
            duration_secs,
            distance_meters,
        }
    }

    /// Whole minutes, rounded.
    pub fn minutes(&self) -> i64 {
        (self.duration_secs / 60.0).round() as i64
    }

    /// Miles, rounded to one decimal.
    pub fn miles(&self) -> f64 {
        (self.distance_meters / METERS_PER_MILE * 10.0).round() / 10.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub provider: ProviderKind,
    pub legs: Vec<RouteLeg>,
    /// Visiting order of the request's waypoints, when the provider reordered them.
    pub waypoint_order: Option<Vec<usize>>,
    pub geometry: Option<Polyline>,
}

impl RouteResult {
    pub fn new(provider: ProviderKind, legs: Vec<RouteLeg>) -> Self {
        Self {
            provider,
            legs,
            waypoint_order: None,
            geometry: None,
        }
    }

    pub fn total_distance_miles(&self) -> f64 {
        let meters: f64 = self.legs.iter().map(|leg| leg.distance_meters).sum();
        (meters / METERS_PER_MILE * 10.0).round() / 10.0
    }

    pub fn total_duration_minutes(&self) -> i64 {
        let secs: f64 = self.legs.iter().map(|leg| leg.duration_secs).sum();
        (secs / 60.0).round() as i64
    }
}
