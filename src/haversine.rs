//! Straight-line route provider (offline fallback).
//!
//! Estimates each leg from great-circle distance and an assumed speed.
//! Less accurate than a real router (ignores roads) but always available.
//! Never reorders waypoints.

use crate::error::RouteError;
use crate::polyline::Polyline;
use crate::route::{RouteLeg, RouteRequest, RouteResult};
use crate::traits::{ProviderKind, RouteProvider};

/// Average driving speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone)]
pub struct HaversineRouter {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineRouter {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineRouter {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Great-circle distance between two points in kilometers.
    pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    fn leg(&self, from: (f64, f64), to: (f64, f64)) -> RouteLeg {
        let km = Self::haversine_km(from, to);
        RouteLeg::new(km / self.speed_kmh * 3600.0, km * 1000.0)
    }
}

impl RouteProvider for HaversineRouter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Haversine
    }

    fn route(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        let stops = request.stops();
        let legs = stops.windows(2).map(|pair| self.leg(pair[0], pair[1])).collect();

        Ok(RouteResult {
            provider: ProviderKind::Haversine,
            legs,
            waypoint_order: None,
            geometry: Some(Polyline::new(stops)),
        })
    }
}
