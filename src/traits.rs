//! Core routing traits.
//!
//! A provider turns an ordered set of stops into legs. Everything downstream
//! (reordering, leg assignment, totals) is provider-agnostic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::route::{RouteRequest, RouteResult};

/// Which external routing backend produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Google Directions. Primary provider, lower waypoint ceiling.
    Google,
    /// Microsoft Azure Maps Route Directions. Used for long routes.
    Microsoft,
    /// Straight-line estimate, no network.
    Haversine,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProviderKind::Google => "Google",
                ProviderKind::Microsoft => "Microsoft",
                ProviderKind::Haversine => "Haversine",
            }
        )
    }
}

/// Computes a route through the stops of a request.
///
/// Implementations must return legs in travel order. When
/// `request.optimize_waypoints` is set and the backend reorders the
/// intermediate waypoints, `RouteResult::waypoint_order` holds the visiting
/// order as indices into `request.waypoints`.
pub trait RouteProvider {
    fn kind(&self) -> ProviderKind;

    fn route(&self, request: &RouteRequest) -> Result<RouteResult, RouteError>;
}

impl<T: RouteProvider + ?Sized> RouteProvider for &T {
    fn kind(&self) -> ProviderKind {
        (**self).kind()
    }

    fn route(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        (**self).route(request)
    }
}
