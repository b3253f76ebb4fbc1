//! Route leg mapper.
//!
//! Translates a provider-agnostic route result back onto a technician's
//! assignment list: applies the provider's waypoint reordering around the
//! fixed ends of the route, hands each assignment the leg that leaves it,
//! and renumbers the visiting order when optimization was requested.

use std::ops::Range;

use tracing::{debug, warn};

use crate::error::RouteError;
use crate::model::Assignment;
use crate::route::{DestinationMode, OriginMode, RouteAnchors, RouteRequest, RouteResult};
use crate::traits::ProviderKind;

/// Stop count (waypoints + origin + destination) at which the primary
/// provider's waypoint ceiling is exceeded.
pub const ALTERNATE_PROVIDER_MIN_STOPS: usize = 27;

/// Assignments with their legs filled in, plus route totals.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedRoute {
    pub assignments: Vec<Assignment>,
    pub distance_miles: f64,
    pub duration_minutes: i64,
}

/// Picks the provider able to take `total_stops` stops.
pub fn select_provider(total_stops: usize) -> ProviderKind {
    if total_stops >= ALTERNATE_PROVIDER_MIN_STOPS {
        ProviderKind::Microsoft
    } else {
        ProviderKind::Google
    }
}

/// Index range of the assignments sent as intermediate waypoints.
///
/// The first assignment is excluded when it is the origin, the last when it
/// is the destination. A single assignment used as both ends is excluded once.
pub fn waypoint_range(count: usize, anchors: &RouteAnchors) -> Range<usize> {
    let start = match anchors.origin {
        OriginMode::First => count.min(1),
        OriginMode::Home => 0,
    };
    let end = match anchors.destination {
        DestinationMode::Last if count > start => count - 1,
        _ => count,
    };
    start..end
}

/// Builds the provider request for an ordered assignment list.
pub fn build_request(
    assignments: &[Assignment],
    anchors: &RouteAnchors,
    optimize: bool,
) -> Result<RouteRequest, RouteError> {
    let (first, last) = match (assignments.first(), assignments.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(RouteError::NoStops),
    };

    let origin = match anchors.origin {
        OriginMode::Home => anchors.home.ok_or(RouteError::MissingHome)?,
        OriginMode::First => first.location(),
    };
    let destination = match anchors.destination {
        DestinationMode::Home => anchors.home.ok_or(RouteError::MissingHome)?,
        DestinationMode::Last => last.location(),
    };
    let waypoints = assignments[waypoint_range(assignments.len(), anchors)]
        .iter()
        .map(Assignment::location)
        .collect();

    Ok(RouteRequest {
        origin,
        destination,
        waypoints,
        optimize_waypoints: optimize,
    })
}

/// Maps `result` onto `assignments`. Never fails: a bad permutation is
/// ignored and missing legs leave the stop's time and distance empty.
pub fn map_route(
    assignments: &[Assignment],
    anchors: &RouteAnchors,
    optimize: bool,
    result: &RouteResult,
) -> MappedRoute {
    let range = waypoint_range(assignments.len(), anchors);
    let mut ordered = assignments.to_vec();

    if optimize {
        if let Some(order) = &result.waypoint_order {
            if is_permutation(order, range.len()) {
                let waypoints = &assignments[range.clone()];
                let reordered: Vec<Assignment> =
                    order.iter().map(|&index| waypoints[index].clone()).collect();
                ordered[range.clone()].clone_from_slice(&reordered);
            } else {
                warn!(
                    "{}: ignoring waypoint order {:?}, not a permutation of {} waypoints",
                    result.provider,
                    order,
                    range.len()
                );
            }
        }
    }

    let expected_legs = range.len() + 1;
    if result.legs.len() < expected_legs {
        warn!(
            "{}: expected {} legs, got {}",
            result.provider,
            expected_legs,
            result.legs.len()
        );
    }

    // A home origin contributes a leading leg that leaves no assignment.
    let offset = usize::from(anchors.starts_at_home());
    let last_index = ordered.len().saturating_sub(1);

    for (index, assignment) in ordered.iter_mut().enumerate() {
        let ends_route = index == last_index && !anchors.ends_at_home();
        let leg = if ends_route {
            None
        } else {
            result.legs.get(index + offset)
        };

        match leg {
            Some(leg) => {
                assignment.time_in_minutes_to_next_stop = Some(leg.minutes());
                assignment.distance_in_miles_to_next_stop = Some(leg.miles());
            }
            None => assignment.clear_leg(),
        }

        if optimize {
            assignment.order = index as u32 + 1;
        }
    }

    debug!(
        "{}: mapped {} legs onto {} assignments",
        result.provider,
        result.legs.len(),
        ordered.len()
    );

    MappedRoute {
        assignments: ordered,
        distance_miles: result.total_distance_miles(),
        duration_minutes: result.total_duration_minutes(),
    }
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &index in order {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
