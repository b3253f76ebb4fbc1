//! Route state and the one-shot planner that fills it.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::azure::AzureRouteClient;
use crate::config::RoutingConfig;
use crate::error::RouteError;
use crate::google::GoogleDirectionsClient;
use crate::mapper::{build_request, map_route, select_provider, MappedRoute};
use crate::model::Assignment;
use crate::route::{RouteAnchors, RouteResult};
use crate::traits::{ProviderKind, RouteProvider};

/// Route shown for one technician's day.
///
/// Owned by a single caller and overwritten by each completed plan; the
/// last write wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteState {
    pub directions: Option<RouteResult>,
    pub distance_miles: Option<f64>,
    pub duration_minutes: Option<i64>,
    pub assignments: Vec<Assignment>,
}

impl RouteState {
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments,
            ..Self::default()
        }
    }

    /// Splits a day's assignments into one state per technician, each
    /// sorted by `order`. States come back sorted by technician id.
    pub fn group_by_technician(assignments: Vec<Assignment>) -> Vec<RouteState> {
        let mut groups: BTreeMap<String, Vec<Assignment>> = BTreeMap::new();
        for assignment in assignments {
            groups
                .entry(assignment.technician_id.clone())
                .or_default()
                .push(assignment);
        }

        groups
            .into_values()
            .map(|mut group| {
                group.sort_by_key(|assignment| assignment.order);
                RouteState::new(group)
            })
            .collect()
    }

    /// Clears directions and totals. Assignments are kept.
    pub fn reset_route(&mut self) {
        self.directions = None;
        self.distance_miles = None;
        self.duration_minutes = None;
    }

    fn apply(&mut self, result: RouteResult, mapped: MappedRoute) {
        self.directions = Some(result);
        self.distance_miles = Some(mapped.distance_miles);
        self.duration_minutes = Some(mapped.duration_minutes);
        self.assignments = mapped.assignments;
    }

    /// Moves the assignment at `from` to `to` (manual reordering in the
    /// sortable list), renumbers every `order` and drops the now stale route.
    ///
    /// Returns false if either index is out of range.
    pub fn move_assignment(&mut self, from: usize, to: usize) -> bool {
        if from >= self.assignments.len() || to >= self.assignments.len() {
            return false;
        }

        let moved = self.assignments.remove(from);
        self.assignments.insert(to, moved);
        for (index, assignment) in self.assignments.iter_mut().enumerate() {
            assignment.order = index as u32 + 1;
            assignment.clear_leg();
        }
        self.reset_route();
        true
    }
}

/// Routes technicians' days through a primary provider, switching to the
/// alternate one for long routes.
#[derive(Debug, Clone)]
pub struct RoutePlanner<P, A> {
    primary: P,
    alternate: A,
    anchors: RouteAnchors,
}

impl RoutePlanner<GoogleDirectionsClient, AzureRouteClient> {
    /// Google as primary, Azure Maps as alternate. Both keys are required.
    pub fn from_config(config: &RoutingConfig, anchors: RouteAnchors) -> Result<Self, RouteError> {
        Ok(Self::new(
            GoogleDirectionsClient::new(config)?,
            AzureRouteClient::new(config)?,
            anchors,
        ))
    }
}

impl<P, A> RoutePlanner<P, A>
where
    P: RouteProvider,
    A: RouteProvider,
{
    pub fn new(primary: P, alternate: A, anchors: RouteAnchors) -> Self {
        Self {
            primary,
            alternate,
            anchors,
        }
    }

    fn provider_for(&self, total_stops: usize) -> &dyn RouteProvider {
        if select_provider(total_stops) == ProviderKind::Microsoft {
            &self.alternate
        } else {
            &self.primary
        }
    }

    /// Routes `state.assignments` and writes the outcome into `state`.
    ///
    /// On failure directions and totals are reset, assignments are left as
    /// they were, and the error is logged and returned. There is no retry.
    pub fn plan(&self, state: &mut RouteState, optimize: bool) -> Result<(), RouteError> {
        match self.compute(&state.assignments, optimize) {
            Ok((result, mapped)) => {
                state.apply(result, mapped);
                Ok(())
            }
            Err(err) => {
                error!("Route planning failed: {}", err);
                state.reset_route();
                Err(err)
            }
        }
    }

    fn compute(
        &self,
        assignments: &[Assignment],
        optimize: bool,
    ) -> Result<(RouteResult, MappedRoute), RouteError> {
        let request = build_request(assignments, &self.anchors, optimize)?;
        let provider = self.provider_for(request.total_stops());
        debug!(
            "Routing {} stops via {}",
            request.total_stops(),
            provider.kind()
        );

        let result = provider.route(&request)?;
        let mapped = map_route(assignments, &self.anchors, optimize, &result);
        Ok((result, mapped))
    }
}

impl<P, A> RoutePlanner<P, A>
where
    P: RouteProvider + Sync,
    A: RouteProvider + Sync,
{
    /// Plans independent states in parallel. Results are in input order.
    pub fn plan_all(
        &self,
        states: &mut [RouteState],
        optimize: bool,
    ) -> Vec<Result<(), RouteError>> {
        states
            .par_iter_mut()
            .map(|state| self.plan(state, optimize))
            .collect()
    }
}
