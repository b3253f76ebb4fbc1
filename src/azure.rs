//! Microsoft Azure Maps Route Directions adapter.
//!
//! Azure accepts far more waypoints than Google, so it serves the long
//! routes. Optimized order comes back as `optimizedWaypoints`, a list of
//! `{providedIndex, optimizedIndex}` pairs over the intermediate waypoints.

use serde::Deserialize;
use tracing::debug;

use crate::config::RoutingConfig;
use crate::error::RouteError;
use crate::polyline::Polyline;
use crate::route::{RouteLeg, RouteRequest, RouteResult};
use crate::traits::{ProviderKind, RouteProvider};

const API_VERSION: &str = "1.0";

#[derive(Debug, Clone)]
pub struct AzureRouteClient {
    api_key: String,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl AzureRouteClient {
    pub fn new(config: &RoutingConfig) -> Result<Self, RouteError> {
        let api_key = config
            .azure_api_key
            .clone()
            .ok_or(RouteError::MissingApiKey(ProviderKind::Microsoft))?;
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            api_key,
            base_url: config.azure_route_url.clone(),
            client,
        })
    }
}

fn query_param(request: &RouteRequest) -> String {
    request
        .stops()
        .iter()
        .map(|(lat, lng)| format!("{:.6},{:.6}", lat, lng))
        .collect::<Vec<_>>()
        .join(":")
}

impl RouteProvider for AzureRouteClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Microsoft
    }

    fn route(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        debug!(
            "Microsoft: requesting directions through {} stops (optimize: {})",
            request.total_stops(),
            request.optimize_waypoints
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("api-version", API_VERSION.to_string()),
                ("query", query_param(request)),
                ("travelMode", "car".to_string()),
                ("routeRepresentation", "polyline".to_string()),
                ("computeBestOrder", request.optimize_waypoints.to_string()),
                ("subscription-key", self.api_key.clone()),
            ])
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|body| body.error.message)
                .unwrap_or(text);
            return Err(RouteError::Provider {
                provider: ProviderKind::Microsoft,
                status: status.as_u16().to_string(),
                message,
            });
        }

        parse_directions(serde_json::from_str(&text)?, request)
    }
}

fn parse_directions(
    body: DirectionsResponse,
    request: &RouteRequest,
) -> Result<RouteResult, RouteError> {
    let route = body.routes.into_iter().next().ok_or_else(|| RouteError::Provider {
        provider: ProviderKind::Microsoft,
        status: "200".to_string(),
        message: "response contained no routes".to_string(),
    })?;

    let legs = route
        .legs
        .iter()
        .map(|leg| {
            RouteLeg::new(
                leg.summary.travel_time_in_seconds,
                leg.summary.length_in_meters,
            )
        })
        .collect();

    let mut geometry: Option<Polyline> = None;
    for leg in route.legs {
        let points = leg
            .points
            .into_iter()
            .map(|point| (point.latitude, point.longitude))
            .collect();
        match geometry.as_mut() {
            Some(line) => line.extend(Polyline::new(points)),
            None => geometry = Some(Polyline::new(points)),
        }
    }
    let geometry = geometry.filter(|line| !line.points().is_empty());

    let waypoint_order = if request.optimize_waypoints && !body.optimized_waypoints.is_empty() {
        let mut pairs = body.optimized_waypoints;
        pairs.sort_by_key(|pair| pair.optimized_index);
        Some(pairs.into_iter().map(|pair| pair.provided_index).collect())
    } else {
        None
    };

    Ok(RouteResult {
        provider: ProviderKind::Microsoft,
        legs,
        waypoint_order,
        geometry,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<AzureRoute>,
    #[serde(default)]
    optimized_waypoints: Vec<OptimizedWaypoint>,
}

#[derive(Debug, Deserialize)]
struct AzureRoute {
    #[serde(default)]
    legs: Vec<AzureLeg>,
}

#[derive(Debug, Deserialize)]
struct AzureLeg {
    summary: LegSummary,
    #[serde(default)]
    points: Vec<AzurePoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegSummary {
    length_in_meters: f64,
    travel_time_in_seconds: f64,
}

#[derive(Debug, Deserialize)]
struct AzurePoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptimizedWaypoint {
    provided_index: usize,
    optimized_index: usize,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}
