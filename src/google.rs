//! Google Directions HTTP adapter.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::RoutingConfig;
use crate::error::RouteError;
use crate::polyline::Polyline;
use crate::route::{RouteLeg, RouteRequest, RouteResult};
use crate::traits::{ProviderKind, RouteProvider};

#[derive(Debug, Clone)]
pub struct GoogleDirectionsClient {
    api_key: String,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl GoogleDirectionsClient {
    pub fn new(config: &RoutingConfig) -> Result<Self, RouteError> {
        let api_key = config
            .google_api_key
            .clone()
            .ok_or(RouteError::MissingApiKey(ProviderKind::Google))?;
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            api_key,
            base_url: config.google_directions_url.clone(),
            client,
        })
    }
}

fn format_point((lat, lng): (f64, f64)) -> String {
    format!("{:.6},{:.6}", lat, lng)
}

fn waypoints_param(request: &RouteRequest) -> Option<String> {
    if request.waypoints.is_empty() {
        return None;
    }

    let mut parts = Vec::with_capacity(request.waypoints.len() + 1);
    if request.optimize_waypoints {
        parts.push("optimize:true".to_string());
    }
    parts.extend(request.waypoints.iter().copied().map(format_point));
    Some(parts.join("|"))
}

impl RouteProvider for GoogleDirectionsClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Google
    }

    fn route(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        let mut query = vec![
            ("origin", format_point(request.origin)),
            ("destination", format_point(request.destination)),
            ("mode", "driving".to_string()),
        ];
        if let Some(waypoints) = waypoints_param(request) {
            query.push(("waypoints", waypoints));
        }

        debug!(
            "Google: requesting directions through {} stops (optimize: {})",
            request.total_stops(),
            request.optimize_waypoints
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .query(&[("key", &self.api_key)])
            .send()?
            .error_for_status()?;
        let body: DirectionsResponse = serde_json::from_str(&response.text()?)?;

        parse_directions(body, request)
    }
}

fn parse_directions(
    body: DirectionsResponse,
    request: &RouteRequest,
) -> Result<RouteResult, RouteError> {
    if body.status != "OK" {
        return Err(RouteError::Provider {
            provider: ProviderKind::Google,
            status: body.status,
            message: body.error_message.unwrap_or_default(),
        });
    }

    let route = body.routes.into_iter().next().ok_or_else(|| RouteError::Provider {
        provider: ProviderKind::Google,
        status: "OK".to_string(),
        message: "response contained no routes".to_string(),
    })?;

    let legs = route
        .legs
        .iter()
        .map(|leg| RouteLeg::new(leg.duration.value, leg.distance.value))
        .collect();

    let waypoint_order = if request.optimize_waypoints && !route.waypoint_order.is_empty() {
        Some(route.waypoint_order)
    } else {
        None
    };

    let geometry = match route.overview_polyline {
        Some(overview) => match Polyline::decode(&overview.points) {
            Ok(polyline) => Some(polyline),
            Err(err) => {
                warn!("Google: dropping undecodable overview polyline: {}", err);
                None
            }
        },
        None => None,
    };

    Ok(RouteResult {
        provider: ProviderKind::Google,
        legs,
        waypoint_order,
        geometry,
    })
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
    #[serde(default)]
    waypoint_order: Vec<usize>,
    #[serde(default)]
    overview_polyline: Option<OverviewPolyline>,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    distance: TextValue,
    duration: TextValue,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    value: f64,
}

#[derive(Debug, Deserialize)]
struct OverviewPolyline {
    points: String,
}
