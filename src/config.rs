//! Provider configuration.

use std::env;

pub const GOOGLE_DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";
pub const AZURE_ROUTE_URL: &str = "https://atlas.microsoft.com/route/directions/json";

#[derive(Debug, Clone)]
pub struct RoutingConfig {
    pub google_api_key: Option<String>,
    pub google_directions_url: String,
    pub azure_api_key: Option<String>,
    pub azure_route_url: String,
    pub timeout_secs: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            google_directions_url: GOOGLE_DIRECTIONS_URL.to_string(),
            azure_api_key: None,
            azure_route_url: AZURE_ROUTE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl RoutingConfig {
    /// Reads `GOOGLE_MAPS_API_KEY`, `AZURE_MAPS_API_KEY`, `ROUTING_TIMEOUT_SECS`,
    /// `GOOGLE_DIRECTIONS_URL` and `AZURE_ROUTE_URL`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            google_api_key: non_empty("GOOGLE_MAPS_API_KEY"),
            google_directions_url: non_empty("GOOGLE_DIRECTIONS_URL")
                .unwrap_or(defaults.google_directions_url),
            azure_api_key: non_empty("AZURE_MAPS_API_KEY"),
            azure_route_url: non_empty("AZURE_ROUTE_URL").unwrap_or(defaults.azure_route_url),
            timeout_secs: non_empty("ROUTING_TIMEOUT_SECS")
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}
