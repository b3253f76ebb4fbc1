//! Error type shared by providers, the mapper and the planner.

use thiserror::Error;

use crate::traits::ProviderKind;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{provider} error: {status} - {message}")]
    Provider {
        provider: ProviderKind,
        status: String,
        message: String,
    },

    #[error("No API key configured for {0}")]
    MissingApiKey(ProviderKind),

    #[error("Route anchored at home but no home location is set")]
    MissingHome,

    #[error("No assignments to route")]
    NoStops,

    #[error("Invalid encoded polyline: {0}")]
    Polyline(String),
}
