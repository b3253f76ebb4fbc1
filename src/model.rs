//! Domain records as served by the REST backend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

impl Pool {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            lat,
            lng,
        }
    }

    /// Location (lat, lng) used as a routing waypoint.
    pub fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// A scheduled technician visit to a pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub technician_id: String,
    pub pool: Pool,
    /// 1-based position in the technician's route.
    pub order: u32,
    #[serde(default)]
    pub time_in_minutes_to_next_stop: Option<i64>,
    #[serde(default)]
    pub distance_in_miles_to_next_stop: Option<f64>,
}

impl Assignment {
    pub fn new(
        id: impl Into<String>,
        technician_id: impl Into<String>,
        pool: Pool,
        order: u32,
    ) -> Self {
        Self {
            id: id.into(),
            technician_id: technician_id.into(),
            pool,
            order,
            time_in_minutes_to_next_stop: None,
            distance_in_miles_to_next_stop: None,
        }
    }

    pub fn location(&self) -> (f64, f64) {
        self.pool.location()
    }

    pub(crate) fn clear_leg(&mut self) {
        self.time_in_minutes_to_next_stop = None;
        self.distance_in_miles_to_next_stop = None;
    }
}
