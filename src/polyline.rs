//! Polyline representation for route geometries.
//!
//! Geometry is kept as decoded coordinates. Google returns the compact
//! encoded format (precision 5), which is decoded at the provider boundary.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

const PRECISION: f64 = 1e5;

/// Seven 5-bit chunks cover any 32-bit E5 value.
const MAX_CHUNKS: u32 = 7;

/// A route geometry as decoded (latitude, longitude) points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string.
    pub fn decode(encoded: &str) -> Result<Self, RouteError> {
        let bytes = encoded.as_bytes();
        let mut points = Vec::new();
        let mut index = 0;
        let mut lat: i64 = 0;
        let mut lng: i64 = 0;

        while index < bytes.len() {
            lat = accumulate(lat, decode_value(bytes, &mut index)?)?;
            lng = accumulate(lng, decode_value(bytes, &mut index)?)?;
            points.push((lat as f64 / PRECISION, lng as f64 / PRECISION));
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    /// Appends another geometry, dropping a duplicated joint point.
    pub fn extend(&mut self, other: Polyline) {
        let mut rest = other.points.into_iter().peekable();
        if let (Some(last), Some(first)) = (self.points.last(), rest.peek()) {
            if last == first {
                rest.next();
            }
        }
        self.points.extend(rest);
    }
}

fn accumulate(coordinate: i64, delta: i64) -> Result<i64, RouteError> {
    coordinate
        .checked_add(delta)
        .ok_or_else(|| RouteError::Polyline("coordinate overflow".to_string()))
}

fn decode_value(bytes: &[u8], index: &mut usize) -> Result<i64, RouteError> {
    let mut result: i64 = 0;
    let mut chunks = 0;

    loop {
        let byte = *bytes
            .get(*index)
            .ok_or_else(|| RouteError::Polyline(format!("truncated at byte {}", index)))?;
        *index += 1;

        if !(63..=126).contains(&byte) {
            return Err(RouteError::Polyline(format!(
                "unexpected character {:?} at byte {}",
                byte as char,
                *index - 1
            )));
        }
        if chunks == MAX_CHUNKS {
            return Err(RouteError::Polyline(format!(
                "value longer than {} chunks at byte {}",
                MAX_CHUNKS,
                *index - 1
            )));
        }

        let chunk = (byte - 63) as i64;
        result |= (chunk & 0x1f) << (5 * chunks);
        chunks += 1;

        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 != 0 { !(result >> 1) } else { result >> 1 })
}
