//! Residential pool customers around Henderson and the southeast valley.

use route_legs::model::{Assignment, Pool};

/// A named pool customer location.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Technician homes
// ============================================================================

pub const TECH_HOMES: &[Location] = &[
    Location::new("Inspirada home", 35.9675, -115.1012),
    Location::new("Whitney Ranch home", 36.0489, -115.0392),
];

// ============================================================================
// Customers
// ============================================================================

pub const GREEN_VALLEY_POOLS: &[Location] = &[
    Location::new("Alvarez", 36.0308, -115.0825),
    Location::new("Brennan", 36.0352, -115.0791),
    Location::new("Castillo", 36.0281, -115.0867),
    Location::new("Dunn", 36.0397, -115.0903),
    Location::new("Eckert", 36.0244, -115.0755),
    Location::new("Farrow", 36.0330, -115.0702),
    Location::new("Gallo", 36.0419, -115.0848),
    Location::new("Hale", 36.0266, -115.0932),
];

pub const ANTHEM_POOLS: &[Location] = &[
    Location::new("Ibarra", 35.9916, -115.1028),
    Location::new("Jensen", 35.9949, -115.0999),
    Location::new("Kowalski", 35.9872, -115.1107),
    Location::new("Lindqvist", 35.9834, -115.0951),
    Location::new("Moreau", 35.9798, -115.1060),
    Location::new("Nakamura", 35.9961, -115.1134),
    Location::new("Okafor", 35.9889, -115.0882),
    Location::new("Pruitt", 35.9752, -115.1149),
];

pub const SUNSET_POOLS: &[Location] = &[
    Location::new("Quintero", 36.0614, -115.0631),
    Location::new("Rasmussen", 36.0652, -115.0588),
    Location::new("Silva", 36.0577, -115.0690),
    Location::new("Thorne", 36.0690, -115.0542),
    Location::new("Underwood", 36.0541, -115.0615),
    Location::new("Vance", 36.0633, -115.0729),
    Location::new("Whitaker", 36.0721, -115.0651),
    Location::new("Xiong", 36.0598, -115.0507),
];

pub const LAKE_LAS_VEGAS_POOLS: &[Location] = &[
    Location::new("Yates", 36.1070, -114.9291),
    Location::new("Zamora", 36.1042, -114.9357),
    Location::new("Abbott", 36.1101, -114.9223),
    Location::new("Boyle", 36.0995, -114.9310),
    Location::new("Cruz", 36.1123, -114.9402),
    Location::new("Dorsey", 36.1016, -114.9187),
];

/// Every customer, in a stable order.
pub fn all_pools() -> Vec<Location> {
    let mut all = Vec::with_capacity(32);
    all.extend_from_slice(GREEN_VALLEY_POOLS);
    all.extend_from_slice(ANTHEM_POOLS);
    all.extend_from_slice(SUNSET_POOLS);
    all.extend_from_slice(LAKE_LAS_VEGAS_POOLS);
    all
}

/// A technician's day visiting `locations` in the given order (order 1..=n).
pub fn technician_day(technician: &str, locations: &[Location]) -> Vec<Assignment> {
    locations
        .iter()
        .enumerate()
        .map(|(i, location)| {
            let pool = Pool::new(
                format!("pool-{}", location.name.to_lowercase()),
                location.name,
                location.lat,
                location.lng,
            );
            Assignment::new(format!("{}-{}", technician, i + 1), technician, pool, i as u32 + 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enough_pools_for_long_routes() {
        assert!(all_pools().len() >= 27);
    }

    #[test]
    fn test_coordinates_in_henderson_area() {
        for loc in all_pools().iter().chain(TECH_HOMES) {
            assert!(loc.lat > 35.9 && loc.lat < 36.2, "{} lat out of range: {}", loc.name, loc.lat);
            assert!(
                loc.lng > -115.2 && loc.lng < -114.9,
                "{} lng out of range: {}",
                loc.name,
                loc.lng
            );
        }
    }
}
