//! route-legs
//!
//! Maps externally optimized technician routes back onto pool-service
//! assignments: provider choice by stop count, waypoint reordering around
//! fixed route ends, and per-stop travel time and distance.

pub mod traits;
pub mod error;
pub mod config;
pub mod model;
pub mod route;
pub mod mapper;
pub mod planner;
pub mod google;
pub mod azure;
pub mod haversine;
pub mod polyline;
