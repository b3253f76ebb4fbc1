#![allow(dead_code)]

//! Test fixtures for route-legs.
//!
//! Provides:
//! - Pool customer locations around Henderson / the southeast valley
//! - Builders for technician days and stub provider servers

pub mod pool_locations;
pub mod stub_server;

pub use pool_locations::*;
