//! Test fixtures for hike-route-planner.
//!
//! Provides:
//! - Real north Cotswold Way walking stops
//! - A brute-force reference solver and a seeded instance generator

#![allow(dead_code)]

pub mod cotswolds_locations;
pub mod reference;

pub use cotswolds_locations::*;
pub use reference::*;

/// Route tracing output through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
