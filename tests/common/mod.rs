//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod mock_service;

use visitor_counter::config::CounterConfig;

/// Config with short transport timeouts so failure tests stay fast.
pub fn short_timeouts() -> CounterConfig {
    CounterConfig {
        connect_timeout_seconds: 2,
        request_timeout_seconds: 5,
        ..CounterConfig::default()
    }
}
