//! Shared building blocks for the admin workspace: health payloads,
//! logging initialisation and Prometheus text encoding.

pub mod types;
pub mod utils;
pub mod metrics;
