//! Service layer for the admin catalog.
//! - `catalog` holds the list manager shared by courses and services.
//! - `admin` defines the async store seam consumed by the HTTP layer.
//! - `notify` replaces UI toasts with explicit notification events.

pub mod errors;
pub mod ids;
pub mod notify;
pub mod metrics;
pub mod storage;
pub mod catalog;
pub mod admin;
