//! Storage abstractions for service layer
//!
//! Records live only in process memory; a restart returns every collection
//! to its starting state.

pub mod list_store;
