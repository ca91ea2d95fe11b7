//! HealthMed data access and auth forwarding
//!
//! Typed access to the doctors/appointments/work-time store, and an outbound
//! HTTP client that carries the caller's bearer token to downstream services.

pub mod config;
pub mod entity;
pub mod forward;
pub mod store;
