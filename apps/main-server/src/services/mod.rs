//! Outbound services.

pub mod weather;
