//! JSON wire types for the start page HTTP API.
//!
//! Field names are camelCase on the wire, matching what the browser
//! front end sends and expects.

mod error;
pub mod requests;
pub mod responses;
mod types;

pub use error::*;
pub use types::*;
