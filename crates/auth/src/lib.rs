//! JWT authentication and admin authorization for the start page dashboard.
//!
//! This crate provides:
//! - JWT token generation and validation
//! - The admin policy shared by card composition and the address book

mod admin;
mod error;
mod jwt;

pub use admin::*;
pub use error::*;
pub use jwt::*;

/// Default JWT expiration time in hours.
pub const DEFAULT_JWT_EXPIRATION_HOURS: u64 = 24;

/// Default JWT issuer.
pub const DEFAULT_JWT_ISSUER: &str = "startpage";
