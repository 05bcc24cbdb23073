//! Core entity definitions for the start page dashboard.
//!
//! This crate defines the data types shared by the composer, the store and
//! the HTTP server: users and their preferences, custom links, the weekly
//! training schedule, the admin address book and link descriptors.

mod custom_link;
mod email;
mod link;
mod preferences;
mod training;
mod user;

pub use custom_link::*;
pub use email::*;
pub use link::*;
pub use preferences::*;
pub use training::*;
pub use user::*;
