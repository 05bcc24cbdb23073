//! Persistence for the start page dashboard.
//!
//! This crate provides a storage abstraction for users, preferences, custom
//! links, training schedules and the admin address book. It ships an
//! in-memory store (tests and ephemeral runs) and a SQLite store.

mod error;
mod memory;
mod sqlite;
mod traits;

pub use error::*;
pub use memory::*;
pub use sqlite::*;
pub use traits::*;
