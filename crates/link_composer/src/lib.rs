//! Dashboard card composition for the start page.
//!
//! The composer merges the static link catalog, the user's link toggles,
//! their custom links, today's training activity and the weather opt-in into
//! the ordered list of cards the dashboard renders. Everything in this crate
//! is pure: no I/O, no clock reads except where a function says so.

mod catalog;
mod composer;
mod error;
mod greeting;
mod quotes;
mod training;

pub use catalog::*;
pub use composer::*;
pub use error::*;
pub use greeting::*;
pub use quotes::*;
pub use training::*;
