//! Domain logic for the staffhub roster service.
//!
//! Everything in this crate is pure: no database, no HTTP, no logging.
//! The API and persistence crates build on these types.

pub mod error;
pub mod roster;
pub mod types;
