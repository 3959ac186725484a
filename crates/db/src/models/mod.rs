//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Create inputs come from `staffhub_core` record types.

pub mod employee;
