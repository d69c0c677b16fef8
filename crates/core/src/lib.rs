//! Pure domain logic for the service-shop backend.
//!
//! Nothing in this crate touches the database or the network. The `db` and
//! `api` crates build on the types and functions defined here.

pub mod diagnostics;
pub mod directory;
pub mod error;
pub mod types;
