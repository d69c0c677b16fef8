//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `garage_db` and to
//! pure logic in `garage_core`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod client;
pub mod diagnosis;
pub mod fault_code;
pub mod project;
pub mod vehicle;
