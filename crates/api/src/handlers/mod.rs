//! Request handlers for catalog entities.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input via `tailspin_core::catalog`, delegate to the
//! corresponding repository in `tailspin_db`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod categories;
pub mod games;
pub mod publishers;
