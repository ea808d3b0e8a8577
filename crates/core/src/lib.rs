//! Domain layer for the Tailspin catalog.
//!
//! Holds the shared error type, ID/timestamp aliases, and the catalog
//! validation rules. Pure logic only; no database or HTTP concerns.

pub mod catalog;
pub mod error;
pub mod types;
