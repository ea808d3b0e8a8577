//! Catalog entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the database row or query shape
//! - A `Deserialize` create DTO for inserts

pub mod category;
pub mod game;
pub mod publisher;
