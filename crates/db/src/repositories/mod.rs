//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod game_repo;
pub mod publisher_repo;

pub use category_repo::CategoryRepo;
pub use game_repo::GameRepo;
pub use publisher_repo::PublisherRepo;
