//! # Feed Infrastructure
//!
//! Concrete implementations of the ports defined in `feed-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL post store via SeaORM
//!
//! Without `postgres` (`--no-default-features`) only the in-memory store is built.

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::SeaOrmPostRepository;
