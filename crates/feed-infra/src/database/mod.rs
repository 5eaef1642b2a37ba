//! Post storage - SeaORM over PostgreSQL, plus an in-memory fallback.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_repo;

pub use connections::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use postgres_repo::SeaOrmPostRepository;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
