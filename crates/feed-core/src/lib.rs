//! # Feed Core
//!
//! The domain layer of the feed service.
//! This crate contains the post model, its validation rules and the service
//! that orchestrates them, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::PostService;
