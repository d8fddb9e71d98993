//! Product module: three-layer architecture (domain, repository, service).
//!
//! This module centralizes the product CRUD business logic under the service crate.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::ProductService;
