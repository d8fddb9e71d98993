//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Persistence sits behind the repository trait in `product::repository`.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod product;

#[cfg(test)]
pub mod test_support;
