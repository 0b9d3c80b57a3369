//! Storefront Domain Concerns

pub mod errors;
pub mod orders;
pub mod products;
mod repository;

pub use errors::ErrorKind;
