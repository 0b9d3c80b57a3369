//! Orders

pub mod errors;
pub mod models;
pub mod pricing;
mod repository;
pub mod service;

pub use errors::OrdersServiceError;
pub use service::*;
