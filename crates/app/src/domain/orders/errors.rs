//! Orders service errors.

use thiserror::Error;

use crate::domain::{ErrorKind, repository::RepositoryError};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("order quantity must be at least 1")]
    InvalidQuantity,

    #[error("order total price is out of range")]
    PriceOverflow,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl OrdersServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound | Self::ProductNotFound => ErrorKind::NotFound,
            Self::InvalidQuantity | Self::PriceOverflow => ErrorKind::Validation,
            Self::Sql(_) => ErrorKind::Persistence,
        }
    }
}

impl From<RepositoryError> for OrdersServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::Sql(source) => Self::Sql(source),
        }
    }
}

impl From<sqlx::Error> for OrdersServiceError {
    fn from(error: sqlx::Error) -> Self {
        RepositoryError::from(error).into()
    }
}
