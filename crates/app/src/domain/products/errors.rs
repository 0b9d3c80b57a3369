//! Products service errors.

use thiserror::Error;

use crate::domain::{ErrorKind, repository::RepositoryError};

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("product name must be between 1 and 100 characters")]
    InvalidName,

    #[error("product price must be non-negative with at most two decimal places")]
    InvalidPrice,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl ProductsServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound => ErrorKind::NotFound,
            Self::InvalidName | Self::InvalidPrice => ErrorKind::Validation,
            Self::Sql(_) => ErrorKind::Persistence,
        }
    }
}

impl From<RepositoryError> for ProductsServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::Sql(source) => Self::Sql(source),
        }
    }
}

impl From<sqlx::Error> for ProductsServiceError {
    fn from(error: sqlx::Error) -> Self {
        RepositoryError::from(error).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(ProductsServiceError::NotFound.kind(), ErrorKind::NotFound);
        assert_eq!(ProductsServiceError::InvalidName.kind(), ErrorKind::Validation);
        assert_eq!(ProductsServiceError::InvalidPrice.kind(), ErrorKind::Validation);
        assert_eq!(
            ProductsServiceError::Sql(sqlx::Error::PoolClosed).kind(),
            ErrorKind::Persistence
        );
    }

    #[test]
    fn missing_row_becomes_not_found() {
        let error = ProductsServiceError::from(sqlx::Error::RowNotFound);

        assert!(
            matches!(error, ProductsServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }
}
