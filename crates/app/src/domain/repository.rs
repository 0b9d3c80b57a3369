//! Generic repository over the Postgres store.
//!
//! Each entity describes its statements once through [`Record`]; the create,
//! get-by-id and list operations, together with driver error normalisation,
//! live in [`PgRepository`] and are shared by every entity.

use std::marker::PhantomData;

use sqlx::{
    Postgres, Transaction,
    error::DatabaseError,
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    query_as,
};
use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::ids::TypedId;

/// Normalised storage failure.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("row not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        if matches!(error, sqlx::Error::RowNotFound) {
            debug!("no matching row");

            return Self::NotFound;
        }

        match error.as_database_error() {
            Some(database_error) => log_database_error(database_error),
            None => error!("storage error: {error}"),
        }

        Self::Sql(error)
    }
}

fn log_database_error(database_error: &dyn DatabaseError) {
    error!(
        code = database_error.code().as_deref().unwrap_or("unknown"),
        constraint = database_error.constraint().unwrap_or("none"),
        table = database_error.table().unwrap_or("none"),
        "database error: {}",
        database_error.message()
    );
}

/// A row type the generic repository can create, fetch and list.
pub(crate) trait Record: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin + 'static {
    /// Insert payload.
    type New: Send;

    /// Entity name used in log context.
    const NAME: &'static str;

    /// `INSERT ... RETURNING` statement yielding the stored row.
    const CREATE_SQL: &'static str;

    /// `SELECT` of one row by `$1 = id`.
    const GET_SQL: &'static str;

    /// `SELECT` of every row.
    const LIST_SQL: &'static str;

    /// Bind the insert payload to [`Self::CREATE_SQL`] in placeholder order.
    fn bind_new(
        query: QueryAs<'static, Postgres, Self, PgArguments>,
        new: Self::New,
    ) -> QueryAs<'static, Postgres, Self, PgArguments>;
}

#[derive(Debug)]
pub(crate) struct PgRepository<R> {
    record: PhantomData<fn() -> R>,
}

impl<R> Clone for PgRepository<R> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<R> Default for PgRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> PgRepository<R> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self {
            record: PhantomData,
        }
    }
}

impl<R: Record> PgRepository<R> {
    #[instrument(level = "debug", skip_all, fields(entity = R::NAME))]
    pub(crate) async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        new: R::New,
    ) -> Result<R, RepositoryError> {
        let created = R::bind_new(query_as::<Postgres, R>(R::CREATE_SQL), new)
            .fetch_one(&mut **tx)
            .await?;

        Ok(created)
    }

    #[instrument(level = "debug", skip_all, fields(entity = R::NAME, id = %id))]
    pub(crate) async fn get(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: TypedId<R>,
    ) -> Result<R, RepositoryError> {
        let row = query_as::<Postgres, R>(R::GET_SQL)
            .bind(id.into_i64())
            .fetch_one(&mut **tx)
            .await?;

        Ok(row)
    }

    #[instrument(level = "debug", skip_all, fields(entity = R::NAME))]
    pub(crate) async fn list(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<R>, RepositoryError> {
        let rows = query_as::<Postgres, R>(R::LIST_SQL)
            .fetch_all(&mut **tx)
            .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_normalises_to_not_found() {
        let error = RepositoryError::from(sqlx::Error::RowNotFound);

        assert!(
            matches!(error, RepositoryError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn other_driver_errors_normalise_to_sql() {
        let error = RepositoryError::from(sqlx::Error::PoolTimedOut);

        assert!(
            matches!(error, RepositoryError::Sql(sqlx::Error::PoolTimedOut)),
            "expected Sql, got {error:?}"
        );
    }
}
