//! App Context

use std::sync::Arc;

use sqlx::{PgPool, migrate::MigrateError};
use thiserror::Error;

use crate::{
    database::{self, Db, PoolSettings},
    domain::{
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),
}

/// Services shared by every request.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Wire the Postgres-backed services onto an existing pool.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        let db = Db::new(pool);

        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db)),
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or running
    /// migrations fails.
    pub async fn from_database_url(
        url: &str,
        settings: PoolSettings,
        run_migrations: bool,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, settings)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;
        }

        Ok(Self::from_pool(pool))
    }
}
