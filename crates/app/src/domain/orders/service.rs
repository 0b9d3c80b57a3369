//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::{
        orders::{
            errors::OrdersServiceError,
            models::{NewOrder, Order, OrderId, PricedOrder},
            pricing,
            repository::PgOrdersRepository,
        },
        products::models::Product,
        repository::{PgRepository, RepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    products_repository: PgRepository<Product>,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            products_repository: PgRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let orders = self.orders_repository.list(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, order: OrderId) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let order = self.orders_repository.get(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        order.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        let product = self
            .products_repository
            .get(&mut tx, order.product_id)
            .await
            .map_err(|error| match error {
                RepositoryError::NotFound => {
                    warn!(product = %order.product_id, "order references unknown product");

                    OrdersServiceError::ProductNotFound
                }
                RepositoryError::Sql(_) => error.into(),
            })?;

        let total_price = pricing::total_price(product.price, order.quantity)
            .ok_or(OrdersServiceError::PriceOverflow)?;

        let created = self
            .orders_repository
            .create(
                &mut tx,
                PricedOrder {
                    product_id: product.id,
                    quantity: order.quantity,
                    total_price,
                },
            )
            .await?;

        tx.commit().await?;

        info!(
            order = %created.id,
            product = %created.product_id,
            quantity = created.quantity,
            total_price = %created.total_price,
            "order created"
        );

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves all orders, in whatever order the store yields them.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderId) -> Result<Order, OrdersServiceError>;

    /// Prices the order from the product's current price and stores it.
    ///
    /// Fails with [`OrdersServiceError::ProductNotFound`] when the product
    /// does not exist, in which case nothing is written.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;
}
