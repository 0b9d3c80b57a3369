//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product, ProductId},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.list(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.repository.get(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        product.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create(&mut tx, product).await?;

        tx.commit().await?;

        info!(product = %created.id, name = %created.name, "product created");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, in whatever order the store yields them.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError>;

    /// Creates a new product and returns it with its store-generated id.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sqlx::PgPool;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn widget(price: Decimal) -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn create_product_rejects_invalid_input_before_touching_the_store() -> TestResult {
        let pool = PgPool::connect_lazy("postgres://storefront@localhost:1/unreachable")?;
        let service = PgProductsService::new(Db::new(pool));

        let result = service.create_product(widget(Decimal::new(-100, 2))).await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidPrice)),
            "expected InvalidPrice, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_returns_generated_id_name_and_price() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(widget(Decimal::new(999, 2)))
            .await?;

        assert!(product.id.into_i64() > 0);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, Decimal::new(999, 2));

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(widget(Decimal::new(999, 2)))
            .await?;

        let product = ctx.products.get_product(created.id).await?;

        assert_eq!(product, created);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductId::from_i64(999)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_returns_created_products() -> TestResult {
        let ctx = TestContext::new().await;

        let a = ctx.products.create_product(widget(Decimal::ONE)).await?;
        let b = ctx.products.create_product(widget(Decimal::TEN)).await?;

        let ids: Vec<ProductId> = ctx
            .products
            .list_products()
            .await?
            .iter()
            .map(|p| p.id)
            .collect();

        assert!(ids.contains(&a.id), "product A should be in the list");
        assert!(ids.contains(&b.id), "product B should be in the list");

        Ok(())
    }

    #[tokio::test]
    async fn list_products_empty_when_none_created() -> TestResult {
        let ctx = TestContext::new().await;

        let products = ctx.products.list_products().await?;

        assert!(products.is_empty());

        Ok(())
    }
}
