//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors::IntoStatusError, extensions::*, products::get::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns every product as a bare array, in storage order.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(IntoStatusError::into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use storefront_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_bare_array() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().once().return_once(|| {
            Ok(vec![
                make_product(1, "Widget", Decimal::new(1250, 2)),
                make_product(2, "Gadget", Decimal::new(2500, 2)),
            ])
        });

        repo.expect_get_product().never();
        repo.expect_create_product().never();

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!([
                { "id": 1, "name": "Widget", "price": 12.5 },
                { "id": 2, "name": "Gadget", "price": 25.0 },
            ])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_empty_returns_empty_array() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|| Ok(Vec::new()));

        repo.expect_get_product().never();
        repo.expect_create_product().never();

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, json!([]));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_failure_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|| Err(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        repo.expect_get_product().never();
        repo.expect_create_product().never();

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
