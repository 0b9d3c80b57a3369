//! Create Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_app::domain::products::models::NewProduct;

use crate::{
    errors::IntoStatusError, extensions::*, products::get::ProductResponse, state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Ignored; the store assigns identifiers
    #[serde(default)]
    pub id: Option<i64>,

    /// Product name, 1 to 100 characters
    pub name: String,

    /// Unit price, non-negative with at most two decimal places
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            price: request.price,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    if let Some(client_id) = request.id {
        debug!(client_id, "ignoring client-supplied product id");
    }

    let new_product = NewProduct::from(request);

    new_product
        .validate()
        .map_err(IntoStatusError::into_status_error)?;

    let product = state
        .app
        .products
        .create_product(new_product)
        .await
        .map_err(IntoStatusError::into_status_error)?;

    res.add_header(LOCATION, format!("/products/{}", product.id), true)
        .or_500("setting the Location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}
