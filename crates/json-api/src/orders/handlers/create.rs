//! Create Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_app::domain::{orders::models::NewOrder, products::models::ProductId};

use crate::{errors::IntoStatusError, extensions::*, orders::get::OrderResponse, state::State};

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    /// Ignored; the store assigns identifiers
    #[serde(default)]
    pub id: Option<i64>,

    /// The product being ordered
    #[serde(rename = "productID")]
    pub product_id: i64,

    /// Number of units, at least 1
    pub quantity: i32,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            product_id: ProductId::from_i64(request.product_id),
            quantity: request.quantity,
        }
    }
}

/// Create Order Handler
///
/// The total price is computed from the product's current price and stored,
/// but is not part of the response.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    if let Some(client_id) = request.id {
        debug!(client_id, "ignoring client-supplied order id");
    }

    let new_order = NewOrder::from(request);

    new_order
        .validate()
        .map_err(IntoStatusError::into_status_error)?;

    let order = state
        .app
        .orders
        .create_order(new_order)
        .await
        .map_err(IntoStatusError::into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.id), true)
        .or_500("setting the Location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
