//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::orders::models::{Order, OrderId};

use crate::{errors::IntoStatusError, extensions::*, state::State};

/// Order wire representation. The stored total price is not exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The store-generated identifier of the order
    pub id: i64,

    /// The ordered product
    #[serde(rename = "productID")]
    pub product_id: i64,

    /// Number of units ordered
    pub quantity: i32,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.into_i64(),
            product_id: order.product_id.into_i64(),
            quantity: order.quantity,
        }
    }
}

/// Get Order Handler
///
/// Returns an order.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid order id"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .get_order(OrderId::from_i64(id.into_inner()))
        .await
        .map_err(IntoStatusError::into_status_error)?;

    Ok(Json(order.into()))
}
