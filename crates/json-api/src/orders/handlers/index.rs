//! Order Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors::IntoStatusError, extensions::*, orders::get::OrderResponse, state::State};

/// Order Index Handler
///
/// Returns every order as a bare array, in storage order.
#[endpoint(tags("orders"), summary = "List Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state
        .app
        .orders
        .list_orders()
        .await
        .map_err(IntoStatusError::into_status_error)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
