//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{
    healthcheck,
    observability::{metrics_handler, request_logging},
    orders, products,
    state::State,
};

/// Build the application router with all middleware attached.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(request_logging)
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("{id}").get(products::get::handler)),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(Router::with_path("{id}").get(orders::get::handler)),
        )
}
