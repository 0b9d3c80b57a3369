//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{
        orders::{
            MockOrdersService,
            models::{Order, OrderId},
        },
        products::{
            MockProductsService,
            models::{Product, ProductId},
        },
    },
};

use crate::state::State;

pub(crate) fn make_product(id: i64, name: &str, price: Decimal) -> Product {
    Product {
        id: ProductId::from_i64(id),
        name: name.to_string(),
        price,
    }
}

pub(crate) fn make_order(id: i64, product: i64, quantity: i32, total_price: Decimal) -> Order {
    Order {
        id: OrderId::from_i64(id),
        product_id: ProductId::from_i64(product),
        quantity,
        total_price,
    }
}

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();

    products
}

pub(crate) fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_list_orders().never();
    orders.expect_get_order().never();
    orders.expect_create_order().never();

    orders
}

pub(crate) fn state_with(products: MockProductsService, orders: MockOrdersService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        orders: Arc::new(orders),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(products, strict_orders_mock())))
            .push(route),
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(strict_products_mock(), orders)))
            .push(route),
    )
}
