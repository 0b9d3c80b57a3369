//! Order Models

use rust_decimal::Decimal;

use crate::{
    domain::{orders::errors::OrdersServiceError, products::models::ProductId},
    ids::TypedId,
};

/// Order Id
pub type OrderId = TypedId<Order>;

/// Order Model
///
/// `total_price` is fixed when the order is placed and does not follow later
/// changes to the product's price.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub total_price: Decimal,
}

/// New Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub product_id: ProductId,
    pub quantity: i32,
}

impl NewOrder {
    /// # Errors
    ///
    /// Returns [`OrdersServiceError::InvalidQuantity`] unless at least one
    /// unit is ordered.
    pub fn validate(&self) -> Result<(), OrdersServiceError> {
        if self.quantity < 1 {
            return Err(OrdersServiceError::InvalidQuantity);
        }

        Ok(())
    }
}

/// Order row as written to the store, priced at creation time.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PricedOrder {
    pub(crate) product_id: ProductId,
    pub(crate) quantity: i32,
    pub(crate) total_price: Decimal,
}
