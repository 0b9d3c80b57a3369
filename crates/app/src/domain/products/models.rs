//! Product Models

use rust_decimal::Decimal;

use crate::{domain::products::errors::ProductsServiceError, ids::TypedId};

/// Longest accepted product name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Number of decimal places a price may carry.
pub const PRICE_SCALE: u32 = 2;

/// Largest price the `NUMERIC(12, 2)` column holds.
// 999_999_999_999 (0xE8_D4A5_0FFF) at PRICE_SCALE; `Decimal::new` is not const.
pub const MAX_PRICE: Decimal = Decimal::from_parts(0xD4A5_0FFF, 0xE8, 0, false, PRICE_SCALE);

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
}

impl NewProduct {
    /// Check the name and price bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::InvalidName`] for a blank or overlong
    /// name and [`ProductsServiceError::InvalidPrice`] for a price that is
    /// negative, above [`MAX_PRICE`] or has more than two decimal places.
    pub fn validate(&self) -> Result<(), ProductsServiceError> {
        if self.name.trim().is_empty() || self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(ProductsServiceError::InvalidName);
        }

        if self.price < Decimal::ZERO || self.price > MAX_PRICE {
            return Err(ProductsServiceError::InvalidPrice);
        }

        if self.price.round_dp(PRICE_SCALE) != self.price {
            return Err(ProductsServiceError::InvalidPrice);
        }

        Ok(())
    }
}
