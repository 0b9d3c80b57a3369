//! Order pricing.

use rust_decimal::Decimal;

/// Largest total the `NUMERIC(14, 2)` column holds.
// 99_999_999_999_999 (0x5AF3_107A_3FFF) at scale 2; `Decimal::new` is not const.
pub const MAX_TOTAL_PRICE: Decimal = Decimal::from_parts(0x107A_3FFF, 0x5AF3, 0, false, 2);

/// Price of `quantity` units at `unit_price`.
///
/// Returns `None` when the total cannot be stored.
#[must_use]
pub fn total_price(unit_price: Decimal, quantity: i32) -> Option<Decimal> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .filter(|total| *total <= MAX_TOTAL_PRICE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies_unit_price_by_quantity() {
        assert_eq!(
            total_price(Decimal::new(1000, 2), 3),
            Some(Decimal::new(3000, 2))
        );
    }

    #[test]
    fn keeps_cents_exact() {
        assert_eq!(
            total_price(Decimal::new(999, 2), 3),
            Some(Decimal::new(2997, 2))
        );
        assert_eq!(
            total_price(Decimal::new(10, 2), 7),
            Some(Decimal::new(70, 2))
        );
    }

    #[test]
    fn free_products_total_zero() {
        assert_eq!(total_price(Decimal::ZERO, 42), Some(Decimal::ZERO));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(total_price(Decimal::MAX, 2), None);
    }

    #[test]
    fn totals_beyond_the_column_are_rejected() {
        let most_expensive = Decimal::new(999_999_999_999, 2);

        assert_eq!(total_price(most_expensive, 1000), None);
        assert_eq!(
            total_price(most_expensive, 100),
            Some(Decimal::new(99_999_999_999_900, 2))
        );
    }

    #[test]
    fn total_at_the_column_limit_is_accepted() {
        assert_eq!(
            total_price(Decimal::new(99_999_999_999_999, 2), 1),
            Some(MAX_TOTAL_PRICE)
        );
    }
}
