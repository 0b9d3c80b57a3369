//! Orders Repository

use sqlx::{
    FromRow, Postgres, Row,
    postgres::{PgArguments, PgRow},
    query::QueryAs,
};

use crate::domain::{
    orders::models::{Order, OrderId, PricedOrder},
    products::models::ProductId,
    repository::{PgRepository, Record},
};

pub(crate) type PgOrdersRepository = PgRepository<Order>;

impl Record for Order {
    type New = PricedOrder;

    const NAME: &'static str = "order";
    const CREATE_SQL: &'static str = include_str!("sql/create_order.sql");
    const GET_SQL: &'static str = include_str!("sql/get_order.sql");
    const LIST_SQL: &'static str = include_str!("sql/list_orders.sql");

    fn bind_new(
        query: QueryAs<'static, Postgres, Self, PgArguments>,
        new: PricedOrder,
    ) -> QueryAs<'static, Postgres, Self, PgArguments> {
        query
            .bind(new.product_id.into_i64())
            .bind(new.quantity)
            .bind(new.total_price)
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: OrderId::from_i64(row.try_get("id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            quantity: row.try_get("quantity")?,
            total_price: row.try_get("total_price")?,
        })
    }
}
