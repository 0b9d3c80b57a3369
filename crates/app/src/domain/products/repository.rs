//! Products Repository

use sqlx::{
    FromRow, Postgres, Row,
    postgres::{PgArguments, PgRow},
    query::QueryAs,
};

use crate::domain::{
    products::models::{NewProduct, Product, ProductId},
    repository::{PgRepository, Record},
};

pub(crate) type PgProductsRepository = PgRepository<Product>;

impl Record for Product {
    type New = NewProduct;

    const NAME: &'static str = "product";
    const CREATE_SQL: &'static str = include_str!("sql/create_product.sql");
    const GET_SQL: &'static str = include_str!("sql/get_product.sql");
    const LIST_SQL: &'static str = include_str!("sql/list_products.sql");

    fn bind_new(
        query: QueryAs<'static, Postgres, Self, PgArguments>,
        new: NewProduct,
    ) -> QueryAs<'static, Postgres, Self, PgArguments> {
        query.bind(new.name).bind(new.price)
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
        })
    }
}
