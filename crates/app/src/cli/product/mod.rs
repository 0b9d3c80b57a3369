use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use storefront_app::{
    database::{self, Db, PoolSettings},
    domain::products::{PgProductsService, ProductsService, models::NewProduct},
};

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Insert a product into the catalogue.
    Create(CreateProductArgs),
}

#[derive(Debug, Args)]
struct CreateProductArgs {
    /// Product display name
    #[arg(long)]
    name: String,

    /// Unit price, e.g. 9.99
    #[arg(long)]
    price: Decimal,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(command: ProductCommand) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Create(args) => create_product(args).await,
    }
}

async fn create_product(args: CreateProductArgs) -> Result<(), String> {
    let pool = database::connect(&args.database.database_url, PoolSettings::default())
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let product = PgProductsService::new(Db::new(pool))
        .create_product(NewProduct {
            name: args.name,
            price: args.price,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_id: {}", product.id);
    println!("product_name: {}", product.name);
    println!("product_price: {}", product.price);

    Ok(())
}
