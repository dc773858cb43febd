use axum_storefront_api::{
    catalog::demo,
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::products,
};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm, "migrations").await?;

    let existing = products::Entity::find().count(&orm).await?;
    if existing > 0 {
        println!("Products already seeded ({existing} rows)");
        return Ok(());
    }

    let shelf = demo::shower_heads();
    let count = shelf.len();
    for product in shelf {
        let active = products::ActiveModel {
            id: Set(product.id),
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            sale_price: Set(product.sale_price),
            category: Set(product.category),
            finish: Set(product.finish.as_str().to_string()),
            image_url: Set(product.image_url),
            is_new: Set(product.is_new),
            rating: Set(product.rating),
            reviews_count: Set(product.reviews_count),
            in_stock: Set(product.in_stock),
            created_at: Set(product.created_at.into()),
            updated_at: Set(product.created_at.into()),
        };
        active.insert(&orm).await?;
    }

    println!("Seeded {count} products");
    Ok(())
}
