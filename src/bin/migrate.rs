use axum_storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "migrations".to_string());
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    let applied = run_migrations(&orm, &dir).await?;
    println!("Applied {applied} migration files from {dir}");
    Ok(())
}
