use std::error::Error;

use catalog_admin::db::establish_connection_pool;
use catalog_admin::models::config::ServerConfig;
use catalog_admin::repository::{CategorySearchQuery, DieselRepository};
use catalog_admin::services::categories::list_categories;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    let config_path =
        std::env::var("CATALOG_CONFIG").unwrap_or_else(|_| "config/default".to_string());
    let server_config = ServerConfig::load(&config_path)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(server_config.log_level.as_str()),
    )
    .init();

    let pool = establish_connection_pool(&server_config.database_url)?;
    {
        let mut conn = pool.get()?;
        let applied = conn.run_pending_migrations(MIGRATIONS)?;
        log::info!("Applied {} pending migrations", applied.len());
    }

    let repo = DieselRepository::new(pool);
    let page = list_categories(&CategorySearchQuery::default(), &repo)?;
    log::info!(
        "Catalog ready at {} with {} categories across {} pages",
        server_config.database_url,
        page.total,
        page.total_pages()
    );

    Ok(())
}
