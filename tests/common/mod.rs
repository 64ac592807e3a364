//! Shared fixtures for the SQLite-backed tests.

use catalog_admin::db::{DbPool, establish_connection_pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Migrated catalog database living in its own scratch directory.
///
/// The directory is removed once the value is dropped.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("scratch directory");
        let path = dir.path().join("catalog.db");
        let database_url = path.to_str().expect("utf-8 database path");

        let pool = establish_connection_pool(database_url).expect("catalog pool");
        pool.get()
            .expect("catalog connection")
            .run_pending_migrations(MIGRATIONS)
            .expect("catalog migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
