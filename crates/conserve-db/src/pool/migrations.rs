//! Schema migrations
//!
//! Migrations are read from disk at runtime; the crate does not enable the
//! SQLx macros feature. Deployed binaries point `DATABASE_MIGRATIONS_DIR` at
//! a copy of `crates/conserve-db/migrations`.

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPool;
use tracing::info;

/// Migration directory of the source checkout this crate was built from
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply all pending migrations found in `dir`
pub async fn run_migrations(pool: &PgPool, dir: &Path) -> Result<(), MigrateError> {
    let migrator = Migrator::new(dir).await?;
    info!(
        dir = %dir.display(),
        count = migrator.iter().count(),
        "Applying database migrations"
    );
    migrator.run(pool).await
}

/// Directory to read migrations from, preferring a configured one
pub fn migrations_dir(configured: Option<&str>) -> &Path {
    Path::new(configured.unwrap_or(MIGRATIONS_DIR))
}
