//! # conserve-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `conserve-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use conserve_db::pool::{create_pool, DatabaseConfig};
//! use conserve_db::repositories::PgCampaignRepository;
//! use conserve_core::traits::CampaignRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let campaigns = PgCampaignRepository::new(pool);
//!
//!     let listing = campaigns.find_all_with_owner().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{
    create_pool, create_pool_from_env, migrations_dir, run_migrations, DatabaseConfig, PgPool,
    MIGRATIONS_DIR,
};
pub use repositories::{
    PgCampaignRepository, PgCampaignUpdateRepository, PgCommentRepository,
    PgConnectionRepository, PgReportRepository, PgUserRepository,
};
