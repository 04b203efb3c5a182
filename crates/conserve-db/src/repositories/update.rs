//! PostgreSQL implementation of CampaignUpdateRepository

use async_trait::async_trait;
use sqlx::{Executor, PgPool, Postgres};
use tracing::instrument;

use conserve_core::entities::CampaignUpdate;
use conserve_core::traits::{CampaignUpdateRepository, RepoResult};

use crate::models::CampaignUpdateModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CampaignUpdateRepository
#[derive(Clone)]
pub struct PgCampaignUpdateRepository {
    pool: PgPool,
}

impl PgCampaignUpdateRepository {
    /// Create a new PgCampaignUpdateRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(super) async fn fetch_by_campaign<'e, E>(
    executor: E,
    campaign_id: i32,
) -> RepoResult<Vec<CampaignUpdate>>
where
    E: Executor<'e, Database = Postgres>,
{
    let results = sqlx::query_as::<_, CampaignUpdateModel>(
        r"
        SELECT id, campaign_id, user_id, description, image, created_at
        FROM campaign_updates
        WHERE campaign_id = $1
        ORDER BY created_at, id
        ",
    )
    .bind(campaign_id)
    .fetch_all(executor)
    .await
    .map_err(map_db_error)?;

    Ok(results.into_iter().map(CampaignUpdate::from).collect())
}

#[async_trait]
impl CampaignUpdateRepository for PgCampaignUpdateRepository {
    #[instrument(skip(self))]
    async fn find_by_campaign(&self, campaign_id: i32) -> RepoResult<Vec<CampaignUpdate>> {
        fetch_by_campaign(&self.pool, campaign_id).await
    }
}
