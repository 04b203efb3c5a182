//! PostgreSQL implementation of CampaignRepository

use async_trait::async_trait;
use sqlx::{Executor, PgConnection, PgPool, Postgres, QueryBuilder};
use tracing::{debug, instrument};

use conserve_core::entities::{
    CampaignChanges, CampaignRecord, CampaignWithOwner, NewCampaign, SkilledImpactRequest,
};
use conserve_core::error::DomainError;
use conserve_core::traits::{CampaignRepository, RepoResult};

use crate::models::{CampaignWithOwnerModel, SkilledImpactRequestModel};

use super::error::{map_db_error, map_foreign_key_violation};
use super::{comment, update};

/// PostgreSQL implementation of CampaignRepository
#[derive(Clone)]
pub struct PgCampaignRepository {
    pool: PgPool,
}

impl PgCampaignRepository {
    /// Create a new PgCampaignRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn fetch_with_owner<'e, E>(executor: E, id: i32) -> RepoResult<Option<CampaignWithOwner>>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query_as::<_, CampaignWithOwnerModel>(
        r"
        SELECT c.id, c.user_id, c.name, c.description, c.image, c.call_to_action, c.urgency,
               c.created_at, c.updated_at,
               u.profile_image, u.location, o.name AS org_name,
               u.is_deactivated AS owner_deactivated
        FROM campaigns c
        JOIN users u ON u.id = c.user_id
        LEFT JOIN conservationists o ON o.user_id = c.user_id
        WHERE c.id = $1
        ",
    )
    .bind(id)
    .fetch_optional(executor)
    .await
    .map_err(map_db_error)?;

    Ok(result.map(CampaignWithOwner::from))
}

async fn fetch_skilled_impact_requests<'e, E>(
    executor: E,
    campaign_id: i32,
) -> RepoResult<Vec<SkilledImpactRequest>>
where
    E: Executor<'e, Database = Postgres>,
{
    let results = sqlx::query_as::<_, SkilledImpactRequestModel>(
        r"
        SELECT id, campaign_id, skill, point_of_contact, welcome_message, our_contribution
        FROM skilled_impact_requests
        WHERE campaign_id = $1
        ORDER BY id
        ",
    )
    .bind(campaign_id)
    .fetch_all(executor)
    .await
    .map_err(map_db_error)?;

    Ok(results.into_iter().map(SkilledImpactRequest::from).collect())
}

/// Load the base campaign, then its three collections, on one connection.
async fn load_record(conn: &mut PgConnection, id: i32) -> RepoResult<Option<CampaignRecord>> {
    let Some(campaign) = fetch_with_owner(&mut *conn, id).await? else {
        return Ok(None);
    };

    let updates = update::fetch_by_campaign(&mut *conn, id).await?;
    let comments = comment::fetch_by_campaign(&mut *conn, id).await?;
    let skilled_impact_requests = fetch_skilled_impact_requests(&mut *conn, id).await?;

    Ok(Some(CampaignRecord {
        campaign,
        updates,
        comments,
        skilled_impact_requests,
    }))
}

/// Build the `UPDATE` for the fields present in `changes`.
///
/// Absent fields are left out of the `SET` list; a present `None` writes NULL.
fn update_query(id: i32, changes: &CampaignChanges) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("UPDATE campaigns SET ");

    {
        let mut set = query.separated(", ");
        if let Some(name) = &changes.name {
            set.push("name = ").push_bind_unseparated(name.clone());
        }
        let nullable = [
            ("description", &changes.description),
            ("image", &changes.image),
            ("call_to_action", &changes.call_to_action),
            ("urgency", &changes.urgency),
        ];
        for (column, value) in nullable {
            if let Some(value) = value {
                set.push(format!("{column} = "))
                    .push_bind_unseparated(value.clone());
            }
        }
        set.push("updated_at = NOW()");
    }

    query.push(" WHERE id = ").push_bind(id);
    query
}

#[async_trait]
impl CampaignRepository for PgCampaignRepository {
    #[instrument(skip(self))]
    async fn find_all_with_owner(&self) -> RepoResult<Vec<CampaignWithOwner>> {
        let results = sqlx::query_as::<_, CampaignWithOwnerModel>(
            r"
            SELECT c.id, c.user_id, c.name, c.description, c.image, c.call_to_action, c.urgency,
                   c.created_at, c.updated_at,
                   u.profile_image, u.location, o.name AS org_name,
                   u.is_deactivated AS owner_deactivated
            FROM campaigns c
            JOIN users u ON u.id = c.user_id
            LEFT JOIN conservationists o ON o.user_id = c.user_id
            ORDER BY c.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CampaignWithOwner::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_with_owner(&self, id: i32) -> RepoResult<Option<CampaignWithOwner>> {
        fetch_with_owner(&self.pool, id).await
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i32) -> RepoResult<Vec<CampaignWithOwner>> {
        let results = sqlx::query_as::<_, CampaignWithOwnerModel>(
            r"
            SELECT c.id, c.user_id, c.name, c.description, c.image, c.call_to_action, c.urgency,
                   c.created_at, c.updated_at,
                   u.profile_image, u.location, o.name AS org_name,
                   u.is_deactivated AS owner_deactivated
            FROM campaigns c
            JOIN users u ON u.id = c.user_id
            LEFT JOIN conservationists o ON o.user_id = c.user_id
            WHERE c.user_id = $1
            ORDER BY c.created_at DESC, c.id DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CampaignWithOwner::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_record(&self, id: i32) -> RepoResult<Option<CampaignRecord>> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        load_record(&mut conn, id).await
    }

    #[instrument(skip(self, campaign), fields(user_id = campaign.user_id))]
    async fn create(&self, campaign: &NewCampaign) -> RepoResult<CampaignRecord> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO campaigns (user_id, name, description, image, call_to_action, urgency)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(campaign.user_id)
        .bind(&campaign.name)
        .bind(&campaign.description)
        .bind(&campaign.image)
        .bind(&campaign.call_to_action)
        .bind(&campaign.urgency)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_foreign_key_violation(e, |_| DomainError::UserNotFound(campaign.user_id)))?;

        let record = load_record(&mut tx, id).await?.ok_or_else(|| {
            DomainError::InternalError(format!("campaign {id} missing after insert"))
        })?;

        tx.commit().await.map_err(map_db_error)?;
        debug!(campaign_id = id, "Campaign inserted");

        Ok(record)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i32, changes: &CampaignChanges) -> RepoResult<Option<CampaignRecord>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = update_query(id, changes)
            .build()
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(None);
        }

        let record = load_record(&mut tx, id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(record)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM campaigns WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
