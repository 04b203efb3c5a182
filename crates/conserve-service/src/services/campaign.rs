//! Campaign service
//!
//! Assembles the display-ready campaign views: owner and organization fields
//! joined on, comments attached with resolved author names, and soft-deleted
//! content hidden.

use futures::future::try_join_all;
use tracing::{debug, info, instrument, warn};

use conserve_core::aggregation::{build_campaign_feed, visible_comments};
use conserve_core::entities::{CampaignChanges, NewCampaign};
use conserve_core::{CampaignDetail, DomainError, UserCampaign};

use crate::dto::{
    CampaignDetailResponse, CampaignResponse, CampaignWithCommentsResponse,
    CreateCampaignRequest, UpdateCampaignRequest, UserCampaignResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Campaign service
pub struct CampaignService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CampaignService<'a> {
    /// Create a new CampaignService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every campaign whose owner is active, each with its visible comments.
    ///
    /// Any store failure is reported as [`ServiceError::CampaignListing`].
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<CampaignWithCommentsResponse>> {
        let campaigns = self
            .ctx
            .campaign_repo()
            .find_all_with_owner()
            .await
            .map_err(ServiceError::campaign_listing)?;
        let comments = self
            .ctx
            .comment_repo()
            .find_all_with_author()
            .await
            .map_err(ServiceError::campaign_listing)?;
        let users = self
            .ctx
            .user_repo()
            .find_all()
            .await
            .map_err(ServiceError::campaign_listing)?;

        let feed = build_campaign_feed(campaigns, comments, &users);
        debug!(count = feed.len(), "Campaign listing assembled");

        Ok(feed.into_iter().map(Into::into).collect())
    }

    /// Get a campaign with owner fields, or `None` when it does not exist
    #[instrument(skip(self))]
    pub async fn find_one(&self, id: i32) -> ServiceResult<Option<CampaignResponse>> {
        let campaign = self.ctx.campaign_repo().find_with_owner(id).await?;
        Ok(campaign.map(CampaignResponse::from))
    }

    /// Get a campaign with its updates, visible comments and skilled impact requests
    #[instrument(skip(self))]
    pub async fn find_by_id_full(&self, id: i32) -> ServiceResult<CampaignDetailResponse> {
        let record = self
            .ctx
            .campaign_repo()
            .find_record(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Campaign", id))?;

        Ok(CampaignDetail::from(record).into())
    }

    /// List a user's campaigns, each with updates and visible comments.
    ///
    /// Enrichment queries for all campaigns run concurrently; the first
    /// failure aborts the whole call.
    #[instrument(skip(self))]
    pub async fn find_by_user(&self, user_id: i32) -> ServiceResult<Vec<UserCampaignResponse>> {
        let campaigns = self.ctx.campaign_repo().find_by_user(user_id).await?;

        let enriched = try_join_all(campaigns.into_iter().map(|campaign| async move {
            let id = campaign.id();
            let (updates, comments) = tokio::try_join!(
                self.ctx.update_repo().find_by_campaign(id),
                self.ctx.comment_repo().find_by_campaign(id),
            )?;

            Ok::<_, DomainError>(UserCampaign {
                campaign,
                updates,
                comments: visible_comments(comments),
            })
        }))
        .await?;

        Ok(enriched.into_iter().map(Into::into).collect())
    }

    /// Create a campaign and return its full view
    #[instrument(skip(self, request), fields(user_id = request.user_id))]
    pub async fn insert(&self, request: CreateCampaignRequest) -> ServiceResult<CampaignDetailResponse> {
        let campaign = NewCampaign::from(request);
        let record = self.ctx.campaign_repo().create(&campaign).await?;

        info!(campaign_id = record.campaign.id(), "Campaign created");

        Ok(CampaignDetail::from(record).into())
    }

    /// Update a campaign and return its refreshed full view
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i32,
        request: UpdateCampaignRequest,
    ) -> ServiceResult<CampaignDetailResponse> {
        let changes = CampaignChanges::from(request);
        if changes.is_empty() {
            return Err(ServiceError::validation("No campaign fields to update"));
        }

        let record = self
            .ctx
            .campaign_repo()
            .update(id, &changes)
            .await?
            .ok_or_else(|| ServiceError::not_found("Campaign", id))?;

        info!(campaign_id = id, "Campaign updated");

        Ok(CampaignDetail::from(record).into())
    }

    /// Delete a campaign.
    ///
    /// Returns the deleted id, or `0` when nothing was deleted.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: i32) -> ServiceResult<i32> {
        let deleted = self.ctx.campaign_repo().delete(id).await?;

        if deleted == 0 {
            warn!(campaign_id = id, "No campaign deleted");
            return Ok(0);
        }

        info!(campaign_id = id, "Campaign deleted");
        Ok(id)
    }
}
