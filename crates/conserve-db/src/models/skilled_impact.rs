//! Skilled impact request database model

use sqlx::FromRow;

/// Database model for skilled_impact_requests table
#[derive(Debug, Clone, FromRow)]
pub struct SkilledImpactRequestModel {
    pub id: i32,
    pub campaign_id: i32,
    pub skill: String,
    pub point_of_contact: Option<String>,
    pub welcome_message: Option<String>,
    pub our_contribution: Option<String>,
}
