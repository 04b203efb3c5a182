//! Skilled impact request - a campaign's call for volunteers with a given skill

/// Skilled impact request row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkilledImpactRequest {
    pub id: i32,
    pub campaign_id: i32,
    pub skill: String,
    pub point_of_contact: Option<String>,
    pub welcome_message: Option<String>,
    pub our_contribution: Option<String>,
}
