//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Campaign Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_campaign() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = seed_organization(server.pool(), "Delta Trust").await.unwrap();

    let request = CreateCampaignRequest::unique(owner);
    let response = server.post("/api/v1/campaigns", &request).await.unwrap();
    let created: CampaignDetail = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.campaign.name, request.name);
    assert_eq!(created.campaign.org_name.as_deref(), Some("Delta Trust"));
    assert!(created.updates.is_empty());
    assert!(created.comments.is_empty());
    assert!(created.skilled_impact_requests.is_empty());

    let response = server
        .get(&format!("/api/v1/campaigns/{}", created.campaign.id))
        .await
        .unwrap();
    let fetched: CampaignDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.campaign.id, created.campaign.id);
    assert_eq!(fetched.campaign.location.as_deref(), Some("Nairobi"));
}

#[tokio::test]
async fn test_create_campaign_unknown_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateCampaignRequest::unique(i32::MAX);

    let response = server.post("/api/v1/campaigns", &request).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_get_campaign_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/campaigns/2147483647").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/api/v1/campaigns/2147483647/summary").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_campaign_feed_hides_deactivated() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = server.pool();
    let owner = seed_organization(pool, "Reef Watch").await.unwrap();
    let fan = seed_supporter(pool, "Ada").await.unwrap();
    let gone_owner = seed_organization(pool, "Closed Org").await.unwrap();

    let response = server
        .post("/api/v1/campaigns", &CreateCampaignRequest::unique(owner))
        .await
        .unwrap();
    let visible: CampaignDetail = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/v1/campaigns", &CreateCampaignRequest::unique(gone_owner))
        .await
        .unwrap();
    let hidden: CampaignDetail = assert_json(response, StatusCode::CREATED).await.unwrap();
    deactivate_user(pool, gone_owner).await.unwrap();

    let shown = seed_comment(pool, visible.campaign.id, fan, "Count me in", false)
        .await
        .unwrap();
    seed_comment(pool, visible.campaign.id, fan, "removed", true)
        .await
        .unwrap();

    let response = server.get("/api/v1/campaigns").await.unwrap();
    let feed: Vec<CampaignWithComments> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(feed.iter().all(|entry| entry.campaign.id != hidden.campaign.id));
    let entry = feed
        .iter()
        .find(|entry| entry.campaign.id == visible.campaign.id)
        .expect("campaign missing from feed");
    assert_eq!(entry.comments.len(), 1);
    assert_eq!(entry.comments[0].id, shown);
    assert_eq!(entry.comments[0].name, "Ada");
}

#[tokio::test]
async fn test_update_campaign() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = seed_organization(server.pool(), "Tidal").await.unwrap();

    let response = server
        .post("/api/v1/campaigns", &CreateCampaignRequest::unique(owner))
        .await
        .unwrap();
    let created: CampaignDetail = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/campaigns/{}", created.campaign.id);

    let changes = UpdateCampaignRequest {
        urgency: Some("Critical".to_string()),
        ..Default::default()
    };
    let response = server.put(&path, &changes).await.unwrap();
    let updated: CampaignDetail = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.campaign.urgency.as_deref(), Some("Critical"));
    assert_eq!(updated.campaign.name, created.campaign.name);

    let response = server.put(&path, &UpdateCampaignRequest::default()).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_campaign() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = seed_organization(server.pool(), "Forest Keepers").await.unwrap();

    let response = server
        .post("/api/v1/campaigns", &CreateCampaignRequest::unique(owner))
        .await
        .unwrap();
    let created: CampaignDetail = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/campaigns/{}", created.campaign.id);

    let response = server.delete(&path).await.unwrap();
    let deleted: DeletedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.id, created.campaign.id);

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_user_campaigns() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = seed_organization(server.pool(), "River Guard").await.unwrap();

    for _ in 0..2 {
        let response = server
            .post("/api/v1/campaigns", &CreateCampaignRequest::unique(owner))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/users/{owner}/campaigns"))
        .await
        .unwrap();
    let campaigns: Vec<UserCampaign> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(campaigns.len(), 2);
    assert!(campaigns.iter().all(|c| c.campaign.user_id == owner));
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_user_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = seed_supporter(server.pool(), "Grace").await.unwrap();

    let response = server.get(&format!("/api/v1/users/{user}")).await.unwrap();
    let profile: UserProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.id, user);
    assert_eq!(profile.name.as_deref(), Some("Grace"));
    assert_eq!(profile.location.as_deref(), Some("Nairobi"));
}

// ============================================================================
// Connection Tests
// ============================================================================

#[tokio::test]
async fn test_connection_guard() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = server.pool();
    let alice = seed_user(pool).await.unwrap();
    let bob = seed_user(pool).await.unwrap();
    let path = format!("/api/v1/users/{alice}/connections");
    let body = CreateConnectionRequest { connected_id: bob };

    let response = server.post(&path, &body).await.unwrap();
    let created: ConnectionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.user_id, alice);
    assert_eq!(created.connected_id, bob);
    assert_eq!(created.status, "pending");

    // Same direction again is rejected
    let response = server.post(&path, &body).await.unwrap();
    let error: serde_json::Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error["error"]["code"], "ALREADY_CONNECTED");
    assert_eq!(error["error"]["message"], "Users are already connected");

    // Reverse direction is a separate connection
    let response = server
        .post(
            &format!("/api/v1/users/{bob}/connections"),
            &CreateConnectionRequest { connected_id: alice },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&path).await.unwrap();
    let connections: Vec<ConnectionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(connections.len(), 1);
}

#[tokio::test]
async fn test_self_connection_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = seed_user(server.pool()).await.unwrap();

    let response = server
        .post(
            &format!("/api/v1/users/{user}/connections"),
            &CreateConnectionRequest { connected_id: user },
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "SELF_CONNECTION");
}

#[tokio::test]
async fn test_delete_connection() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = server.pool();
    let alice = seed_user(pool).await.unwrap();
    let bob = seed_user(pool).await.unwrap();

    let response = server
        .post(
            &format!("/api/v1/users/{alice}/connections"),
            &CreateConnectionRequest { connected_id: bob },
        )
        .await
        .unwrap();
    let created: ConnectionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/connections/{}", created.id);
    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Report Tests
// ============================================================================

#[tokio::test]
async fn test_report_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let reporter = seed_user(server.pool()).await.unwrap();

    let request = CreateReportRequest {
        reported_by: reporter,
        post_id: 7,
        table_name: "comments".to_string(),
        report_desc: Some("spam".to_string()),
    };
    let response = server.post("/api/v1/reports", &request).await.unwrap();
    let created: ReportResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.reported_by, reporter);
    assert_eq!(created.post_id, 7);
    assert_eq!(created.table_name, "comments");

    let path = format!("/api/v1/reports/{}", created.id);
    let response = server.get(&path).await.unwrap();
    let fetched: ReportResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.report_desc.as_deref(), Some("spam"));

    let response = server.get("/api/v1/reports").await.unwrap();
    let reports: Vec<ReportResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(reports.iter().any(|r| r.id == created.id));

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_report_unknown_table() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let reporter = seed_user(server.pool()).await.unwrap();

    let request = CreateReportRequest {
        reported_by: reporter,
        post_id: 1,
        table_name: "donations".to_string(),
        report_desc: None,
    };
    let response = server.post("/api/v1/reports", &request).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "UNKNOWN_REPORTED_TABLE");
}
