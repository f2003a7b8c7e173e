//! E2E tests using the mock PagerDuty server.
//!
//! These tests exercise full workflows against the stateful mock server
//! rather than individual canned responses.

#![cfg(feature = "test-server")]

use pdapi::mock_server::{Fixtures, MockServer, MockState};
use pdapi::{
    Create, Delete, Get, List, PagerDutyClient, PagerDutyError, Priority, Service,
    ServiceOrchestrationStatus, Team, TeamMember, Update, User, UserInfo, Vendor,
};

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    let client = reqwest::Client::new();
    let result = client.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Read Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_list_and_get_service_workflow() {
    let server = MockServer::start().await;
    let client = PagerDutyClient::new("test-token", server.url()).unwrap();

    let services = Service::list_all(&client, &()).await.unwrap();
    assert_eq!(services.len(), 2);

    let service = Service::get(&client, services[0].id()).await.unwrap();
    assert_eq!(service, services[0]);

    server.shutdown().await;
}

#[tokio::test]
async fn test_team_and_member_workflow() {
    let server = MockServer::start().await;
    let client = PagerDutyClient::new("test-token", server.url()).unwrap();

    let teams = Team::list_all(&client, &()).await.unwrap();
    assert_eq!(teams.len(), 1);
    let team = Team::get(&client, teams[0].id()).await.unwrap();
    assert_eq!(team.name, "Engineering");

    let members = TeamMember::list_all(&client, teams[0].id()).await.unwrap();
    let managers: Vec<_> = members.iter().filter(|m| m.is_manager()).collect();
    assert_eq!(managers.len(), 1);

    // Each member resolves to a full user
    for member in &members {
        let user = User::get(&client, &member.user.id).await.unwrap();
        assert_eq!(Some(&user.info.name), member.user.summary.as_ref());
    }

    let err = TeamMember::list_all(&client, "PNOTEAM").await.unwrap_err();
    assert!(err.is_not_found());

    server.shutdown().await;
}

#[tokio::test]
async fn test_catalog_endpoints() {
    let server = MockServer::start().await;
    let client = PagerDutyClient::new("test-token", server.url()).unwrap();

    let vendors = Vendor::list_all(&client, &()).await.unwrap();
    assert_eq!(vendors.len(), 2);
    let vendor = Vendor::get(&client, vendors[1].reference.id.as_str())
        .await
        .unwrap();
    assert_eq!(vendor.name, "Prometheus");

    let priorities = Priority::list_all(&client, &()).await.unwrap();
    let names: Vec<_> = priorities.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["P1", "P2"]);

    server.shutdown().await;
}

#[tokio::test]
async fn test_pagination_across_many_pages() {
    let mut state = MockState::new();
    for service in Fixtures::numbered_services(305) {
        state = state.with_service(service);
    }
    let server = MockServer::with_state(state).await;
    let client = PagerDutyClient::new("test-token", server.url()).unwrap();

    let first = Service::list_page(&client, &(), 0, 100).await.unwrap();
    assert_eq!(first.len(), 100);
    assert!(first.more);

    let last = Service::list_page(&client, &(), 300, 100).await.unwrap();
    assert_eq!(last.len(), 5);
    assert!(!last.more);

    let all = Service::list_all(&client, &()).await.unwrap();
    assert_eq!(all.len(), 305);

    server.shutdown().await;
}

// =============================================================================
// Write Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_user_lifecycle() {
    let server = MockServer::start().await;
    let client = PagerDutyClient::new("test-token", server.url()).unwrap();

    // Create
    let created = User::create(&client, &(), &UserInfo::new("Ann Lee", "ann@example.com"))
        .await
        .unwrap();
    assert_eq!(created.info.name, "Ann Lee");

    let users = User::list_all(&client, &()).await.unwrap();
    assert_eq!(users.len(), 3);

    // Update
    let mut info = created.info();
    info.job_title = Some("SRE".to_string());
    let updated = User::update(&client, created.id(), &info).await.unwrap();
    assert_eq!(updated.info.job_title.as_deref(), Some("SRE"));

    let fetched = User::get(&client, created.id()).await.unwrap();
    assert_eq!(fetched.info.job_title.as_deref(), Some("SRE"));

    // Delete
    User::delete(&client, created.id()).await.unwrap();
    let err = User::get(&client, created.id()).await.unwrap_err();
    assert!(err.is_not_found());

    let err = User::delete(&client, created.id()).await.unwrap_err();
    assert!(err.is_not_found());

    server.shutdown().await;
}

#[tokio::test]
async fn test_orchestration_toggle() {
    let server = MockServer::start().await;
    let client = PagerDutyClient::new("test-token", server.url()).unwrap();

    let status = ServiceOrchestrationStatus::get(&client, "PSVC002")
        .await
        .unwrap();
    assert!(!status.active);

    ServiceOrchestrationStatus::update(
        &client,
        "PSVC002",
        &ServiceOrchestrationStatus { active: true },
    )
    .await
    .unwrap();

    let status = ServiceOrchestrationStatus::get(&client, "PSVC002")
        .await
        .unwrap();
    assert!(status.active);

    server.shutdown().await;
}

// =============================================================================
// Authentication Tests
// =============================================================================

#[tokio::test]
async fn test_wrong_token_is_unauthorized() {
    let state = MockServer::default_state().with_required_token("right-token");
    let server = MockServer::with_state(state).await;

    let client = PagerDutyClient::new("wrong-token", server.url()).unwrap();
    let err = Service::list_all(&client, &()).await.unwrap_err();
    match err {
        PagerDutyError::Status { message, status } => {
            assert_eq!(status, 401);
            assert_eq!(message.as_deref(), Some("Unauthorized"));
        }
        other => panic!("expected status error, got {other:?}"),
    }

    let client = PagerDutyClient::new("right-token", server.url()).unwrap();
    assert_eq!(Service::list_all(&client, &()).await.unwrap().len(), 2);

    server.shutdown().await;
}

#[tokio::test]
async fn test_server_state_is_shared_with_test() {
    let server = MockServer::start().await;
    let client = PagerDutyClient::new("test-token", server.url()).unwrap();

    server
        .state()
        .write()
        .await
        .services
        .insert("PSVC777".to_string(), Fixtures::service("PSVC777", "Search"));

    let service = Service::get(&client, "PSVC777").await.unwrap();
    assert_eq!(service.name, "Search");

    server.shutdown().await;
}
