//! Resource trait tests: envelopes, paths and request bodies per endpoint.

use pdapi::{
    create_integration, Create, Delete, EscalationPolicy, Get, List, PagerDutyClient,
    ResponsePlay, ResponsePlayQuery, Service, ServiceOrchestration, ServiceOrchestrationStatus,
    TeamMember, Update, User, UserInfo, UserRole, Vendor,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> PagerDutyClient {
    PagerDutyClient::new("test-token", &server.uri()).unwrap()
}

fn service_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "type": "service",
        "summary": name,
        "self": format!("https://api.pagerduty.com/services/{id}"),
        "html_url": format!("https://acme.pagerduty.com/services/{id}"),
        "name": name,
        "status": "active",
        "created_at": "2024-01-01T00:00:00Z",
        "escalation_policy": {"id": "PEP001", "type": "escalation_policy_reference"}
    })
}

fn user_json(id: &str, name: &str, email: &str) -> Value {
    json!({
        "id": id,
        "type": "user",
        "summary": name,
        "name": name,
        "email": email,
        "role": "user",
        "teams": []
    })
}

#[tokio::test]
async fn test_get_service() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/PSVC001"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"service": service_json("PSVC001", "Checkout")})),
        )
        .mount(&mock_server)
        .await;

    let service = Service::get(&client(&mock_server), "PSVC001").await.unwrap();
    assert_eq!(service.id(), "PSVC001");
    assert_eq!(service.name, "Checkout");
    assert!(service.is_active());
}

#[tokio::test]
async fn test_create_user_wraps_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({
            "user": {"name": "Jane Doe", "email": "jane@example.com", "role": "user"}
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"user": user_json("PNEW001", "Jane Doe", "jane@example.com")})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut info = UserInfo::new("Jane Doe", "jane@example.com");
    info.role = Some(UserRole::User);

    let user = User::create(&client(&mock_server), &(), &info).await.unwrap();
    assert_eq!(user.id(), "PNEW001");
    assert_eq!(user.info, info);
}

#[tokio::test]
async fn test_update_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/PUSER01"))
        .and(body_json(json!({
            "user": {"name": "Jane Roe", "email": "jane@example.com"}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"user": user_json("PUSER01", "Jane Roe", "jane@example.com")})),
        )
        .mount(&mock_server)
        .await;

    let info = UserInfo::new("Jane Roe", "jane@example.com");
    let user = User::update(&client(&mock_server), "PUSER01", &info)
        .await
        .unwrap();
    assert_eq!(user.info.name, "Jane Roe");
}

#[tokio::test]
async fn test_delete_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/PUSER01"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/users/PGONE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    User::delete(&client, "PUSER01").await.unwrap();

    let err = User::delete(&client, "PGONE").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_vendor_get_is_unwrapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vendors/PVEND01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "PVEND01",
            "type": "vendor",
            "name": "Datadog",
            "website_url": "https://www.datadoghq.com"
        })))
        .mount(&mock_server)
        .await;

    let vendor = Vendor::get(&client(&mock_server), "PVEND01").await.unwrap();
    assert_eq!(vendor.name, "Datadog");
    assert_eq!(vendor.website_url.as_deref(), Some("https://www.datadoghq.com"));
}

#[tokio::test]
async fn test_escalation_policy_list_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/escalation_policies"))
        .and(query_param("offset", "25"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "more": false,
            "escalation_policies": [{
                "id": "PEP001",
                "type": "escalation_policy",
                "name": "Engineering Escalation",
                "num_loops": 2,
                "escalation_rules": [{
                    "id": "PRULE1",
                    "escalation_delay_in_minutes": 30,
                    "targets": [{"id": "PUSER01", "type": "user_reference"}]
                }]
            }]
        })))
        .mount(&mock_server)
        .await;

    let page = EscalationPolicy::list_page(&client(&mock_server), &(), 25, 25)
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert!(!page.more);
    assert_eq!(page.next_offset(), 26);
    assert_eq!(page.items[0].num_loops, 2);
}

#[tokio::test]
async fn test_team_members_are_scoped_by_team() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/PTEAM01/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "more": false,
            "members": [
                {"user": {"id": "PUSER01", "type": "user_reference"}, "role": "manager"},
                {"user": {"id": "PUSER02", "type": "user_reference"}, "role": "responder"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let members = TeamMember::list_all(&client(&mock_server), "PTEAM01")
        .await
        .unwrap();
    assert_eq!(members.len(), 2);
    assert!(members[0].is_manager());
    assert!(!members[1].is_manager());
}

#[tokio::test]
async fn test_response_play_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/response_plays"))
        .and(query_param("filter_for_manual_run", "true"))
        .and(query_param("query", "major incident"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "more": false,
            "response_plays": [{"id": "PPLAY01", "type": "response_play", "name": "Major Incident"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = ResponsePlayQuery {
        query: Some("major incident".to_string()),
        manual: true,
    };
    let plays = ResponsePlay::list_all(&client(&mock_server), &query)
        .await
        .unwrap();
    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].name.as_deref(), Some("Major Incident"));
}

#[tokio::test]
async fn test_orchestration_status_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/event_orchestrations/services/PSVC001/active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"active": false})))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/event_orchestrations/services/PSVC001/active"))
        .and(body_json(json!({"active": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"active": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let status = ServiceOrchestrationStatus::get(&client, "PSVC001")
        .await
        .unwrap();
    assert!(!status.active);

    let status = ServiceOrchestrationStatus::update(
        &client,
        "PSVC001",
        &ServiceOrchestrationStatus { active: true },
    )
    .await
    .unwrap();
    assert!(status.active);
}

#[tokio::test]
async fn test_service_orchestration_rules() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/event_orchestrations/services/PSVC001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orchestration_path": {
                "type": "service",
                "parent": {"id": "PSVC001", "type": "service_reference"},
                "self": "https://api.pagerduty.com/event_orchestrations/services/PSVC001",
                "sets": [{
                    "id": "start",
                    "rules": [{
                        "id": "r1",
                        "label": "Timeouts are low urgency",
                        "conditions": [{"expression": "event.summary matches part 'timeout'"}],
                        "actions": {"severity": "warning"}
                    }]
                }],
                "catch_all": {"actions": {}}
            }
        })))
        .mount(&mock_server)
        .await;

    let orchestration = ServiceOrchestration::get(&client(&mock_server), "PSVC001")
        .await
        .unwrap();
    assert_eq!(orchestration.parent.id, "PSVC001");
    assert_eq!(orchestration.rule_count(), 1);
    assert!(orchestration.start_set().is_some());
}

#[tokio::test]
async fn test_create_integration_for_vendor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/PSVC001/integrations"))
        .and(body_json(json!({
            "integration": {
                "type": "events_api_v2_inbound_integration",
                "name": "Datadog alerts",
                "service": {"id": "PSVC001", "type": "service"},
                "vendor": {"id": "PVEND01", "type": "vendor"}
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "integration": {
                "id": "PINT001",
                "type": "events_api_v2_inbound_integration",
                "name": "Datadog alerts",
                "integration_key": "abc123",
                "service": {"id": "PSVC001", "type": "service_reference"},
                "created_at": "2024-01-01T00:00:00Z",
                "vendor": {"id": "PVEND01", "type": "vendor_reference"}
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service: Service = serde_json::from_value(service_json("PSVC001", "Checkout")).unwrap();
    let vendor: Vendor = serde_json::from_value(json!({
        "id": "PVEND01",
        "type": "vendor",
        "name": "Datadog"
    }))
    .unwrap();

    let integration = create_integration(&client(&mock_server), &service, &vendor, "Datadog alerts")
        .await
        .unwrap();
    assert_eq!(integration.id(), "PINT001");
    assert_eq!(integration.integration_key.as_deref(), Some("abc123"));
}
