//! Pagination engine tests against wiremock.

use pdapi::{Fetcher, List, PagerDutyClient, PagerDutyError, Priority, SessionConfig};
use serde::Deserialize;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

#[derive(Debug, PartialEq, Deserialize)]
struct Widget {
    id: String,
}

fn widget(n: usize) -> Value {
    json!({"id": format!("w{n}")})
}

/// Serves `total` widgets, never more than `cap` per page.
struct Collection {
    total: usize,
    cap: usize,
}

impl Respond for Collection {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let param = |name: &str| {
            request
                .url
                .query_pairs()
                .find(|(k, _)| k == name)
                .and_then(|(_, v)| v.parse::<usize>().ok())
                .unwrap_or(0)
        };
        let offset = param("offset");
        let limit = param("limit").min(self.cap);
        let end = (offset + limit).min(self.total);

        let items: Vec<Value> = (offset..end).map(widget).collect();
        ResponseTemplate::new(200).set_body_json(json!({
            "widgets": items,
            "offset": offset,
            "limit": limit,
            "more": end < self.total,
            "total": null
        }))
    }
}

fn offsets(requests: &[Request]) -> Vec<String> {
    requests
        .iter()
        .filter_map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "offset")
                .map(|(_, v)| v.into_owned())
        })
        .collect()
}

#[tokio::test]
async fn test_two_pages_advance_by_received_count() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "more": true,
            "widgets": [widget(1), widget(2)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/widgets"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "more": false,
            "widgets": [widget(3)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PagerDutyClient::new("test-token", &mock_server.uri()).unwrap();
    let widgets: Vec<Widget> = client.fetch_all("widgets", "widgets").await.unwrap();

    let ids: Vec<_> = widgets.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["w1", "w2", "w3"]);
}

#[tokio::test]
async fn test_fetch_all_returns_every_item_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets"))
        .respond_with(Collection {
            total: 250,
            cap: 100,
        })
        .mount(&mock_server)
        .await;

    let client = PagerDutyClient::new("test-token", &mock_server.uri()).unwrap();
    let widgets: Vec<Widget> = client.fetch_all("widgets", "widgets").await.unwrap();

    assert_eq!(widgets.len(), 250);
    assert_eq!(widgets[0].id, "w0");
    assert_eq!(widgets[249].id, "w249");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(offsets(&requests), vec!["0", "100", "200"]);
}

#[tokio::test]
async fn test_short_pages_use_item_count_for_offsets() {
    let mock_server = MockServer::start().await;

    // The server caps pages at 40 even though 100 are requested
    Mock::given(method("GET"))
        .and(path("/widgets"))
        .respond_with(Collection { total: 90, cap: 40 })
        .mount(&mock_server)
        .await;

    let client = PagerDutyClient::new("test-token", &mock_server.uri()).unwrap();
    let widgets: Vec<Widget> = client.fetch_all("widgets", "widgets").await.unwrap();

    assert_eq!(widgets.len(), 90);
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(offsets(&requests), vec!["0", "40", "80"]);
}

#[tokio::test]
async fn test_endless_empty_pages_trip_the_page_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"more": true, "widgets": []})),
        )
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = SessionConfig::new("test-token")
        .with_base_url(&mock_server.uri())
        .with_max_pages(3);
    let client = PagerDutyClient::with_config(config).unwrap();

    let err = client
        .fetch_all::<Widget>("widgets", "widgets")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PagerDutyError::PaginationLimitExceeded { pages: 3, items: 0 }
    ));
}

#[tokio::test]
async fn test_item_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets"))
        .respond_with(Collection {
            total: 500,
            cap: 100,
        })
        .mount(&mock_server)
        .await;

    let config = SessionConfig::new("test-token")
        .with_base_url(&mock_server.uri())
        .with_max_items(150);
    let client = PagerDutyClient::with_config(config).unwrap();

    let err = client
        .fetch_all::<Widget>("widgets", "widgets")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PagerDutyError::PaginationLimitExceeded {
            pages: 2,
            items: 200
        }
    ));
}

#[tokio::test]
async fn test_failed_page_discards_collected_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/priorities"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "more": true,
            "priorities": [{"id": "PPRI001", "type": "priority", "name": "P1"}]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/priorities"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = PagerDutyClient::new("test-token", &mock_server.uri()).unwrap();
    let err = Priority::list_all(&client, &()).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_missing_more_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/priorities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"priorities": []})))
        .mount(&mock_server)
        .await;

    let client = PagerDutyClient::new("test-token", &mock_server.uri()).unwrap();
    let err = Priority::list_page(&client, &(), 0, 25).await.unwrap_err();
    assert!(matches!(err, PagerDutyError::MissingField { ref field } if field == "more"));
}
