//! Mock PagerDuty API server.
//!
//! Provides an axum-based HTTP server that simulates the PagerDuty REST API.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// A mock PagerDuty API server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a stateful implementation of the API.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL when creating a `PagerDutyClient` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    pub fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    /// Create state from a scenario.
    pub fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for service in scenario.services {
            state = state.with_service(service);
        }
        for user in scenario.users {
            state = state.with_user(user);
        }
        for (team, members) in scenario.teams {
            state = state.with_team(team, members);
        }
        for policy in scenario.escalation_policies {
            state = state.with_escalation_policy(policy);
        }
        for vendor in scenario.vendors {
            state = state.with_vendor(vendor);
        }
        for priority in scenario.priorities {
            state = state.with_priority(priority);
        }
        for service_id in scenario.orchestrated_services {
            state.orchestration_active.insert(service_id, true);
        }

        state
    }

    /// Create the axum router with all routes.
    pub fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        let api = Router::new()
            // Service routes
            .route("/services", get(handlers::list_services))
            .route("/services/:id", get(handlers::get_service))
            // User routes
            .route(
                "/users",
                get(handlers::list_users).post(handlers::create_user),
            )
            .route(
                "/users/:id",
                get(handlers::get_user)
                    .put(handlers::update_user)
                    .delete(handlers::delete_user),
            )
            // Team routes
            .route("/teams", get(handlers::list_teams))
            .route("/teams/:id", get(handlers::get_team))
            .route("/teams/:id/members", get(handlers::list_team_members))
            // Catalog routes
            .route(
                "/escalation_policies",
                get(handlers::list_escalation_policies),
            )
            .route(
                "/escalation_policies/:id",
                get(handlers::get_escalation_policy),
            )
            .route("/vendors", get(handlers::list_vendors))
            .route("/vendors/:id", get(handlers::get_vendor))
            .route("/priorities", get(handlers::list_priorities))
            // Event orchestration routes
            .route(
                "/event_orchestrations/services/:id/active",
                get(handlers::get_orchestration_status).put(handlers::update_orchestration_status),
            )
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                handlers::require_token,
            ));

        api.route("/health", get(health_check)).with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
