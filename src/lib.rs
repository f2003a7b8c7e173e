//! PagerDuty API client library.
//!
//! A Rust library for the PagerDuty REST API. All traffic goes through the
//! [`Fetcher`] contract: four HTTP primitives plus offset pagination and
//! envelope decoding. Resource operations (Get, List, Create, Update,
//! Delete) are traits that entity types implement declaratively on top of
//! any `Fetcher`.
//!
//! # Quick Start
//!
//! ```no_run
//! use pdapi::{Get, List, PagerDutyClient, Service, TeamMember, Team};
//!
//! #[tokio::main]
//! async fn main() -> pdapi::Result<()> {
//!     // Create client from environment variables
//!     let client = PagerDutyClient::from_env()?;
//!
//!     // List every service (all pages)
//!     let services = Service::list_all(&client, &()).await?;
//!     println!("Found {} services", services.len());
//!
//!     // Get a service by ID
//!     let service = Service::get(&client, "PSVC001").await?;
//!     println!("Service: {}", service.name);
//!
//!     // List the members of each team
//!     for team in Team::list_all(&client, &()).await? {
//!         let members = TeamMember::list_all(&client, team.id()).await?;
//!         println!("{}: {} members", team.name, members.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Sessions
//!
//! A [`PagerDutyClient`] owns one [`Session`]: the connection pool, the
//! `Authorization: Token token=<key>` header and a limit of 25 concurrent
//! exchanges. Dropping the client (or calling [`PagerDutyClient::close`])
//! closes the session; requests issued afterwards fail with
//! [`PagerDutyError::SessionClosed`].
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `PAGERDUTY_API_KEY` (required) - Your PagerDuty REST API key
//! - `PAGERDUTY_API_URL` (optional) - Base URL (defaults to `https://api.pagerduty.com`)
//! - `PAGERDUTY_TIMEOUT_SECS` (optional) - Per-request timeout (defaults to 60)
//! - `PAGERDUTY_MAX_PAGES` (optional) - Page cap for paginated calls (defaults to 1000)

pub mod cli;
mod client;
mod error;
mod models;
pub mod output;
mod pagination;
mod session;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::PagerDutyClient;
pub use error::{PagerDutyError, Result};
pub use pagination::{Page, PAGE_LIMIT};
pub use session::{
    PaginationLimits, Session, SessionConfig, DEFAULT_API_URL, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT,
};

// Re-export traits
pub use traits::{Create, Delete, Fetcher, Get, JsonObject, List, Update};

// Re-export models
pub use models::{
    // Shared
    ObjectRef,
    // Service types
    IncidentUrgencyDefinition,
    IncidentUrgencyRule,
    Service,
    ServiceStatus,
    SupportHours,
    Urgency,
    UrgencyType,
    // User and team types
    Team,
    TeamMember,
    User,
    UserInfo,
    UserRole,
    // Escalation types
    EscalationPolicy,
    EscalationRule,
    HandoffNotifications,
    // Integration and vendor types
    EmailFilter,
    EmailFilterMode,
    EmailIncidentCreation,
    EmailParsingFallback,
    Integration,
    IntegrationId,
    NewIntegration,
    Vendor,
    EVENTS_API_V2_INTEGRATION,
    // Priorities and response plays
    ConferenceType,
    Priority,
    ResponsePlay,
    ResponsePlayQuery,
    Runnability,
    // Event orchestration types
    Action,
    CatchAll,
    Condition,
    EventAction,
    Extraction,
    RefType,
    Rule,
    RuleSet,
    ServiceOrchestration,
    ServiceOrchestrationStatus,
    Severity,
    Variable,
};

// Re-export convenience functions
pub use models::create_integration;

// Cancellation token accepted by SessionConfig
pub use tokio_util::sync::CancellationToken;
