//! Integration model and trait implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ObjectRef, Service, Vendor};
use crate::error::Result;
use crate::traits::{Create, Fetcher, Get};

/// Integration type created by [`create_integration`].
pub const EVENTS_API_V2_INTEGRATION: &str = "events_api_v2_inbound_integration";

/// An integration defined for a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    /// Reference fields (id, type, summary, URLs).
    #[serde(flatten)]
    pub reference: ObjectRef,

    pub name: String,

    /// Routing key events are sent with.
    #[serde(default)]
    pub integration_key: Option<String>,

    /// The service this integration belongs to.
    pub service: ObjectRef,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub vendor: Option<ObjectRef>,

    /// Address for email integrations.
    #[serde(default)]
    pub integration_email: Option<String>,

    #[serde(default)]
    pub email_incident_creation: Option<EmailIncidentCreation>,

    #[serde(default)]
    pub email_filter_mode: Option<EmailFilterMode>,

    #[serde(default)]
    pub email_parsing_fallback: Option<EmailParsingFallback>,

    #[serde(default)]
    pub email_filters: Vec<EmailFilter>,
}

/// How emails are filtered before opening incidents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmailFilterMode {
    AllEmail,
    OrRulesEmail,
    AndRulesEmail,
    #[serde(untagged)]
    Other(String),
}

/// When an email opens a new incident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailIncidentCreation {
    OnNewEmail,
    OnNewEmailSubject,
    OnlyIfNoOpenIncidents,
    UseRules,
    #[serde(untagged)]
    Other(String),
}

/// What happens to emails no parser matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailParsingFallback {
    OpenNewIncident,
    Discard,
    #[serde(untagged)]
    Other(String),
}

/// One email filter rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailFilter {
    pub subject_mode: String,
    #[serde(default)]
    pub subject_regex: Option<String>,
    pub body_mode: String,
    #[serde(default)]
    pub body_regex: Option<String>,
    pub from_email_mode: String,
    #[serde(default)]
    pub from_email_regex: Option<String>,
}

/// Identifies an integration, which lives under a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationId {
    pub service_id: String,
    pub integration_id: String,
}

impl IntegrationId {
    pub fn new(service_id: &str, integration_id: &str) -> Self {
        Self {
            service_id: service_id.to_string(),
            integration_id: integration_id.to_string(),
        }
    }
}

/// Parameters for a new integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIntegration {
    #[serde(rename = "type")]
    pub integration_type: String,
    pub name: String,
    pub service: ObjectRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<ObjectRef>,
}

impl Integration {
    /// The integration ID.
    pub fn id(&self) -> &str {
        &self.reference.id
    }

    /// Check if this is an email integration.
    pub fn is_email(&self) -> bool {
        self.integration_email.is_some()
    }
}

impl Get for Integration {
    type Id = IntegrationId;

    const ITEM_FIELD: Option<&'static str> = Some("integration");

    fn resource_path(id: &IntegrationId) -> String {
        format!(
            "services/{}/integrations/{}",
            urlencoding::encode(&id.service_id),
            urlencoding::encode(&id.integration_id)
        )
    }
}

/// Integrations are created under a service; the scope is the service ID.
impl Create for Integration {
    type Scope = str;
    type Params = NewIntegration;

    const ITEM_FIELD: &'static str = "integration";

    fn collection_path(service_id: &str) -> String {
        format!("services/{}/integrations", urlencoding::encode(service_id))
    }
}

/// Add an Events API v2 integration for `vendor` to `service`.
///
/// # Example
///
/// ```ignore
/// let integration = create_integration(&client, &service, &vendor, "Datadog alerts").await?;
/// println!("routing key: {:?}", integration.integration_key);
/// ```
///
/// # Errors
///
/// Returns an error if the request fails or the response does not decode.
pub async fn create_integration<F: Fetcher>(
    fetcher: &F,
    service: &Service,
    vendor: &Vendor,
    name: &str,
) -> Result<Integration> {
    let params = NewIntegration {
        integration_type: EVENTS_API_V2_INTEGRATION.to_string(),
        name: name.to_string(),
        service: service.to_ref(),
        vendor: Some(vendor.to_ref()),
    };
    Integration::create(fetcher, service.id(), &params).await
}
