//! Service model and trait implementations.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ObjectRef;
use crate::traits::{Get, List};

/// A PagerDuty service.
///
/// Services represent something you monitor (an application, a component
/// or a piece of infrastructure). Incidents are opened against a service
/// and routed through its escalation policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Reference fields (id, type, summary, URLs).
    #[serde(flatten)]
    pub reference: ObjectRef,

    /// The service name.
    pub name: String,

    /// Service description.
    #[serde(default)]
    pub description: Option<String>,

    /// Seconds before an acknowledged incident resolves itself.
    #[serde(default)]
    pub auto_resolve_timeout: Option<u64>,

    /// Seconds before an acknowledged incident re-triggers.
    #[serde(default)]
    pub acknowledgement_timeout: Option<u64>,

    /// When the service was created.
    pub created_at: DateTime<Utc>,

    /// Current state of the service.
    pub status: ServiceStatus,

    /// When the last incident was triggered.
    #[serde(default)]
    pub last_incident_timestamp: Option<DateTime<Utc>>,

    /// Escalation policy incidents are routed through.
    pub escalation_policy: ObjectRef,

    /// Teams associated with this service.
    #[serde(default)]
    pub teams: Vec<ObjectRef>,

    /// Integrations attached to this service.
    #[serde(default)]
    pub integrations: Vec<ObjectRef>,

    /// How incident urgency is decided.
    #[serde(default)]
    pub incident_urgency_rule: Option<IncidentUrgencyRule>,

    /// Support hours, when urgency depends on them.
    #[serde(default)]
    pub support_hours: Option<SupportHours>,
}

/// Service state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Active,
    Warning,
    Critical,
    Maintenance,
    Disabled,
    /// A status this client does not know yet.
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Self::Active => "active",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Maintenance => "maintenance",
            Self::Disabled => "disabled",
            Self::Other(other) => other,
        };
        f.write_str(status)
    }
}

/// Incident urgency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    High,
    SeverityBased,
    #[serde(untagged)]
    Other(String),
}

/// How urgency is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyType {
    Constant,
    UseSupportHours,
    #[serde(untagged)]
    Other(String),
}

/// One urgency setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentUrgencyDefinition {
    pub urgency: Urgency,
    #[serde(rename = "type")]
    pub urgency_type: UrgencyType,
}

/// Urgency rule for incidents on a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentUrgencyRule {
    /// Urgency used when the rule type is `constant`.
    #[serde(default)]
    pub urgency: Option<Urgency>,

    #[serde(rename = "type")]
    pub urgency_type: UrgencyType,

    #[serde(default)]
    pub during_support_hours: Option<IncidentUrgencyDefinition>,

    #[serde(default)]
    pub outside_support_hours: Option<IncidentUrgencyDefinition>,
}

/// Support hours of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportHours {
    #[serde(rename = "type")]
    pub hours_type: String,
    pub time_zone: String,
    /// ISO weekdays, 1 = Monday.
    pub days_of_week: Vec<u8>,
    pub start_time: String,
    pub end_time: String,
}

impl Service {
    /// The service ID.
    pub fn id(&self) -> &str {
        &self.reference.id
    }

    /// Check if the service is accepting incidents normally.
    pub fn is_active(&self) -> bool {
        self.status == ServiceStatus::Active
    }

    /// Check if the service is disabled.
    pub fn is_disabled(&self) -> bool {
        self.status == ServiceStatus::Disabled
    }

    /// A reference to this service suitable for request payloads.
    pub fn to_ref(&self) -> ObjectRef {
        ObjectRef::new(&self.reference.id, &self.reference.ref_type)
    }
}

impl Get for Service {
    type Id = str;

    const ITEM_FIELD: Option<&'static str> = Some("service");

    fn resource_path(id: &str) -> String {
        format!("services/{}", urlencoding::encode(id))
    }
}

impl List for Service {
    type Scope = ();

    const ITEMS_FIELD: &'static str = "services";

    fn collection_path(_scope: &()) -> String {
        "services".to_string()
    }
}
