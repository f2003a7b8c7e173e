//! Service event orchestration models.
//!
//! Event orchestration rules transform, route and suppress events sent to
//! a service before they become alerts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::{Get, Update};

/// Whether event orchestration is enabled for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOrchestrationStatus {
    pub active: bool,
}

/// Keyed by service ID; request and response are unwrapped.
impl Get for ServiceOrchestrationStatus {
    type Id = str;

    const ITEM_FIELD: Option<&'static str> = None;

    fn resource_path(service_id: &str) -> String {
        format!(
            "event_orchestrations/services/{}/active",
            urlencoding::encode(service_id)
        )
    }
}

impl Update for ServiceOrchestrationStatus {
    type Id = str;
    type Params = ServiceOrchestrationStatus;

    const ITEM_FIELD: Option<&'static str> = None;

    fn resource_path(service_id: &str) -> String {
        <Self as Get>::resource_path(service_id)
    }
}

/// Orchestration rules defined for a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOrchestration {
    #[serde(rename = "type")]
    pub orchestration_type: String,

    /// The service the rules belong to.
    pub parent: RefType,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(rename = "self")]
    pub self_url: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub created_by: Option<RefType>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_by: Option<RefType>,

    /// Rule sets; the set with id "start" is evaluated first.
    #[serde(default)]
    pub sets: Vec<RuleSet>,

    /// Actions applied when no rule matches.
    pub catch_all: CatchAll,
}

impl ServiceOrchestration {
    /// The rule set evaluated first.
    pub fn start_set(&self) -> Option<&RuleSet> {
        self.sets.iter().find(|s| s.id == "start")
    }

    /// Total number of rules across all sets.
    pub fn rule_count(&self) -> usize {
        self.sets.iter().map(|s| s.rules.len()).sum()
    }
}

/// Keyed by service ID; the rules live under `orchestration_path`.
impl Get for ServiceOrchestration {
    type Id = str;

    const ITEM_FIELD: Option<&'static str> = Some("orchestration_path");

    fn resource_path(service_id: &str) -> String {
        format!(
            "event_orchestrations/services/{}",
            urlencoding::encode(service_id)
        )
    }
}

/// A minimal reference (no summary or web URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefType {
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(rename = "type")]
    pub ref_type: String,
}

/// A named, ordered group of rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub id: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// One orchestration rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Disabled rules are not evaluated.
    #[serde(default)]
    pub disabled: bool,
    /// The rule applies when any condition matches; empty always matches.
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub actions: Action,
}

/// A PCL condition (e.g., `event.summary matches part 'timeout'`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub expression: String,
}

/// Wrapper around the catch-all actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchAll {
    pub actions: Action,
}

/// Actions applied to an event when a rule matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Rule set to continue evaluation in. Absent in catch-all actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Suppress the resulting alert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppress: Option<bool>,

    /// Seconds to suspend the resulting alert before triggering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspend: Option<u64>,

    /// Priority ID to set on the resulting incident.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Note added to the resulting incident.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotate: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_action: Option<EventAction>,

    /// Variables populated from the event payload.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<Variable>,

    /// Templated values written into event fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extractions: Vec<Extraction>,
}

/// Alert severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
    #[serde(untagged)]
    Other(String),
}

/// Whether the resulting alert triggers or resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    Trigger,
    Resolve,
    #[serde(untagged)]
    Other(String),
}

/// A variable extracted from an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Variable name (e.g., `hostname`).
    pub name: String,
    /// Dot-notation path into the event (e.g., `event.summary`).
    pub path: String,
    /// Operation type; currently only `regex`.
    #[serde(rename = "type")]
    pub variable_type: String,
    /// RE2 expression; capture groups are concatenated when present.
    pub value: String,
}

/// Writes a templated value into an event field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Target PD-CEF field (e.g., `event.summary`).
    pub target: String,
    /// Template with `{{variable}}` interpolation.
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub regex: Option<String>,
}
