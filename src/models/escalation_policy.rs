//! Escalation policy model and trait implementations.

use serde::{Deserialize, Serialize};

use super::ObjectRef;
use crate::traits::{Get, List};

/// An escalation policy.
///
/// Determines who is notified, and in what order, when an incident on an
/// associated service is triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationPolicy {
    /// Reference fields (id, type, summary, URLs).
    #[serde(flatten)]
    pub reference: ObjectRef,

    /// The name of the escalation policy.
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Times the policy repeats after reaching its last rule.
    #[serde(default)]
    pub num_loops: u32,

    /// How on-call handoff notifications are sent.
    #[serde(default)]
    pub on_call_handoff_notifications: HandoffNotifications,

    /// Ordered escalation rules.
    pub escalation_rules: Vec<EscalationRule>,

    /// Services using this policy.
    #[serde(default)]
    pub services: Vec<ObjectRef>,

    /// Teams associated with this policy.
    #[serde(default)]
    pub teams: Vec<ObjectRef>,
}

/// When handoff notifications are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoffNotifications {
    #[default]
    IfHasServices,
    Always,
    #[serde(untagged)]
    Other(String),
}

/// One step of an escalation policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationRule {
    pub id: String,
    pub escalation_delay_in_minutes: u32,
    /// Users or schedules an incident is assigned to on reaching this rule.
    pub targets: Vec<ObjectRef>,
}

impl EscalationPolicy {
    /// The policy ID.
    pub fn id(&self) -> &str {
        &self.reference.id
    }

    /// Total minutes before the last rule is reached on the first loop.
    pub fn total_delay_minutes(&self) -> u32 {
        self.escalation_rules
            .iter()
            .rev()
            .skip(1)
            .map(|r| r.escalation_delay_in_minutes)
            .sum()
    }
}

impl Get for EscalationPolicy {
    type Id = str;

    const ITEM_FIELD: Option<&'static str> = Some("escalation_policy");

    fn resource_path(id: &str) -> String {
        format!("escalation_policies/{}", urlencoding::encode(id))
    }
}

impl List for EscalationPolicy {
    type Scope = ();

    const ITEMS_FIELD: &'static str = "escalation_policies";

    fn collection_path(_scope: &()) -> String {
        "escalation_policies".to_string()
    }
}
