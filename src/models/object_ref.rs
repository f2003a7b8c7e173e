//! Reference fields shared by first-class PagerDuty objects.

use serde::{Deserialize, Serialize};

/// A reference to a PagerDuty object.
///
/// Every first-class object carries these fields; full objects embed them
/// with `#[serde(flatten)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    /// Object ID (e.g., "PABC123").
    pub id: String,

    /// Object type (e.g., "service", "user_reference").
    #[serde(rename = "type")]
    pub ref_type: String,

    /// Short human-readable summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// API URL of the object.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// Web UI URL. Vendors do not always have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

impl ObjectRef {
    /// Create a bare reference, as used in request payloads.
    pub fn new(id: &str, ref_type: &str) -> Self {
        Self {
            id: id.to_string(),
            ref_type: ref_type.to_string(),
            summary: None,
            self_url: None,
            html_url: None,
        }
    }
}
