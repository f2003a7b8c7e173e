//! Response play model and trait implementations.

use serde::{Deserialize, Serialize};

use super::{ObjectRef, Team};
use crate::traits::{Get, List};

/// A response play: a package of actions run on an incident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePlay {
    #[serde(flatten)]
    pub reference: ObjectRef,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Owning team.
    #[serde(default)]
    pub team: Option<Team>,

    /// Users and teams subscribed to updates.
    #[serde(default)]
    pub subscribers: Vec<ObjectRef>,

    #[serde(default)]
    pub subscribers_message: Option<String>,

    /// Escalation policies added as responders.
    #[serde(default)]
    pub responders: Vec<ObjectRef>,

    #[serde(default)]
    pub responders_message: Option<String>,

    /// Who may run the play.
    #[serde(default)]
    pub runnability: Option<Runnability>,

    #[serde(default)]
    pub conference_number: Option<String>,

    #[serde(default)]
    pub conference_url: Option<String>,

    #[serde(default)]
    pub conference_type: Option<ConferenceType>,
}

/// Who may run a response play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Runnability {
    Services,
    Teams,
    Responders,
    #[serde(untagged)]
    Other(String),
}

/// Conference bridge kind attached by a response play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConferenceType {
    None,
    Manual,
    Zoom,
    #[serde(untagged)]
    Other(String),
}

/// Filters for listing response plays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsePlayQuery {
    /// Name filter.
    pub query: Option<String>,
    /// Only plays that can be run manually.
    pub manual: bool,
}

impl Get for ResponsePlay {
    type Id = str;

    const ITEM_FIELD: Option<&'static str> = Some("response_play");

    fn resource_path(id: &str) -> String {
        format!("response_plays/{}", urlencoding::encode(id))
    }
}

impl List for ResponsePlay {
    type Scope = ResponsePlayQuery;

    const ITEMS_FIELD: &'static str = "response_plays";

    fn collection_path(scope: &ResponsePlayQuery) -> String {
        let mut path = format!("response_plays?filter_for_manual_run={}", scope.manual);
        if let Some(query) = &scope.query {
            path.push_str("&query=");
            path.push_str(&urlencoding::encode(query));
        }
        path
    }
}
