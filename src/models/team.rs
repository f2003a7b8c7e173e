//! Team and team member models.

use serde::{Deserialize, Serialize};

use super::ObjectRef;
use crate::traits::{Get, List};

/// A PagerDuty team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Reference fields (id, type, summary, URLs).
    #[serde(flatten)]
    pub reference: ObjectRef,

    /// The team name.
    pub name: String,

    /// Team description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Team {
    /// The team ID.
    pub fn id(&self) -> &str {
        &self.reference.id
    }
}

impl Get for Team {
    type Id = str;

    const ITEM_FIELD: Option<&'static str> = Some("team");

    fn resource_path(id: &str) -> String {
        format!("teams/{}", urlencoding::encode(id))
    }
}

impl List for Team {
    type Scope = ();

    const ITEMS_FIELD: &'static str = "teams";

    fn collection_path(_scope: &()) -> String {
        "teams".to_string()
    }
}

/// Membership of a user in a team.
///
/// Members are not first-class objects; the API returns the user reference
/// next to the member's role:
///
/// ```json
/// {
///     "user": {"id": "P0XJYI9", "type": "user_reference", "summary": "Jane Doe"},
///     "role": "manager"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub user: ObjectRef,
    /// Role within the team (e.g., "manager", "responder", "observer").
    pub role: String,
}

impl TeamMember {
    /// Check if the member manages the team.
    pub fn is_manager(&self) -> bool {
        self.role == "manager"
    }
}

/// Members are listed per team; the scope is the team ID.
impl List for TeamMember {
    type Scope = str;

    const ITEMS_FIELD: &'static str = "members";

    fn collection_path(team_id: &str) -> String {
        format!("teams/{}/members", urlencoding::encode(team_id))
    }
}
