//! User model and trait implementations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ObjectRef;
use crate::traits::{Create, Delete, Get, List, Update};

/// A PagerDuty user and their configuration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Reference fields (id, type, summary, URLs).
    #[serde(flatten)]
    pub reference: ObjectRef,

    /// Editable profile fields.
    #[serde(flatten)]
    pub info: UserInfo,

    /// URL of the user's avatar.
    #[serde(default)]
    pub avatar_url: Option<String>,

    /// Whether an invitation has been sent to the user.
    #[serde(default)]
    pub invitation_sent: Option<bool>,

    /// Teams the user belongs to.
    #[serde(default)]
    pub teams: Vec<ObjectRef>,

    /// Configured contact methods.
    #[serde(default)]
    pub contact_methods: Vec<ObjectRef>,

    /// Configured notification rules.
    #[serde(default)]
    pub notification_rules: Vec<ObjectRef>,
}

/// Editable user fields, used to create and update users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Display name (at most 100 characters).
    pub name: String,

    /// Login email address.
    pub email: String,

    /// IANA time zone (e.g., "America/Lima").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    /// Schedule color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Account role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

impl UserInfo {
    /// Create profile fields with a name and email.
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }
}

/// Account role of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    LimitedUser,
    Observer,
    Owner,
    ReadOnlyUser,
    RestrictedAccess,
    ReadOnlyLimitedUser,
    User,
    /// A role this client does not know yet.
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self {
            Self::Admin => "admin",
            Self::LimitedUser => "limited_user",
            Self::Observer => "observer",
            Self::Owner => "owner",
            Self::ReadOnlyUser => "read_only_user",
            Self::RestrictedAccess => "restricted_access",
            Self::ReadOnlyLimitedUser => "read_only_limited_user",
            Self::User => "user",
            Self::Other(other) => other,
        };
        f.write_str(role)
    }
}

impl User {
    /// The user ID.
    pub fn id(&self) -> &str {
        &self.reference.id
    }

    /// The user's editable fields, for passing to [`Update::update`].
    pub fn info(&self) -> UserInfo {
        self.info.clone()
    }

    /// Check if the user holds an administrative role.
    pub fn is_admin(&self) -> bool {
        matches!(self.info.role, Some(UserRole::Admin | UserRole::Owner))
    }
}

impl Get for User {
    type Id = str;

    const ITEM_FIELD: Option<&'static str> = Some("user");

    fn resource_path(id: &str) -> String {
        format!("users/{}", urlencoding::encode(id))
    }
}

impl List for User {
    type Scope = ();

    const ITEMS_FIELD: &'static str = "users";

    fn collection_path(_scope: &()) -> String {
        "users".to_string()
    }
}

impl Create for User {
    type Scope = ();
    type Params = UserInfo;

    const ITEM_FIELD: &'static str = "user";

    fn collection_path(_scope: &()) -> String {
        "users".to_string()
    }
}

impl Update for User {
    type Id = str;
    type Params = UserInfo;

    const ITEM_FIELD: Option<&'static str> = Some("user");

    fn resource_path(id: &str) -> String {
        <Self as Get>::resource_path(id)
    }
}

impl Delete for User {
    type Id = str;

    fn resource_path(id: &str) -> String {
        <Self as Get>::resource_path(id)
    }
}
