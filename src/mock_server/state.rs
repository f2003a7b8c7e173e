//! Mock server state management.
//!
//! Provides the in-memory data store for the mock PagerDuty API server.
//! Collections are kept in `BTreeMap`s so pagination sees a stable order.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    EscalationPolicy, ObjectRef, Priority, Service, Team, TeamMember, User, UserInfo, Vendor,
};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Services indexed by ID.
    pub services: BTreeMap<String, Service>,

    /// Users indexed by ID.
    pub users: BTreeMap<String, User>,

    /// Teams indexed by ID.
    pub teams: BTreeMap<String, Team>,

    /// Members of each team, indexed by team ID.
    pub team_members: HashMap<String, Vec<TeamMember>>,

    /// Escalation policies indexed by ID.
    pub escalation_policies: BTreeMap<String, EscalationPolicy>,

    /// Vendors indexed by ID.
    pub vendors: BTreeMap<String, Vendor>,

    /// Priorities indexed by ID.
    pub priorities: BTreeMap<String, Priority>,

    /// Event orchestration switch per service ID.
    pub orchestration_active: HashMap<String, bool>,

    /// Optional authentication token. If set, requests must include this token.
    pub required_token: Option<String>,

    /// Counter used to mint IDs for created objects.
    next_id: u32,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a service to the state.
    pub fn with_service(mut self, service: Service) -> Self {
        self.services.insert(service.reference.id.clone(), service);
        self
    }

    /// Add a user to the state.
    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.reference.id.clone(), user);
        self
    }

    /// Add a team and its members to the state.
    pub fn with_team(mut self, team: Team, members: Vec<TeamMember>) -> Self {
        self.team_members.insert(team.reference.id.clone(), members);
        self.teams.insert(team.reference.id.clone(), team);
        self
    }

    /// Add an escalation policy to the state.
    pub fn with_escalation_policy(mut self, policy: EscalationPolicy) -> Self {
        self.escalation_policies
            .insert(policy.reference.id.clone(), policy);
        self
    }

    /// Add a vendor to the state.
    pub fn with_vendor(mut self, vendor: Vendor) -> Self {
        self.vendors.insert(vendor.reference.id.clone(), vendor);
        self
    }

    /// Add a priority to the state.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priorities.insert(priority.reference.id.clone(), priority);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Check an `Authorization` header value against the required token.
    pub fn is_authorized(&self, header: Option<&str>) -> bool {
        match &self.required_token {
            Some(token) => header == Some(format!("Token token={token}").as_str()),
            None => true,
        }
    }

    /// Create a user from profile fields and return it.
    pub fn create_user(&mut self, info: UserInfo) -> User {
        self.next_id += 1;
        let id = format!("PNEW{:03}", self.next_id);
        let mut reference = ObjectRef::new(&id, "user");
        reference.summary = Some(info.name.clone());
        reference.self_url = Some(format!("https://api.pagerduty.com/users/{id}"));

        let user = User {
            reference,
            info,
            avatar_url: None,
            invitation_sent: Some(true),
            teams: vec![],
            contact_methods: vec![],
            notification_rules: vec![],
        };
        self.users.insert(id, user.clone());
        user
    }

    /// Replace a user's profile fields and return the updated user.
    pub fn update_user(&mut self, id: &str, info: UserInfo) -> Option<&User> {
        let user = self.users.get_mut(id)?;
        user.reference.summary = Some(info.name.clone());
        user.info = info;
        Some(&*user)
    }

    /// Remove a user. Returns false if it did not exist.
    pub fn delete_user(&mut self, id: &str) -> bool {
        self.users.remove(id).is_some()
    }

    /// Whether event orchestration is active for a service.
    pub fn orchestration_active(&self, service_id: &str) -> Option<bool> {
        if !self.services.contains_key(service_id) {
            return None;
        }
        Some(
            self.orchestration_active
                .get(service_id)
                .copied()
                .unwrap_or(false),
        )
    }
}
