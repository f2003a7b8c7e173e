//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::{DateTime, Utc};

use crate::{
    EscalationPolicy, EscalationRule, HandoffNotifications, IncidentUrgencyRule, ObjectRef,
    Priority, Service, ServiceStatus, Team, TeamMember, Urgency, UrgencyType, User, UserInfo,
    UserRole, Vendor,
};

/// 2024-01-01T00:00:00Z, the creation time of every fixture.
const FIXTURE_EPOCH: i64 = 1_704_067_200;

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    fn reference(id: &str, ref_type: &str, summary: &str, collection: &str) -> ObjectRef {
        ObjectRef {
            id: id.to_string(),
            ref_type: ref_type.to_string(),
            summary: Some(summary.to_string()),
            self_url: Some(format!("https://api.pagerduty.com/{collection}/{id}")),
            html_url: Some(format!("https://acme.pagerduty.com/{collection}/{id}")),
        }
    }

    fn created_at() -> DateTime<Utc> {
        DateTime::from_timestamp(FIXTURE_EPOCH, 0).unwrap_or_default()
    }

    // =========================================================================
    // Service Fixtures
    // =========================================================================

    /// Create an active service routed through `PEP001`.
    pub fn service(id: &str, name: &str) -> Service {
        Service {
            reference: Self::reference(id, "service", name, "services"),
            name: name.to_string(),
            description: None,
            auto_resolve_timeout: Some(14_400),
            acknowledgement_timeout: Some(600),
            created_at: Self::created_at(),
            status: ServiceStatus::Active,
            last_incident_timestamp: None,
            escalation_policy: ObjectRef::new("PEP001", "escalation_policy_reference"),
            teams: vec![],
            integrations: vec![],
            incident_urgency_rule: Some(IncidentUrgencyRule {
                urgency: Some(Urgency::High),
                urgency_type: UrgencyType::Constant,
                during_support_hours: None,
                outside_support_hours: None,
            }),
            support_hours: None,
        }
    }

    /// Create `count` services with sequential IDs (`PSVC0001`, ...).
    pub fn numbered_services(count: usize) -> Vec<Service> {
        (1..=count)
            .map(|i| Self::service(&format!("PSVC{i:04}"), &format!("Service {i}")))
            .collect()
    }

    // =========================================================================
    // User and Team Fixtures
    // =========================================================================

    /// Create a user with a role.
    pub fn user(id: &str, name: &str, email: &str, role: UserRole) -> User {
        let mut info = UserInfo::new(name, email);
        info.role = Some(role);
        info.time_zone = Some("UTC".to_string());
        User {
            reference: Self::reference(id, "user", name, "users"),
            info,
            avatar_url: None,
            invitation_sent: Some(false),
            teams: vec![],
            contact_methods: vec![],
            notification_rules: vec![],
        }
    }

    /// Create a team.
    pub fn team(id: &str, name: &str) -> Team {
        Team {
            reference: Self::reference(id, "team", name, "teams"),
            name: name.to_string(),
            description: None,
        }
    }

    /// Create a team membership for a user.
    pub fn team_member(user: &User, role: &str) -> TeamMember {
        let mut reference = ObjectRef::new(user.id(), "user_reference");
        reference.summary = Some(user.info.name.clone());
        TeamMember {
            user: reference,
            role: role.to_string(),
        }
    }

    // =========================================================================
    // Escalation, Vendor and Priority Fixtures
    // =========================================================================

    /// Create a single-rule escalation policy targeting `user_id`.
    pub fn escalation_policy(id: &str, name: &str, user_id: &str) -> EscalationPolicy {
        EscalationPolicy {
            reference: Self::reference(id, "escalation_policy", name, "escalation_policies"),
            name: name.to_string(),
            description: None,
            num_loops: 0,
            on_call_handoff_notifications: HandoffNotifications::IfHasServices,
            escalation_rules: vec![EscalationRule {
                id: format!("{id}R1"),
                escalation_delay_in_minutes: 30,
                targets: vec![ObjectRef::new(user_id, "user_reference")],
            }],
            services: vec![],
            teams: vec![],
        }
    }

    /// Create a vendor. Vendors carry no web URL.
    pub fn vendor(id: &str, name: &str) -> Vendor {
        let mut reference = Self::reference(id, "vendor", name, "vendors");
        reference.html_url = None;
        Vendor {
            reference,
            name: name.to_string(),
            website_url: Some(format!("https://{}.example.com", name.to_lowercase())),
            logo_url: None,
            thumbnail_url: None,
            description: None,
            integration_guide_url: None,
        }
    }

    /// Create a priority.
    pub fn priority(id: &str, name: &str, description: &str) -> Priority {
        Priority {
            reference: Self::reference(id, "priority", name, "priorities"),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related entities.
pub struct DefaultScenario {
    pub services: Vec<Service>,
    pub users: Vec<User>,
    pub teams: Vec<(Team, Vec<TeamMember>)>,
    pub escalation_policies: Vec<EscalationPolicy>,
    pub vendors: Vec<Vendor>,
    pub priorities: Vec<Priority>,
    /// Services with event orchestration switched on.
    pub orchestrated_services: Vec<String>,
}

impl DefaultScenario {
    fn new() -> Self {
        let jane = Fixtures::user("PUSER01", "Jane Doe", "jane@example.com", UserRole::Admin);
        let john = Fixtures::user("PUSER02", "John Roe", "john@example.com", UserRole::User);

        let teams = vec![(
            Fixtures::team("PTEAM01", "Engineering"),
            vec![
                Fixtures::team_member(&jane, "manager"),
                Fixtures::team_member(&john, "responder"),
            ],
        )];

        Self {
            services: vec![
                Fixtures::service("PSVC001", "Checkout"),
                Fixtures::service("PSVC002", "Payments"),
            ],
            users: vec![jane, john],
            teams,
            escalation_policies: vec![Fixtures::escalation_policy(
                "PEP001",
                "Engineering Escalation",
                "PUSER01",
            )],
            vendors: vec![
                Fixtures::vendor("PVEND01", "Datadog"),
                Fixtures::vendor("PVEND02", "Prometheus"),
            ],
            priorities: vec![
                Fixtures::priority("PPRI001", "P1", "Critical"),
                Fixtures::priority("PPRI002", "P2", "High"),
            ],
            orchestrated_services: vec!["PSVC001".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_fixture() {
        let service = Fixtures::service("PSVC001", "Checkout");
        assert_eq!(service.id(), "PSVC001");
        assert!(service.is_active());
        assert_eq!(service.created_at.timestamp(), FIXTURE_EPOCH);
    }

    #[test]
    fn test_numbered_services() {
        let services = Fixtures::numbered_services(3);
        let ids: Vec<_> = services.iter().map(Service::id).collect();
        assert_eq!(ids, vec!["PSVC0001", "PSVC0002", "PSVC0003"]);
    }

    #[test]
    fn test_fixtures_survive_json() {
        // Fixtures are served as JSON and must decode back
        let user = Fixtures::user("PUSER09", "Ann", "ann@example.com", UserRole::Observer);
        let json = serde_json::to_value(&user).unwrap();
        let decoded: User = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn test_default_scenario() {
        let scenario = Fixtures::default_scenario();
        assert!(!scenario.services.is_empty());
        assert!(!scenario.users.is_empty());
        assert_eq!(scenario.teams[0].1.len(), 2);
        assert!(!scenario.vendors.is_empty());
    }
}
