//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{
    EscalationPolicy, ObjectRef, ResponsePlay, Service, ServiceOrchestration, Team, User, Vendor,
};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn header(kind: &str, id: &str) -> Vec<String> {
    let header = format!("{kind}: {id}");
    let divider = "─".repeat(header.chars().count().max(30));
    vec![header, divider]
}

fn summaries(refs: &[ObjectRef]) -> String {
    refs.iter()
        .map(|r| r.summary.as_deref().unwrap_or(&r.id))
        .collect::<Vec<_>>()
        .join(", ")
}

impl PrettyPrint for Service {
    fn pretty_print(&self) -> String {
        let mut lines = header("Service", self.id());
        lines.push(format!("Name:           {}", self.name));
        lines.push(format!("Status:         {}", self.status));

        if let Some(ref description) = self.description {
            lines.push(format!("Description:    {}", description));
        }

        lines.push(format!(
            "Escalation:     {}",
            self.escalation_policy
                .summary
                .as_deref()
                .unwrap_or(&self.escalation_policy.id)
        ));

        if !self.teams.is_empty() {
            lines.push(format!("Teams:          {}", summaries(&self.teams)));
        }

        lines.push(format!(
            "Created:        {}",
            self.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        if let Some(ref last) = self.last_incident_timestamp {
            lines.push(format!("Last Incident:  {}", last.format("%Y-%m-%d %H:%M:%S UTC")));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for User {
    fn pretty_print(&self) -> String {
        let mut lines = header("User", self.id());
        lines.push(format!("Name:           {}", self.info.name));
        lines.push(format!("Email:          {}", self.info.email));

        if let Some(ref role) = self.info.role {
            lines.push(format!("Role:           {}", role));
        }

        if let Some(ref title) = self.info.job_title {
            lines.push(format!("Job Title:      {}", title));
        }

        if let Some(ref tz) = self.info.time_zone {
            lines.push(format!("Time Zone:      {}", tz));
        }

        if !self.teams.is_empty() {
            lines.push(format!("Teams:          {}", summaries(&self.teams)));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Team {
    fn pretty_print(&self) -> String {
        let mut lines = header("Team", self.id());
        lines.push(format!("Name:           {}", self.name));

        if let Some(ref description) = self.description {
            lines.push(format!("Description:    {}", description));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for EscalationPolicy {
    fn pretty_print(&self) -> String {
        let mut lines = header("Escalation Policy", self.id());
        lines.push(format!("Name:           {}", self.name));
        lines.push(format!("Loops:          {}", self.num_loops));

        for (i, rule) in self.escalation_rules.iter().enumerate() {
            lines.push(format!(
                "Rule {}:         {} (after {} min)",
                i + 1,
                summaries(&rule.targets),
                rule.escalation_delay_in_minutes
            ));
        }

        if !self.services.is_empty() {
            lines.push(format!("Services:       {}", summaries(&self.services)));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Vendor {
    fn pretty_print(&self) -> String {
        let mut lines = header("Vendor", &self.reference.id);
        lines.push(format!("Name:           {}", self.name));

        if let Some(ref website) = self.website_url {
            lines.push(format!("Website:        {}", website));
        }

        if let Some(ref guide) = self.integration_guide_url {
            lines.push(format!("Guide:          {}", guide));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for ResponsePlay {
    fn pretty_print(&self) -> String {
        let mut lines = header("Response Play", &self.reference.id);

        if let Some(ref name) = self.name {
            lines.push(format!("Name:           {}", name));
        }

        if let Some(ref team) = self.team {
            lines.push(format!("Team:           {}", team.name));
        }

        if !self.responders.is_empty() {
            lines.push(format!("Responders:     {}", summaries(&self.responders)));
        }

        if !self.subscribers.is_empty() {
            lines.push(format!("Subscribers:    {}", summaries(&self.subscribers)));
        }

        if let Some(ref url) = self.conference_url {
            lines.push(format!("Conference:     {}", url));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for ServiceOrchestration {
    fn pretty_print(&self) -> String {
        let mut lines = header("Orchestration", &self.parent.id);
        lines.push(format!("Rule Sets:      {}", self.sets.len()));
        lines.push(format!("Rules:          {}", self.rule_count()));
        lines.join("\n")
    }
}
