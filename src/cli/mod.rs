//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the pdapi binary.

use clap::{Parser, Subcommand, ValueEnum};

/// PagerDuty API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "pdapi", about = "PagerDuty API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single entity by ID.
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// The entity ID (the service ID for orchestrations).
        id: String,
    },

    /// List entities, one page or all of them.
    List {
        /// The type of entity to list.
        entity: Entity,

        /// Team ID (required for members).
        #[arg(long)]
        team: Option<String>,

        /// Name filter (response plays only).
        #[arg(long)]
        query: Option<String>,

        /// Only response plays that can be run manually.
        #[arg(long)]
        manual: bool,

        /// Offset of the first item.
        #[arg(long, conflicts_with = "all")]
        offset: Option<usize>,

        /// Number of items per page.
        #[arg(long, conflicts_with = "all")]
        limit: Option<u32>,

        /// Follow pagination and print every item.
        #[arg(long)]
        all: bool,
    },

    /// Show or switch event orchestration for a service.
    Orchestration {
        /// The service ID.
        service: String,

        /// Switch orchestration on (true) or off (false).
        #[arg(long)]
        active: Option<bool>,
    },
}

/// Entity types that can be operated on.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A service.
    #[value(alias = "services")]
    Service,
    /// A user.
    #[value(alias = "users")]
    User,
    /// A team.
    #[value(alias = "teams")]
    Team,
    /// A team membership.
    #[value(alias = "members")]
    Member,
    /// An escalation policy.
    #[value(alias = "escalation-policies")]
    EscalationPolicy,
    /// An integration vendor.
    #[value(alias = "vendors")]
    Vendor,
    /// An incident priority.
    #[value(alias = "priorities")]
    Priority,
    /// A response play.
    #[value(alias = "response-plays")]
    ResponsePlay,
    /// Event orchestration rules of a service.
    #[value(alias = "orchestrations")]
    Orchestration,
}
