//! PagerDuty API CLI binary.
//!
//! A command-line interface for browsing a PagerDuty account.

use clap::Parser;
use pdapi::cli::{Cli, Command, Entity};
use pdapi::output::PrettyPrint;
use pdapi::{
    EscalationPolicy, Get, List, PagerDutyClient, PagerDutyError, Page, Priority, ResponsePlay,
    ResponsePlayQuery, Service, ServiceOrchestration, ServiceOrchestrationStatus, Team,
    TeamMember, Update, User, Vendor, PAGE_LIMIT,
};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match PagerDutyClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set PAGERDUTY_API_KEY environment variable");
            return ExitCode::FAILURE;
        }
    };

    let result = run(&client, cli).await;
    client.close();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &PagerDutyClient, cli: Cli) -> pdapi::Result<()> {
    match cli.command {
        Command::Get { entity, id } => handle_get(client, entity, &id, cli.json).await,
        Command::List {
            entity,
            team,
            query,
            manual,
            offset,
            limit,
            all,
        } => {
            let selection = Selection {
                all,
                offset: offset.unwrap_or(0),
                limit: limit.unwrap_or(25).clamp(1, PAGE_LIMIT),
            };
            let scope = ListScope {
                team,
                plays: ResponsePlayQuery { query, manual },
            };
            handle_list(client, entity, &scope, selection, cli.json).await
        }
        Command::Orchestration { service, active } => {
            handle_orchestration(client, &service, active, cli.json).await
        }
    }
}

async fn handle_get(
    client: &PagerDutyClient,
    entity: Entity,
    id: &str,
    json: bool,
) -> pdapi::Result<()> {
    match entity {
        Entity::Service => output_single(&Service::get(client, id).await?, json),
        Entity::User => output_single(&User::get(client, id).await?, json),
        Entity::Team => output_single(&Team::get(client, id).await?, json),
        Entity::EscalationPolicy => output_single(&EscalationPolicy::get(client, id).await?, json),
        Entity::Vendor => output_single(&Vendor::get(client, id).await?, json),
        Entity::Orchestration => {
            output_single(&ServiceOrchestration::get(client, id).await?, json)
        }
        Entity::ResponsePlay => output_single(&ResponsePlay::get(client, id).await?, json),
        Entity::Member | Entity::Priority => {
            eprintln!("Hint: Use 'pdapi list' for members and priorities");
            Err(PagerDutyError::InvalidArgument(
                "members and priorities cannot be retrieved individually".to_string(),
            ))
        }
    }
}

/// Which part of a collection to print.
#[derive(Clone, Copy)]
struct Selection {
    all: bool,
    offset: usize,
    limit: u32,
}

/// Collection scopes gathered from the command line.
struct ListScope {
    team: Option<String>,
    plays: ResponsePlayQuery,
}

async fn handle_list(
    client: &PagerDutyClient,
    entity: Entity,
    scope: &ListScope,
    selection: Selection,
    json: bool,
) -> pdapi::Result<()> {
    match entity {
        Entity::Service => list::<Service, ServiceRow>(client, &(), selection, json).await,
        Entity::User => list::<User, UserRow>(client, &(), selection, json).await,
        Entity::Team => list::<Team, TeamRow>(client, &(), selection, json).await,
        Entity::Member => {
            let team = scope.team.as_deref().ok_or_else(|| {
                PagerDutyError::InvalidArgument("--team required for listing members".to_string())
            })?;
            list::<TeamMember, MemberRow>(client, team, selection, json).await
        }
        Entity::EscalationPolicy => {
            list::<EscalationPolicy, EscalationPolicyRow>(client, &(), selection, json).await
        }
        Entity::Vendor => list::<Vendor, VendorRow>(client, &(), selection, json).await,
        Entity::Priority => list::<Priority, PriorityRow>(client, &(), selection, json).await,
        Entity::ResponsePlay => {
            list::<ResponsePlay, ResponsePlayRow>(client, &scope.plays, selection, json).await
        }
        Entity::Orchestration => Err(PagerDutyError::InvalidArgument(
            "orchestrations are retrieved per service with 'pdapi get orchestration <service>'"
                .to_string(),
        )),
    }
}

async fn list<T, R>(
    client: &PagerDutyClient,
    scope: &T::Scope,
    selection: Selection,
    json: bool,
) -> pdapi::Result<()>
where
    T: List + Serialize,
    R: Tabled + for<'a> From<&'a T>,
{
    if selection.all {
        let items = T::list_all(client, scope).await?;
        output_items::<T, R>(&items, json)?;
        if !json {
            println!("\n{} items", items.len());
        }
    } else {
        let page = T::list_page(client, scope, selection.offset, selection.limit).await?;
        output_page::<T, R>(&page, json)?;
    }
    Ok(())
}

async fn handle_orchestration(
    client: &PagerDutyClient,
    service: &str,
    active: Option<bool>,
    json: bool,
) -> pdapi::Result<()> {
    let status = match active {
        Some(active) => {
            ServiceOrchestrationStatus::update(
                client,
                service,
                &ServiceOrchestrationStatus { active },
            )
            .await?
        }
        None => ServiceOrchestrationStatus::get(client, service).await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        let state = if status.active { "active" } else { "inactive" };
        println!("Event orchestration for {service}: {state}");
    }
    Ok(())
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> pdapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_items<T, R>(items: &[T], json: bool) -> pdapi::Result<()>
where
    T: Serialize,
    R: Tabled + for<'a> From<&'a T>,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(R::from).collect();
        println!("{}", Table::new(rows));
    }
    Ok(())
}

fn output_page<T, R>(page: &Page<T>, json: bool) -> pdapi::Result<()>
where
    T: Serialize,
    R: Tabled + for<'a> From<&'a T>,
{
    output_items::<T, R>(&page.items, json)?;
    if !json {
        let first = page.offset + 1;
        let last = page.offset + page.len();
        if page.more {
            println!(
                "\nItems {first}-{last} (more available, use --offset {})",
                page.next_offset()
            );
        } else {
            println!("\nItems {first}-{last} (end)");
        }
    }
    Ok(())
}

// Table row types for non-JSON output

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[derive(Tabled)]
struct ServiceRow {
    id: String,
    name: String,
    status: String,
    escalation_policy: String,
}

impl From<&Service> for ServiceRow {
    fn from(s: &Service) -> Self {
        Self {
            id: s.id().to_string(),
            name: s.name.clone(),
            status: s.status.to_string(),
            escalation_policy: s
                .escalation_policy
                .summary
                .clone()
                .unwrap_or_else(|| s.escalation_policy.id.clone()),
        }
    }
}

#[derive(Tabled)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id().to_string(),
            name: u.info.name.clone(),
            email: u.info.email.clone(),
            role: u.info.role.as_ref().map(ToString::to_string).unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct TeamRow {
    id: String,
    name: String,
    description: String,
}

impl From<&Team> for TeamRow {
    fn from(t: &Team) -> Self {
        Self {
            id: t.id().to_string(),
            name: t.name.clone(),
            description: text(&t.description),
        }
    }
}

#[derive(Tabled)]
struct MemberRow {
    user: String,
    name: String,
    role: String,
}

impl From<&TeamMember> for MemberRow {
    fn from(m: &TeamMember) -> Self {
        Self {
            user: m.user.id.clone(),
            name: text(&m.user.summary),
            role: m.role.clone(),
        }
    }
}

#[derive(Tabled)]
struct EscalationPolicyRow {
    id: String,
    name: String,
    rules: usize,
    loops: u32,
}

impl From<&EscalationPolicy> for EscalationPolicyRow {
    fn from(p: &EscalationPolicy) -> Self {
        Self {
            id: p.id().to_string(),
            name: p.name.clone(),
            rules: p.escalation_rules.len(),
            loops: p.num_loops,
        }
    }
}

#[derive(Tabled)]
struct VendorRow {
    id: String,
    name: String,
    website: String,
}

impl From<&Vendor> for VendorRow {
    fn from(v: &Vendor) -> Self {
        Self {
            id: v.reference.id.clone(),
            name: v.name.clone(),
            website: text(&v.website_url),
        }
    }
}

#[derive(Tabled)]
struct PriorityRow {
    id: String,
    name: String,
    description: String,
}

impl From<&Priority> for PriorityRow {
    fn from(p: &Priority) -> Self {
        Self {
            id: p.reference.id.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
        }
    }
}

#[derive(Tabled)]
struct ResponsePlayRow {
    id: String,
    name: String,
    team: String,
}

impl From<&ResponsePlay> for ResponsePlayRow {
    fn from(p: &ResponsePlay) -> Self {
        Self {
            id: p.reference.id.clone(),
            name: text(&p.name),
            team: p.team.as_ref().map(|t| t.name.clone()).unwrap_or_default(),
        }
    }
}
