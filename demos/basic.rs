//! Basic example demonstrating the PagerDuty API client.
//!
//! Run with:
//! ```
//! PAGERDUTY_API_KEY=your-key cargo run --example basic
//! ```

use pdapi::{
    EscalationPolicy, Get, List, PagerDutyClient, ResponsePlay, ResponsePlayQuery, Service,
    ServiceOrchestrationStatus, Team, TeamMember, Vendor,
};

#[tokio::main]
async fn main() -> pdapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating PagerDuty client...");
    let client = PagerDutyClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // List first page of services
    println!("\n--- Listing Services (first page) ---");
    let page = Service::list_page(&client, &(), 0, 10).await?;
    println!("Found {} services (more: {})", page.len(), page.more);

    for service in &page {
        println!("  - {} ({}) [{}]", service.name, service.id(), service.status);
    }

    if let Some(first) = page.items.first() {
        println!("\n--- Service Details ---");
        let service = Service::get(&client, first.id()).await?;
        println!("Service: {}", service.name);
        println!("  Created: {}", service.created_at);

        let policy = EscalationPolicy::get(&client, &service.escalation_policy.id).await?;
        println!(
            "  Escalation: {} ({} rules, {} loops)",
            policy.name,
            policy.escalation_rules.len(),
            policy.num_loops
        );

        let orchestration = ServiceOrchestrationStatus::get(&client, service.id()).await?;
        println!("  Event orchestration active: {}", orchestration.active);
    }

    // Walk every team and its members
    println!("\n--- Teams ---");
    for team in Team::list_all(&client, &()).await? {
        let members = TeamMember::list_all(&client, team.id()).await?;
        let managers = members.iter().filter(|m| m.is_manager()).count();
        println!("  {}: {} members, {} managers", team.name, members.len(), managers);
    }

    // The vendor catalog spans several pages
    println!("\n--- Vendors ---");
    let vendors = Vendor::list_all(&client, &()).await?;
    println!("Found {} vendors", vendors.len());

    // Response plays that can be run by hand
    println!("\n--- Manual Response Plays ---");
    let query = ResponsePlayQuery {
        query: None,
        manual: true,
    };
    for play in ResponsePlay::list_all(&client, &query).await? {
        println!("  - {}", play.name.as_deref().unwrap_or(&play.reference.id));
    }

    client.close();
    println!("\nDone!");
    Ok(())
}
