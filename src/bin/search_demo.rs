//! Test binary for exercising the itbook.store search API end-to-end
//! This is a utility binary, not part of the library surface

use itbook_search::config::Config;
use itbook_search::provider::ItBookClient;
use itbook_search::search::{SearchOrchestrator, SearchState};
use std::env;
use std::sync::Arc;

/// How many pages to walk through at most
const MAX_PAGES: u32 = 3;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let keyword = env::args().nth(1).unwrap_or_else(|| "rust".to_string());
    println!("Searching itbook.store for '{}'...\n", keyword);

    let config = Config::from_env();
    let client = ItBookClient::new(&config)?;
    let orchestrator = SearchOrchestrator::new(Arc::new(client));

    println!("1. Fetching first page...");
    orchestrator.search(&keyword).await;
    report(&orchestrator).await;

    let mut step = 1;
    while orchestrator.state().await.has_next_page && step < MAX_PAGES {
        step += 1;
        println!("\n{}. Loading next page...", step);
        orchestrator.load_next_page().await;
        report(&orchestrator).await;
    }

    let state: SearchState = orchestrator.state().await;
    if let Some(first) = state.items.first() {
        println!("\nFirst match: {} ({})", first.title, first.isbn13);
    }

    println!("\n✓ Done");
    Ok(())
}

async fn report(orchestrator: &SearchOrchestrator) {
    if let Some(message) = orchestrator.take_last_error().await {
        eprintln!("   ⚠ {}", message);
    }
    let state = orchestrator.state().await;
    println!(
        "   ✓ {} of {} results loaded (page {}, more pages: {})",
        state.items.len(),
        state.total,
        state.current_page,
        state.has_next_page
    );
}
