use catalog_browser::errors::Result;
use catalog_browser::{config, core, tui};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the fixture catalog
    let fixtures = config::fixtures::resolve_fixtures()
        .inspect_err(|e| error!("Failed to load fixture catalog: {e}"))?;
    info!(
        "Loaded {} users, {} categories, {} products.",
        fixtures.users.len(),
        fixtures.categories.len(),
        fixtures.products.len()
    );

    // 4. Build the enriched product list (fails fast on dangling references)
    let catalog = core::enrich::build_catalog(&fixtures)
        .inspect(|c| info!("Enriched {} products successfully.", c.len()))
        .inspect_err(|e| error!("Fixture catalog failed referential checks: {e}"))?;

    // 5. Run the terminal UI
    let categories = fixtures
        .categories
        .iter()
        .map(|c| c.title.clone())
        .collect();
    tui::run(catalog, categories)?;

    Ok(())
}
