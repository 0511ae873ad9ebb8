use anyhow::{Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hintsort_core::{load_config, render, validate_config, Organizer};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config().context("Failed to load configuration")?;
    validate_config(&config).context("Configuration validation failed")?;

    info!("=== Organizing project files ===");
    info!("Source files: {}", config.source_dir.display());
    info!("Project directory: {}", config.project_dir.display());

    let organizer = Organizer::from_config(&config);
    let report = organizer
        .run()
        .await
        .with_context(|| format!("Cannot organize {}", config.source_dir.display()))?;

    match serde_json::to_string(&report) {
        Ok(json) => debug!(report = %json, "Run finished"),
        Err(e) => debug!("Could not serialize run report: {}", e),
    }

    println!();
    println!("{}", render(&report, &config.project_dir));

    Ok(())
}
