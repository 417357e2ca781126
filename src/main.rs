use std::path::PathBuf;

use clap::Parser;
use salary_rank::api::{AppState, DEFAULT_PUBLIC_URL, create_router};
use salary_rank::config::ConfigLoader;
use salary_rank::logging;

/// Serves salary percentile results over HTTP.
#[derive(Debug, Parser)]
#[command(name = "salary-rank", version, about)]
struct Cli {
    /// Directory holding dataset.yaml, regions.yaml and industries.yaml.
    #[arg(long, env = "SALARY_RANK_CONFIG", default_value = "./config/plfs_2023_24")]
    config: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "SALARY_RANK_BIND", default_value = "127.0.0.1:3000")]
    bind: String,

    /// Public origin used in share links.
    #[arg(long, env = "SALARY_RANK_PUBLIC_URL", default_value = DEFAULT_PUBLIC_URL)]
    public_url: String,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let loader = ConfigLoader::load(&cli.config).inspect_err(|e| {
        tracing::error!(config = %cli.config.display(), error = %e, "Failed to load reference data");
    })?;
    tracing::info!(
        dataset = %loader.dataset().name,
        regions = loader.table().regions().len(),
        industries = loader.table().industries().len(),
        "Reference data loaded"
    );

    let state = AppState::with_public_url(loader.into_table(), &cli.public_url);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    tracing::info!(bind = %cli.bind, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
