mod pipeline;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "reelpost")]
#[command(about = "Repost new Letterboxd reviews to Plurk")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the feed and post every review not posted before (default)
    Run {
        /// Show what would be posted without posting or saving anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Show how many reviews have been posted so far
    Status,
}

/// Logs go to stderr so stdout carries only the JSON summary.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run { dry_run: false }) {
        Commands::Run { dry_run } => {
            let config = reelpost_core::load_app_config().context("invalid configuration")?;
            init_tracing(&config.log_level);
            tracing::debug!(?config, "configuration loaded");

            let summary = if dry_run {
                pipeline::preview(&config).await?
            } else {
                pipeline::run_sync(&config).await?
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Status => {
            // Read-only: no feed URL or Plurk credentials needed.
            let config = reelpost_core::load_store_config();
            init_tracing(&config.log_level);

            let store = reelpost_store::DedupStore::new(config.data_file);
            let posted = store.load();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "data_file": store.path().display().to_string(),
                    "total_posted": posted.len(),
                }))?
            );
        }
    }

    Ok(())
}
