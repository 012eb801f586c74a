use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use tracing::info;

use newsreel::{AppConfig, Showcase, Stage};

/// newsreel - Narrate news headlines and analyze text and images with AWS
#[derive(Parser, Debug)]
#[command(name = "newsreel")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Stage to run; runs every stage when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Run news, sentiment and images in order
    All,
    /// Fetch top headlines and narrate them
    News,
    /// Classify the sample passages
    Sentiment,
    /// Extract text, detect labels and compare faces
    Images,
}

impl From<Commands> for Stage {
    fn from(command: Commands) -> Self {
        match command {
            Commands::All => Stage::All,
            Commands::News => Stage::News,
            Commands::Sentiment => Stage::Sentiment,
            Commands::Images => Stage::Images,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Initialize crypto provider for TLS connections
    // This must be done before any TLS connections are attempted
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("Failed to install default crypto provider"))?;

    let cli = Cli::parse();
    let stage = cli.command.map(Stage::from).unwrap_or_default();

    // Load configuration from file or environment
    let config = if let Some(config_path) = cli.config {
        info!("Loading configuration from {}", config_path.display());
        AppConfig::from_file(&config_path)?
    } else {
        AppConfig::from_env()?
    };

    let showcase = Showcase::from_config(config);
    showcase.run(stage).await?;

    Ok(())
}
