use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "syan")]
#[command(about = "SYAN.EARTH - climate correlation dashboard and relay", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the relay in front of the Messages API
    Serve {
        /// Address to bind, overrides relay.toml
        #[arg(long)]
        addr: Option<String>,
        /// Path to relay.toml (default: ~/.config/syan/relay.toml)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Path to secret.json (default: ~/.config/syan/secret.json)
        #[arg(long)]
        secret: Option<PathBuf>,
    },
    /// List engines, datasets and analysis types
    Catalog {
        /// Only show this engine
        #[arg(long)]
        engine: Option<String>,
    },
    /// Print the request that would be sent for a selection
    Compose(SelectionArgs),
    /// Compose a request, send it through the relay and print the analysis
    Analyze {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Relay endpoint
        #[arg(long, default_value = syan_interaction::DEFAULT_RELAY_URL)]
        relay_url: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Dashboard selections expressed as flags.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Engine id (global, tampa-bay)
    #[arg(long, default_value = "global")]
    pub engine: String,
    /// Dataset id to select; repeat for several
    #[arg(long = "source", short = 's')]
    pub sources: Vec<String>,
    /// Select every dataset of the engine
    #[arg(long, conflicts_with = "sources")]
    pub all: bool,
    /// Analysis type key (defaults to the engine's default)
    #[arg(long)]
    pub analysis: Option<String>,
    /// Free-text question
    #[arg(long, short = 'q')]
    pub query: Option<String>,
    #[arg(long)]
    pub no_web_search: bool,
    #[arg(long)]
    pub no_knowledge_base: bool,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub max_tokens: Option<u32>,
    /// Replace the analysis instructions with this system prompt
    #[arg(long)]
    pub system: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            addr,
            config,
            secret,
        } => commands::serve::run(addr, config, secret).await?,
        Commands::Catalog { engine } => commands::catalog::run(engine.as_deref())?,
        Commands::Compose(selection) => commands::compose::run(&selection)?,
        Commands::Analyze {
            selection,
            relay_url,
            json,
        } => commands::analyze::run(&selection, &relay_url, json).await?,
    }

    Ok(())
}
