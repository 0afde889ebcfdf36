//! dlhub - DownloadHub search and assistant from the terminal
//!
//! Searches the site's apps, drivers and pages with the same ranking the
//! website uses, and runs the chat assistant as a REPL.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use dlhub_search::config;
use dlhub_search::ranking::ScoringProfile;

mod cli;
mod ui;

/// dlhub - search DownloadHub apps, drivers and pages
#[derive(Parser)]
#[command(name = "dlhub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search and assistant for DownloadHub", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DLHUB_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the index
    Search {
        /// Search query
        query: String,

        /// Scoring profile
        #[arg(short, long, value_enum)]
        profile: Option<ScoringProfile>,

        /// Maximum results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Skip the remote collection
        #[arg(long)]
        offline: bool,
    },

    /// Search as you type, one query per input line
    Live {
        /// Scoring profile
        #[arg(short, long, value_enum)]
        profile: Option<ScoringProfile>,

        /// Skip the remote collection
        #[arg(long)]
        offline: bool,
    },

    /// Open the best match for a query
    Open {
        /// What to open
        query: String,

        /// Scoring profile
        #[arg(short, long, value_enum)]
        profile: Option<ScoringProfile>,

        /// Skip the remote collection
        #[arg(long)]
        offline: bool,
    },

    /// Talk to the assistant
    Chat {
        /// Initial message
        prompt: Option<String>,
    },

    /// Find the driver vendor closest to a (possibly misspelled) word
    Vendor {
        /// Word to match
        word: String,
    },

    /// List every indexed item
    Catalog {
        /// Skip the remote collection
        #[arg(long)]
        offline: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Initialize configuration file
        #[arg(long)]
        init: bool,
    },

    /// Show version and system info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let mut config = config::load_config(cli.config.as_deref())?;
    config.verbose = cli.verbose;

    debug!("dlhub v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Search { query, profile, limit, offline }) => {
            cli::search::run(config, &query, profile, limit, offline).await?;
        }
        Some(Commands::Live { profile, offline }) => {
            cli::live::run(config, profile, offline).await?;
        }
        Some(Commands::Open { query, profile, offline }) => {
            cli::open::run(config, &query, profile, offline).await?;
        }
        Some(Commands::Chat { prompt }) => {
            cli::chat::run(config, prompt).await?;
        }
        Some(Commands::Vendor { word }) => {
            cli::vendor::run(&word)?;
        }
        Some(Commands::Catalog { offline, json }) => {
            cli::catalog::run(config, offline, json).await?;
        }
        Some(Commands::Config { show, init }) => {
            if init {
                config::init_config(cli.config.as_deref())?;
            } else if show {
                config::show_config(&config)?;
            }
        }
        Some(Commands::Info) => {
            cli::info::run(&config)?;
        }
        None => {
            // Default: start the assistant
            cli::chat::run(config, None).await?;
        }
    }

    Ok(())
}
