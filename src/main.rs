//! # Folio CLI
//!
//! In-document search service for self-hosted reading platforms.
//!
//! Usage:
//!   folio serve                              # Start the HTTP gateway
//!   folio search -d book.txt -q "whales"     # One-shot search, JSON output
//!   folio info                               # Show effective configuration

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use folio_core::config::FolioConfig;
use folio_search::engine::{SearchEngine, SearchRequest};
use folio_search::loader::ContentLoader;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "📖 Folio — in-document search for reading platforms"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Override listen host
        #[arg(long)]
        host: Option<String>,

        /// Override listen port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Search a document and print the result as JSON
    Search {
        /// Document path or URL
        #[arg(short, long)]
        document: String,

        /// Query string
        #[arg(short, long)]
        query: String,

        /// Result page (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Results per page
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Show effective configuration
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "folio=debug,folio_core=debug,folio_search=debug,folio_gateway=debug"
    } else {
        "folio=info,folio_gateway=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    let config_path = cli.config.as_ref().map(PathBuf::from);
    let config = FolioConfig::load_or_default(config_path.as_deref());

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.gateway.host = host;
            }
            if let Some(port) = port {
                config.gateway.port = port;
            }
            folio_gateway::serve(config).await?;
        }

        Commands::Search { document, query, page, limit } => {
            let loader = ContentLoader::new(
                config.search.max_document_bytes,
                config.search.fetch_timeout_secs,
            )?;
            let engine = SearchEngine::new(loader, config.search.clone());
            let response = engine
                .search(&SearchRequest { document_locator: document, query, page, limit })
                .await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Info => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
