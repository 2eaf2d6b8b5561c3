//! casework-server - HTTP backend for sponsored-member casework

use casework::Config;
use casework::server;
use casework::services::BootstrapHead;
use casework::storage::StorageLayer;
use casework::utils::logging::init_tracing;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "casework-server", version, about)]
struct Cli {
    /// YAML configuration file; environment variables override it
    #[arg(short, long, env = "CASEWORK_CONFIG")]
    config: Option<PathBuf>,

    /// Apply database migrations and exit
    #[arg(long)]
    migrate_only: bool,

    /// Username for the initial head account, created on an empty database
    #[arg(long, env = "CASEWORK_BOOTSTRAP_USERNAME", requires = "bootstrap_password")]
    bootstrap_username: Option<String>,

    /// Password for the initial head account
    #[arg(long, env = "CASEWORK_BOOTSTRAP_PASSWORD", hide_env_values = true)]
    bootstrap_password: Option<String>,
}

impl Cli {
    fn bootstrap_head(&self) -> Option<BootstrapHead> {
        let username = self.bootstrap_username.clone()?;
        let password = self.bootstrap_password.clone()?;

        Some(BootstrapHead {
            username,
            password,
            first_name: "Office".to_string(),
            last_name: "Head".to_string(),
        })
    }
}

async fn load_config(path: Option<&PathBuf>) -> casework::Result<Config> {
    match path {
        Some(path) => Config::from_file(path).await?.with_env_overrides(),
        None => Config::from_env(),
    }
}

async fn run(cli: Cli) -> casework::Result<()> {
    let config = load_config(cli.config.as_ref()).await?;
    init_tracing(config.logging());

    if cli.migrate_only {
        let storage = StorageLayer::new(config.storage()).await?;
        storage.migrate().await?;
        info!("Migrations applied");
        return Ok(());
    }

    server::run_server(config, cli.bootstrap_head()).await
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env file: {}", e);
        }
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
