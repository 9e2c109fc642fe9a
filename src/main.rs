//! Accademia access-control service
//!
//! Serves the session and role matrix API, and bootstraps storage from the command line.

use accademia::auth::AuthSystem;
use accademia::auth::matrix::{RoleMatrixEntry, RoleMatrixStore};
use accademia::auth::rbac::RbacSystem;
use accademia::config::Config;
use accademia::core::models::user::UserRole;
use accademia::server::{self, builder::DEFAULT_CONFIG_PATH};
use accademia::storage::StorageLayer;
use accademia::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "accademia", version, about = "Accademia access-control service")]
struct Cli {
    /// Configuration file
    #[arg(short, long, env = "ACCADEMIA_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Apply database migrations
    Migrate,
    /// Insert default role matrix rows for roles that have none
    SeedMatrix,
    /// Print the stored role matrix
    ShowMatrix,
    /// Create an account with an explicit role
    CreateUser {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ACCADEMIA_USER_PASSWORD")]
        password: String,
        #[arg(long)]
        full_name: String,
        #[arg(long, default_value = "user")]
        role: UserRole,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

async fn open_storage(config_path: &Path) -> Result<(Config, StorageLayer)> {
    let config = Config::load(config_path).await?;
    if !config.storage.database.enabled {
        warn!("No database configured, changes made by this command are not persisted");
    }
    let storage = StorageLayer::new(&config.storage, &config.audit).await?;
    Ok((config, storage))
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => server::run_server(&cli.config).await?,
        Command::Migrate => {
            let (_, storage) = open_storage(&cli.config).await?;
            storage.migrate().await?;
            info!("Migrations applied");
        }
        Command::SeedMatrix => {
            let (_, storage) = open_storage(&cli.config).await?;
            let inserted = storage.matrix.seed(&RoleMatrixEntry::seed_all()).await?;
            println!("Seeded {} role matrix rows", inserted);
        }
        Command::ShowMatrix => {
            let (config, storage) = open_storage(&cli.config).await?;
            let store = RoleMatrixStore::new(
                storage.matrix.clone(),
                config.auth.rbac.persistence_timeout(),
            );
            let matrix = store.load().await?;
            for entry in matrix.entries() {
                println!("{} (version {})", entry.role, entry.version);
                println!("  permissions: {}", join(&entry.permissions));
                println!("  sections:    {}", join(&entry.sections));
            }
        }
        Command::CreateUser {
            email,
            password,
            full_name,
            role,
        } => {
            let (config, storage) = open_storage(&cli.config).await?;
            let auth = AuthSystem::new(
                &config.auth,
                storage.users.clone(),
                Arc::new(RbacSystem::new()),
            )?;
            let user = auth.create_user(&email, &password, &full_name, role).await?;
            println!("Created {} ({}) with role {}", user.email, user.id, user.role);
        }
    }

    Ok(())
}

fn join<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
