//! CLI command definitions and dispatch.

pub mod admin;
pub mod migrate;

use clap::{Parser, Subcommand};
use sqlx::PgPool;

use studio_core::config::AppConfig;
use studio_core::error::AppError;

use crate::output::OutputFormat;

/// Meridian Studio — operations backend administration
#[derive(Debug, Parser)]
#[command(name = "studio", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects config/{env}.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Staff account management
    Admin(admin::AdminArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Admin(args) => admin::execute(args, &self.env, self.format).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
        }
    }
}

/// Helper: load configuration for the given environment.
pub(crate) fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: connect a database pool from configuration.
pub(crate) async fn create_db_pool(config: &AppConfig) -> Result<PgPool, AppError> {
    let db = studio_database::DatabasePool::connect(&config.database).await?;
    Ok(db.into_pool())
}
