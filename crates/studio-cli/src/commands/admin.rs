//! Staff account management commands.

use clap::{Args, Subcommand};

use studio_auth::password::PasswordHasher;
use studio_core::error::AppError;
use studio_database::repositories::admin::AdminRepository;
use studio_entity::admin::{AdminRole, CreateAdmin};

use crate::output;
use crate::output::OutputFormat;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new staff account
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
        /// Grant the super-admin role
        #[arg(long)]
        super_admin: bool,
    },
    /// List staff accounts
    List,
    /// Reset a staff account's password
    ResetPassword {
        /// Email of the account
        #[arg(short, long)]
        email: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;
    let admin_repo = AdminRepository::new(pool);
    let hasher = PasswordHasher::new();

    match &args.command {
        AdminCommand::Create {
            name,
            email,
            password,
            super_admin,
        } => {
            let password = resolve_password(password.as_deref())?;
            if password.chars().count() < config.auth.password_min_length {
                return Err(AppError::validation(format!(
                    "Password must be at least {} characters long",
                    config.auth.password_min_length
                )));
            }

            let role = if *super_admin {
                AdminRole::SuperAdmin
            } else {
                AdminRole::Admin
            };

            let admin = admin_repo
                .create(&CreateAdmin {
                    name: name.clone(),
                    email: email.clone(),
                    password_hash: hasher.hash_password(&password)?,
                    phone: None,
                    role,
                    permissions: Vec::new(),
                })
                .await?;

            println!("Created {} ({}) with role {}", admin.name, admin.email, admin.role);
            Ok(())
        }
        AdminCommand::List => {
            let admins = admin_repo.snapshot().await?;
            output::print_admins(&admins, format);
            Ok(())
        }
        AdminCommand::ResetPassword { email, password } => {
            let admin = admin_repo
                .find_by_email(email)
                .await?
                .ok_or_else(|| AppError::not_found(format!("No admin with email '{email}'")))?;

            let password = resolve_password(password.as_deref())?;
            admin_repo
                .update_password(admin.id, &hasher.hash_password(&password)?)
                .await?;

            println!("Password reset for {}", admin.email);
            Ok(())
        }
    }
}

/// Use the provided password or prompt for one interactively.
fn resolve_password(provided: Option<&str>) -> Result<String, AppError> {
    match provided {
        Some(p) => Ok(p.to_string()),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Prompt failed: {e}"))),
    }
}
