//! CLI output formatting.

use clap::ValueEnum;
use tabled::{Table, Tabled};

use studio_entity::admin::Admin;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// Machine-readable JSON.
    Json,
}

/// One row of the admin listing table.
#[derive(Tabled)]
struct AdminRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Active")]
    active: bool,
    #[tabled(rename = "Last login")]
    last_login: String,
}

/// Print staff accounts in the selected format.
pub fn print_admins(admins: &[Admin], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(admins).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
        OutputFormat::Table => {
            let rows: Vec<AdminRow> = admins
                .iter()
                .map(|a| AdminRow {
                    name: a.name.clone(),
                    email: a.email.clone(),
                    role: a.role.to_string(),
                    active: a.is_active,
                    last_login: a
                        .last_login_at
                        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "never".to_string()),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
    }
}
