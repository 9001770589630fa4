//! Tilldesk CLI - point-of-sale administration in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{customer, dashboard, export, login, logout, logs, records, whoami};
use commands::records::{RecordCommands, RecordKind};

/// Tilldesk - point-of-sale administration in your terminal
#[derive(Parser)]
#[command(name = "till", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in to the backend
    Login {
        /// Account email (prompted when omitted)
        email: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log out and forget the stored session
    Logout,

    /// Show the current session
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the shop dashboard
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage sales
    Sale {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Manage purchases
    Purchase {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Manage exchanges
    Exchange {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Manage service jobs
    Service {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Manage products
    Product {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Manage expenses
    Expense {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Manage customers
    Customer {
        #[command(subcommand)]
        command: customer::CustomerCommands,
    },

    /// Export reports to CSV
    Export {
        #[command(subcommand)]
        command: export::ExportCommands,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login { email, json } => login::run(email, json),
        Commands::Logout => logout::run(),
        Commands::Whoami { json } => whoami::run(json),
        Commands::Dashboard { json } => dashboard::run(json),
        Commands::Sale { command } => records::run(RecordKind::Sale, command),
        Commands::Purchase { command } => records::run(RecordKind::Purchase, command),
        Commands::Exchange { command } => records::run(RecordKind::Exchange, command),
        Commands::Service { command } => records::run(RecordKind::Service, command),
        Commands::Product { command } => records::run(RecordKind::Product, command),
        Commands::Expense { command } => records::run(RecordKind::Expense, command),
        Commands::Customer { command } => customer::run(command),
        Commands::Export { command } => export::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}
