//! Export command - write CSV reports

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use tilldesk_core::services::ExportService;
use tilldesk_core::LogEvent;

use super::{get_event_log, log_event, open_authenticated};
use crate::output;

#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export sales to CSV
    Sales {
        /// Output file
        #[arg(short, long, default_value = "sales.csv")]
        output: PathBuf,
    },
    /// Export expenses to CSV
    Expenses {
        /// Output file
        #[arg(short, long, default_value = "expenses.csv")]
        output: PathBuf,
    },
}

pub fn run(command: ExportCommands) -> Result<()> {
    let log = get_event_log();
    let exporter = ExportService::new();

    let result = match command {
        ExportCommands::Sales { output: path } => {
            let (ctx, token) = open_authenticated("/sales")?;
            let bar = output::spinner("Fetching sales...");
            let sales = ctx.records_service.list_sales(&token);
            bar.finish_and_clear();
            exporter.sales_to_csv(&sales?, &path)
        }
        ExportCommands::Expenses { output: path } => {
            let (ctx, token) = open_authenticated("/expenses")?;
            let bar = output::spinner("Fetching expenses...");
            let expenses = ctx.records_service.list_expenses(&token);
            bar.finish_and_clear();
            exporter.expenses_to_csv(&expenses?, &path)
        }
    }?;

    log_event(&log, LogEvent::new("export_completed").with_command("export"));
    output::success(&format!("Wrote {} row(s) to {}", result.rows_written, result.path));
    Ok(())
}
