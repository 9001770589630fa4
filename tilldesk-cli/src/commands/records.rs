//! Record commands - list and remove the backend's records
//!
//! One implementation for the six record types that share the same
//! list/remove shape. Rendering differs per kind; the flow does not.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Confirm;
use uuid::Uuid;

use tilldesk_core::LogEvent;

use super::{get_event_log, log_event, open_authenticated};
use crate::output;

#[derive(Subcommand)]
pub enum RecordCommands {
    /// List records
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a record
    Rm {
        /// Record ID
        id: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

/// Which record family a command operates on
#[derive(Debug, Clone, Copy)]
pub enum RecordKind {
    Sale,
    Purchase,
    Exchange,
    Service,
    Product,
    Expense,
}

impl RecordKind {
    /// The dashboard route this record family lives under
    fn route(&self) -> &'static str {
        match self {
            RecordKind::Sale => "/sales",
            RecordKind::Purchase => "/purchases",
            RecordKind::Exchange => "/exchanges",
            RecordKind::Service => "/services",
            RecordKind::Product => "/products",
            RecordKind::Expense => "/expenses",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            RecordKind::Sale => "sale",
            RecordKind::Purchase => "purchase",
            RecordKind::Exchange => "exchange",
            RecordKind::Service => "service job",
            RecordKind::Product => "product",
            RecordKind::Expense => "expense",
        }
    }
}

pub fn run(kind: RecordKind, command: RecordCommands) -> Result<()> {
    match command {
        RecordCommands::List { json } => list(kind, json),
        RecordCommands::Rm { id, force } => remove(kind, &id, force),
    }
}

fn list(kind: RecordKind, json: bool) -> Result<()> {
    let (ctx, token) = open_authenticated(kind.route())?;
    let currency = ctx.config.currency.clone();
    render_list(&ctx, &token, kind, json, &currency)
}

fn render_list(
    ctx: &tilldesk_core::TilldeskContext,
    token: &str,
    kind: RecordKind,
    json: bool,
    currency: &str,
) -> Result<()> {
    match kind {
        RecordKind::Sale => {
            let sales = ctx.records_service.list_sales(token)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&sales)?);
                return Ok(());
            }
            let mut table = output::create_table();
            table.set_header(vec!["ID", "Date", "Product", "Customer", "Qty", "Total", "Paid", "Due"]);
            for sale in &sales {
                table.add_row(vec![
                    sale.id.to_string(),
                    sale.sold_at.format("%Y-%m-%d").to_string(),
                    sale.product_name.clone(),
                    sale.customer_name.clone().unwrap_or_else(|| "-".to_string()),
                    sale.quantity.to_string(),
                    output::format_opt_money(sale.total_amount, currency),
                    output::format_opt_money(sale.paid, currency),
                    output::format_money(sale.due(), currency),
                ]);
            }
            print_table(table, sales.len(), kind);
        }
        RecordKind::Purchase => {
            let purchases = ctx.records_service.list_purchases(token)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&purchases)?);
                return Ok(());
            }
            let mut table = output::create_table();
            table.set_header(vec!["ID", "Date", "Product", "Supplier", "Qty", "Total", "Paid"]);
            for purchase in &purchases {
                table.add_row(vec![
                    purchase.id.to_string(),
                    purchase.purchased_at.format("%Y-%m-%d").to_string(),
                    purchase.product_name.clone(),
                    purchase.supplier.clone().unwrap_or_else(|| "-".to_string()),
                    purchase.quantity.to_string(),
                    output::format_opt_money(purchase.total_amount, currency),
                    output::format_opt_money(purchase.paid, currency),
                ]);
            }
            print_table(table, purchases.len(), kind);
        }
        RecordKind::Exchange => {
            let exchanges = ctx.records_service.list_exchanges(token)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&exchanges)?);
                return Ok(());
            }
            let mut table = output::create_table();
            table.set_header(vec!["ID", "Date", "Incoming", "Outgoing", "Customer", "Adjustment"]);
            for exchange in &exchanges {
                table.add_row(vec![
                    exchange.id.to_string(),
                    exchange.exchanged_at.format("%Y-%m-%d").to_string(),
                    exchange.incoming_product.clone(),
                    exchange.outgoing_product.clone(),
                    exchange.customer_name.clone().unwrap_or_else(|| "-".to_string()),
                    output::format_opt_money(exchange.adjustment_amount, currency),
                ]);
            }
            print_table(table, exchanges.len(), kind);
        }
        RecordKind::Service => {
            let jobs = ctx.records_service.list_service_jobs(token)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&jobs)?);
                return Ok(());
            }
            let mut table = output::create_table();
            table.set_header(vec!["ID", "Received", "Device", "Issue", "Customer", "Charge", "Status"]);
            for job in &jobs {
                table.add_row(vec![
                    job.id.to_string(),
                    job.received_at.format("%Y-%m-%d").to_string(),
                    job.device.clone(),
                    job.issue.clone().unwrap_or_else(|| "-".to_string()),
                    job.customer_name.clone().unwrap_or_else(|| "-".to_string()),
                    output::format_opt_money(job.charge, currency),
                    job.status.as_str().to_string(),
                ]);
            }
            print_table(table, jobs.len(), kind);
        }
        RecordKind::Product => {
            let products = ctx.records_service.list_products(token)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&products)?);
                return Ok(());
            }
            let mut table = output::create_table();
            table.set_header(vec!["ID", "Name", "Category", "Brand", "In stock", "Sells at"]);
            for product in &products {
                table.add_row(vec![
                    product.id.to_string(),
                    product.name.clone(),
                    product.category.clone().unwrap_or_else(|| "-".to_string()),
                    product.brand.clone().unwrap_or_else(|| "-".to_string()),
                    product.quantity.to_string(),
                    output::format_opt_money(product.selling_price, currency),
                ]);
            }
            print_table(table, products.len(), kind);
        }
        RecordKind::Expense => {
            let expenses = ctx.records_service.list_expenses(token)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&expenses)?);
                return Ok(());
            }
            let mut table = output::create_table();
            table.set_header(vec!["ID", "Date", "Title", "Amount", "Note"]);
            for expense in &expenses {
                table.add_row(vec![
                    expense.id.to_string(),
                    expense.spent_at.format("%Y-%m-%d").to_string(),
                    expense.title.clone(),
                    output::format_opt_money(expense.amount, currency),
                    expense.note.clone().unwrap_or_else(|| "-".to_string()),
                ]);
            }
            print_table(table, expenses.len(), kind);
        }
    }
    Ok(())
}

fn print_table(table: comfy_table::Table, count: usize, kind: RecordKind) {
    if count == 0 {
        output::info(&format!("No {}s found.", kind.noun()));
        return;
    }
    println!("{}", table);
    println!();
    println!("{} {}(s)", count.to_string().bold(), kind.noun());
}

fn remove(kind: RecordKind, id: &str, force: bool) -> Result<()> {
    let log = get_event_log();
    let id: Uuid = id.parse().with_context(|| format!("invalid {} ID: {}", kind.noun(), id))?;

    let (ctx, token) = open_authenticated(kind.route())?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {} {}?", kind.noun(), id))
            .default(false)
            .interact()?;
        if !confirmed {
            output::info("Aborted.");
            return Ok(());
        }
    }

    let result = match kind {
        RecordKind::Sale => ctx.records_service.remove_sale(&token, id),
        RecordKind::Purchase => ctx.records_service.remove_purchase(&token, id),
        RecordKind::Exchange => ctx.records_service.remove_exchange(&token, id),
        RecordKind::Service => ctx.records_service.remove_service_job(&token, id),
        RecordKind::Product => ctx.records_service.remove_product(&token, id),
        RecordKind::Expense => ctx.records_service.remove_expense(&token, id),
    };

    match result {
        Ok(removed) => {
            log_event(
                &log,
                LogEvent::new("record_removed").with_command("rm").with_entity(removed.kind),
            );
            output::success(&format!("Removed {} {}", kind.noun(), id));
            Ok(())
        }
        Err(e) => {
            log_event(
                &log,
                LogEvent::new("remove_failed")
                    .with_command("rm")
                    .with_entity(kind.noun())
                    .with_error(e.to_string()),
            );
            bail!("Could not remove {}: {}", kind.noun(), e)
        }
    }
}
