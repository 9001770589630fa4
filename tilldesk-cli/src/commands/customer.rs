//! Customer commands - list, add, and remove customers

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Confirm;
use uuid::Uuid;

use tilldesk_core::{Customer, LogEvent};

use super::{get_event_log, log_event, open_authenticated};
use crate::output;

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// List customers
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a customer
    Add {
        /// Customer name
        name: String,
        /// Phone number
        #[arg(long)]
        phone: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
        /// Postal address
        #[arg(long)]
        address: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a customer
    Rm {
        /// Customer ID
        id: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

pub fn run(command: CustomerCommands) -> Result<()> {
    match command {
        CustomerCommands::List { json } => list(json),
        CustomerCommands::Add { name, phone, email, address, json } => {
            add(name, phone, email, address, json)
        }
        CustomerCommands::Rm { id, force } => remove(&id, force),
    }
}

fn list(json: bool) -> Result<()> {
    let (ctx, token) = open_authenticated("/customers")?;

    let bar = output::spinner("Fetching customers...");
    let customers = ctx.records_service.list_customers(&token);
    bar.finish_and_clear();
    let customers = customers?;

    if json {
        println!("{}", serde_json::to_string_pretty(&customers)?);
        return Ok(());
    }

    if customers.is_empty() {
        output::info("No customers found.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Name", "Phone", "Email", "Address"]);
    for customer in &customers {
        table.add_row(vec![
            customer.id.to_string(),
            customer.name.clone(),
            customer.phone.clone().unwrap_or_else(|| "-".to_string()),
            customer.email.clone().unwrap_or_else(|| "-".to_string()),
            customer.address.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{}", table);
    println!();
    println!("{} customer(s)", customers.len().to_string().bold());
    Ok(())
}

fn add(
    name: String,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    json: bool,
) -> Result<()> {
    let log = get_event_log();
    let (ctx, token) = open_authenticated("/customers")?;

    let mut customer = Customer::new(Uuid::new_v4(), name);
    customer.phone = phone;
    customer.email = email;
    customer.address = address;

    let bar = output::spinner("Creating customer...");
    let result = ctx.records_service.add_customer(&token, customer);
    bar.finish_and_clear();

    match result {
        Ok(created) => {
            log_event(
                &log,
                LogEvent::new("record_created").with_command("customer add").with_entity("customer"),
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&created)?);
            } else {
                output::success(&format!("Added customer {} ({})", created.name, created.id));
            }
            Ok(())
        }
        Err(e) => {
            log_event(
                &log,
                LogEvent::new("create_failed")
                    .with_command("customer add")
                    .with_entity("customer")
                    .with_error(e.to_string()),
            );
            bail!("Could not add customer: {}", e)
        }
    }
}

fn remove(id: &str, force: bool) -> Result<()> {
    let log = get_event_log();
    let id: Uuid = id.parse().with_context(|| format!("invalid customer ID: {}", id))?;

    let (ctx, token) = open_authenticated("/customers")?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove customer {}?", id))
            .default(false)
            .interact()?;
        if !confirmed {
            output::info("Aborted.");
            return Ok(());
        }
    }

    match ctx.records_service.remove_customer(&token, id) {
        Ok(_) => {
            log_event(
                &log,
                LogEvent::new("record_removed").with_command("customer rm").with_entity("customer"),
            );
            output::success(&format!("Removed customer {}", id));
            Ok(())
        }
        Err(e) => {
            log_event(
                &log,
                LogEvent::new("remove_failed")
                    .with_command("customer rm")
                    .with_entity("customer")
                    .with_error(e.to_string()),
            );
            bail!("Could not remove customer: {}", e)
        }
    }
}
