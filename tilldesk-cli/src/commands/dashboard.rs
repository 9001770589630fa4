//! Dashboard command - summary cards in the terminal

use anyhow::Result;
use colored::Colorize;

use tilldesk_core::domain::CardSummary;
use tilldesk_core::{LogEvent, Trend};

use super::{get_event_log, log_event, open_authenticated};
use crate::output;

fn trend_marker(card: &CardSummary) -> String {
    match card.trend {
        Some(Trend::Up) => "▲".green().to_string(),
        Some(Trend::Down) => "▼".red().to_string(),
        Some(Trend::Flat) => "–".normal().to_string(),
        None => String::new(),
    }
}

pub fn run(json: bool) -> Result<()> {
    let log = get_event_log();
    let (ctx, token) = open_authenticated("/")?;

    let bar = output::spinner("Fetching dashboard...");
    let report = ctx.dashboard_service.report(&token);
    bar.finish_and_clear();

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            log_event(
                &log,
                LogEvent::new("dashboard_failed").with_command("dashboard").with_error(e.to_string()),
            );
            return Err(e.into());
        }
    };
    log_event(&log, LogEvent::new("command_executed").with_command("dashboard"));

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let currency = &ctx.config.currency;

    println!("{}", "Shop Overview".bold());
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["", "Total", "Last day", "Trend"]);
    for (label, card) in [
        ("Sales", &report.sales),
        ("Purchases", &report.purchases),
        ("Exchanges", &report.exchanges),
        ("Service jobs", &report.services),
    ] {
        let last = card
            .last_point
            .as_ref()
            .map(|p| output::format_money(p.value(), currency))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            label.to_string(),
            output::format_money(card.total, currency),
            last,
            trend_marker(card),
        ]);
    }
    println!("{}", table);
    println!();

    println!(
        "Expenses: {} ({}% of sales)",
        output::format_money(report.expense_total, currency),
        report.expense_share_of_sales
    );
    println!();

    if !report.top_products.is_empty() {
        println!("{}", "Top Products".bold());
        let mut table = output::create_table();
        table.set_header(vec!["Product", "Units sold"]);
        for product in &report.top_products {
            table.add_row(vec![product.name.clone(), product.quantity.to_string()]);
        }
        println!("{}", table);
    }

    Ok(())
}
