//! Export service - CSV report writing

use std::path::Path;

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::{Expense, Sale};

/// Export service for CSV reports
pub struct ExportService;

/// Result of an export, for CLI/JSON output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub rows_written: usize,
    pub path: String,
}

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Write sales to a CSV file
    pub fn sales_to_csv(&self, sales: &[Sale], path: &Path) -> Result<ExportResult> {
        let mut writer = csv::Writer::from_path(path)
            .map_err(|e| crate::domain::Error::Other(format!("failed to open {}: {}", path.display(), e)))?;

        writer
            .write_record(["id", "date", "product", "customer", "quantity", "total", "paid", "due"])
            .map_err(csv_error)?;

        for sale in sales {
            writer
                .write_record([
                    sale.id.to_string(),
                    sale.sold_at.format("%Y-%m-%d").to_string(),
                    sale.product_name.clone(),
                    sale.customer_name.clone().unwrap_or_default(),
                    sale.quantity.to_string(),
                    sale.total_amount.map(|a| a.to_string()).unwrap_or_default(),
                    sale.paid.map(|a| a.to_string()).unwrap_or_default(),
                    sale.due().to_string(),
                ])
                .map_err(csv_error)?;
        }

        writer.flush()?;
        Ok(ExportResult {
            rows_written: sales.len(),
            path: path.display().to_string(),
        })
    }

    /// Write expenses to a CSV file
    pub fn expenses_to_csv(&self, expenses: &[Expense], path: &Path) -> Result<ExportResult> {
        let mut writer = csv::Writer::from_path(path)
            .map_err(|e| crate::domain::Error::Other(format!("failed to open {}: {}", path.display(), e)))?;

        writer
            .write_record(["id", "date", "title", "amount", "note"])
            .map_err(csv_error)?;

        for expense in expenses {
            writer
                .write_record([
                    expense.id.to_string(),
                    expense.spent_at.format("%Y-%m-%d").to_string(),
                    expense.title.clone(),
                    expense.amount.map(|a| a.to_string()).unwrap_or_default(),
                    expense.note.clone().unwrap_or_default(),
                ])
                .map_err(csv_error)?;
        }

        writer.flush()?;
        Ok(ExportResult {
            rows_written: expenses.len(),
            path: path.display().to_string(),
        })
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

fn csv_error(e: csv::Error) -> crate::domain::Error {
    crate::domain::Error::Other(format!("CSV write failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use tempfile::tempdir;
    use uuid::Uuid;

    #[test]
    fn test_sales_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sales.csv");

        let sales = vec![Sale {
            id: Uuid::new_v4(),
            product_name: "Pixel 8".to_string(),
            customer_name: Some("Grace".to_string()),
            quantity: 1,
            total_amount: Some(Decimal::new(69900, 2)),
            paid: Some(Decimal::new(50000, 2)),
            sold_at: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            created_at: Utc::now(),
        }];

        let result = ExportService::new().sales_to_csv(&sales, &path).unwrap();
        assert_eq!(result.rows_written, 1);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("id,date,product,customer,quantity,total,paid,due"));
        assert!(content.contains("Pixel 8"));
        assert!(content.contains("199.00")); // due = 699.00 - 500.00
    }

    #[test]
    fn test_empty_export_writes_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("expenses.csv");

        let result = ExportService::new().expenses_to_csv(&[], &path).unwrap();
        assert_eq!(result.rows_written, 0);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}
