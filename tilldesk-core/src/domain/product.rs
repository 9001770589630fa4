//! Product domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stocked product
///
/// Prices are optional on the wire; records created before pricing was
/// mandatory in the backend omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub purchase_price: Option<Decimal>,
    #[serde(default)]
    pub selling_price: Option<Decimal>,
    /// Units currently in stock
    #[serde(default)]
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with required fields
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            category: None,
            brand: None,
            purchase_price: None,
            selling_price: None,
            quantity: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate product data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("product name cannot be empty");
        }
        if self.quantity < 0 {
            return Err("stock quantity cannot be negative");
        }
        Ok(())
    }
}
