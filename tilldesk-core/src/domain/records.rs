//! Transactional records
//!
//! The sale, purchase, exchange, service-job, and expense records the
//! backend administers. These are wire types: amounts are optional where
//! historical records may omit them, and aggregation treats a missing
//! amount as zero.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed sale
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Uuid,
    pub product_name: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    /// Amount actually received; the rest is due
    #[serde(default)]
    pub paid: Option<Decimal>,
    pub sold_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}

fn default_quantity() -> i64 {
    1
}

impl Sale {
    /// Outstanding amount on this sale, zero when fully settled
    pub fn due(&self) -> Decimal {
        let total = self.total_amount.unwrap_or(Decimal::ZERO);
        let paid = self.paid.unwrap_or(Decimal::ZERO);
        (total - paid).max(Decimal::ZERO)
    }
}

/// Stock bought in from a supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: Uuid,
    pub product_name: String,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    pub paid: Option<Decimal>,
    pub purchased_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A device traded in against another
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    pub id: Uuid,
    /// What the customer handed over
    pub incoming_product: String,
    /// What the customer took away
    pub outgoing_product: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Cash difference settled on top of the trade, signed towards the shop
    #[serde(default)]
    pub adjustment_amount: Option<Decimal>,
    pub exchanged_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Repair/servicing status as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Received,
    InProgress,
    Ready,
    Delivered,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Received => "received",
            ServiceStatus::InProgress => "in progress",
            ServiceStatus::Ready => "ready",
            ServiceStatus::Delivered => "delivered",
        }
    }
}

/// A repair job taken in for servicing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceJob {
    pub id: Uuid,
    pub device: String,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub charge: Option<Decimal>,
    pub status: ServiceStatus,
    pub received_at: NaiveDate,
    #[serde(default)]
    pub delivered_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// A shop expense
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub note: Option<String>,
    pub spent_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(total: Option<i64>, paid: Option<i64>) -> Sale {
        Sale {
            id: Uuid::new_v4(),
            product_name: "Pixel 8".to_string(),
            customer_name: None,
            quantity: 1,
            total_amount: total.map(|t| Decimal::new(t, 2)),
            paid: paid.map(|p| Decimal::new(p, 2)),
            sold_at: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_due_amount() {
        assert_eq!(sale(Some(10000), Some(6000)).due(), Decimal::new(4000, 2));
        assert_eq!(sale(Some(10000), None).due(), Decimal::new(10000, 2));
        assert_eq!(sale(None, None).due(), Decimal::ZERO);
        // Overpayment never reports negative due
        assert_eq!(sale(Some(5000), Some(6000)).due(), Decimal::ZERO);
    }

    #[test]
    fn test_sale_wire_defaults() {
        let json = r#"{
            "id": "11111111-1111-1111-1111-111111111111",
            "productName": "Pixel 8",
            "soldAt": "2025-03-01",
            "createdAt": "2025-03-01T10:00:00Z"
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.quantity, 1);
        assert!(sale.total_amount.is_none());
        assert!(sale.customer_name.is_none());
    }

    #[test]
    fn test_service_status_wire_format() {
        let job: ServiceStatus = serde_json::from_str(r#""inprogress""#).unwrap();
        assert_eq!(job, ServiceStatus::InProgress);
        assert_eq!(serde_json::to_string(&ServiceStatus::Ready).unwrap(), r#""ready""#);
    }
}
