//! Records service - thin CRUD orchestration over the backend
//!
//! One façade for the record types the admin pages manage. Nothing is
//! mutated locally: a delete that fails on the backend leaves every list
//! exactly as it was, and the error travels up to the caller.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{Customer, Exchange, Expense, Product, Purchase, Sale, ServiceJob};
use crate::ports::BackendApi;

/// Records service
pub struct RecordsService {
    backend: Arc<dyn BackendApi>,
}

/// Result of a removal, for CLI/JSON output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalResult {
    pub kind: &'static str,
    pub id: String,
}

impl RecordsService {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self { backend }
    }

    // === Sales ===

    pub fn list_sales(&self, token: &str) -> Result<Vec<Sale>> {
        self.backend.list_sales(token)
    }

    pub fn remove_sale(&self, token: &str, id: Uuid) -> Result<RemovalResult> {
        self.backend.delete_sale(token, id)?;
        Ok(RemovalResult { kind: "sale", id: id.to_string() })
    }

    // === Purchases ===

    pub fn list_purchases(&self, token: &str) -> Result<Vec<Purchase>> {
        self.backend.list_purchases(token)
    }

    pub fn remove_purchase(&self, token: &str, id: Uuid) -> Result<RemovalResult> {
        self.backend.delete_purchase(token, id)?;
        Ok(RemovalResult { kind: "purchase", id: id.to_string() })
    }

    // === Exchanges ===

    pub fn list_exchanges(&self, token: &str) -> Result<Vec<Exchange>> {
        self.backend.list_exchanges(token)
    }

    pub fn remove_exchange(&self, token: &str, id: Uuid) -> Result<RemovalResult> {
        self.backend.delete_exchange(token, id)?;
        Ok(RemovalResult { kind: "exchange", id: id.to_string() })
    }

    // === Service jobs ===

    pub fn list_service_jobs(&self, token: &str) -> Result<Vec<ServiceJob>> {
        self.backend.list_service_jobs(token)
    }

    pub fn remove_service_job(&self, token: &str, id: Uuid) -> Result<RemovalResult> {
        self.backend.delete_service_job(token, id)?;
        Ok(RemovalResult { kind: "service", id: id.to_string() })
    }

    // === Customers ===

    pub fn list_customers(&self, token: &str) -> Result<Vec<Customer>> {
        self.backend.list_customers(token)
    }

    /// Validate and create a customer
    pub fn add_customer(&self, token: &str, customer: Customer) -> Result<Customer> {
        customer.validate().map_err(Error::Validation)?;
        self.backend.create_customer(token, &customer)
    }

    pub fn remove_customer(&self, token: &str, id: Uuid) -> Result<RemovalResult> {
        self.backend.delete_customer(token, id)?;
        Ok(RemovalResult { kind: "customer", id: id.to_string() })
    }

    // === Products ===

    pub fn list_products(&self, token: &str) -> Result<Vec<Product>> {
        self.backend.list_products(token)
    }

    pub fn remove_product(&self, token: &str, id: Uuid) -> Result<RemovalResult> {
        self.backend.delete_product(token, id)?;
        Ok(RemovalResult { kind: "product", id: id.to_string() })
    }

    // === Expenses ===

    pub fn list_expenses(&self, token: &str) -> Result<Vec<Expense>> {
        self.backend.list_expenses(token)
    }

    pub fn remove_expense(&self, token: &str, id: Uuid) -> Result<RemovalResult> {
        self.backend.delete_expense(token, id)?;
        Ok(RemovalResult { kind: "expense", id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockBackend, MockConfig, MOCK_TOKEN};

    #[test]
    fn test_remove_sale_roundtrip() {
        let backend = Arc::new(MockBackend::new(MockConfig::default()));
        let service = RecordsService::new(backend);

        let sales = service.list_sales(MOCK_TOKEN).unwrap();
        let removed = service.remove_sale(MOCK_TOKEN, sales[0].id).unwrap();
        assert_eq!(removed.kind, "sale");
        assert_eq!(service.list_sales(MOCK_TOKEN).unwrap().len(), sales.len() - 1);
    }

    #[test]
    fn test_failed_delete_leaves_state_alone() {
        let backend = Arc::new(MockBackend::new(MockConfig::default()));
        let service = RecordsService::new(backend);

        let before = service.list_customers(MOCK_TOKEN).unwrap();
        let err = service.remove_customer(MOCK_TOKEN, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(service.list_customers(MOCK_TOKEN).unwrap().len(), before.len());
    }

    #[test]
    fn test_add_customer_validates_first() {
        let backend = Arc::new(MockBackend::new(MockConfig::default()));
        let service = RecordsService::new(Arc::clone(&backend) as Arc<dyn BackendApi>);

        let mut customer = Customer::new(Uuid::new_v4(), "Barbara Liskov");
        customer.email = Some("not-an-email".to_string());

        let err = service.add_customer(MOCK_TOKEN, customer).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        // Validation failed before any network call
        assert_eq!(backend.mutation_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }
}
