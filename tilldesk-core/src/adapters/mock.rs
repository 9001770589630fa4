//! Mock backend for testing
//!
//! Implements the backend port with canned records and per-method call
//! counters, so tests can assert not just on results but on which network
//! calls were (or were not) issued. Failure modes are switched through
//! `MockConfig`, mirroring how the real backend misbehaves: credential
//! rejection vs. transport failure.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{
    Customer, Exchange, Expense, MetricPoint, PopularProduct, Product, Purchase, Sale, ServiceJob,
    ServiceStatus, UserProfile,
};
use crate::ports::{BackendApi, DashboardData, LoginOutcome};

/// Token issued by the mock on login
pub const MOCK_TOKEN: &str = "mock-token-0001";

/// Failure switches for the mock backend
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Reject every credentialed call with an auth error
    pub fail_auth: bool,
    /// Fail every call with a transport error
    pub fail_transport: bool,
}

/// Canned in-memory backend
pub struct MockBackend {
    config: MockConfig,
    customers: Mutex<Vec<Customer>>,
    sales: Mutex<Vec<Sale>>,
    pub login_calls: AtomicUsize,
    pub profile_calls: AtomicUsize,
    pub dashboard_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub mutation_calls: AtomicUsize,
}

impl MockBackend {
    pub fn new(config: MockConfig) -> Self {
        Self {
            config,
            customers: Mutex::new(demo_customers()),
            sales: Mutex::new(demo_sales()),
            login_calls: AtomicUsize::new(0),
            profile_calls: AtomicUsize::new(0),
            dashboard_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            mutation_calls: AtomicUsize::new(0),
        }
    }

    /// Calls that hit the profile endpoint so far
    pub fn profile_call_count(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    fn gate(&self) -> Result<()> {
        if self.config.fail_transport {
            return Err(Error::Http("unable to reach the backend".to_string()));
        }
        if self.config.fail_auth {
            return Err(Error::auth("the backend rejected the credentials"));
        }
        Ok(())
    }
}

fn demo_profile() -> UserProfile {
    UserProfile {
        id: "u-0001".to_string(),
        name: "Shop Admin".to_string(),
        email: "admin@tilldesk.test".to_string(),
        role: Some("admin".to_string()),
    }
}

fn demo_customers() -> Vec<Customer> {
    let created = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
    vec![
        Customer {
            id: Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap(),
            name: "Grace Hopper".to_string(),
            phone: Some("+1 555 0100".to_string()),
            email: Some("grace@example.com".to_string()),
            address: None,
            created_at: created,
            updated_at: created,
        },
        Customer {
            id: Uuid::parse_str("22222222-2222-2222-2222-222222222222").unwrap(),
            name: "Alan Kay".to_string(),
            phone: None,
            email: None,
            address: Some("12 Main St".to_string()),
            created_at: created,
            updated_at: created,
        },
    ]
}

fn demo_sales() -> Vec<Sale> {
    let created = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    vec![
        Sale {
            id: Uuid::parse_str("aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa").unwrap(),
            product_name: "Pixel 8".to_string(),
            customer_name: Some("Grace Hopper".to_string()),
            quantity: 1,
            total_amount: Some(Decimal::new(69900, 2)),
            paid: Some(Decimal::new(50000, 2)),
            sold_at: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            created_at: created,
        },
        Sale {
            id: Uuid::parse_str("bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb").unwrap(),
            product_name: "USB-C Charger".to_string(),
            customer_name: None,
            quantity: 2,
            total_amount: Some(Decimal::new(3800, 2)),
            paid: Some(Decimal::new(3800, 2)),
            sold_at: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            created_at: created,
        },
    ]
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

fn demo_dashboard() -> DashboardData {
    DashboardData {
        sale_summary: vec![
            MetricPoint::new(day(1), Some(Decimal::new(69900, 2))),
            MetricPoint::new(day(2), Some(Decimal::new(3800, 2))),
            MetricPoint::new(day(3), None),
        ],
        purchase_summary: vec![
            MetricPoint::new(day(1), Some(Decimal::new(120000, 2))),
            MetricPoint::new(day(3), Some(Decimal::new(-1500, 2))),
        ],
        exchange_summary: vec![MetricPoint::new(day(2), Some(Decimal::new(9000, 2)))],
        service_summary: vec![],
        expense_summary: vec![
            MetricPoint::new(day(1), Some(Decimal::new(4500, 2))),
            MetricPoint::new(day(2), None),
        ],
        popular_products: vec![
            PopularProduct { name: "USB-C Charger".to_string(), quantity: 5 },
            PopularProduct { name: "Pixel 8".to_string(), quantity: 20 },
            PopularProduct { name: "Screen Protector".to_string(), quantity: 1 },
        ],
    }
}

impl BackendApi for MockBackend {
    fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        if email.is_empty() || password.is_empty() {
            return Err(Error::auth("email and password are required"));
        }
        Ok(LoginOutcome {
            token: MOCK_TOKEN.to_string(),
            user: demo_profile(),
        })
    }

    fn fetch_profile(&self, _token: &str) -> Result<UserProfile> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Ok(demo_profile())
    }

    fn dashboard_summary(&self, _token: &str) -> Result<DashboardData> {
        self.dashboard_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Ok(demo_dashboard())
    }

    fn list_products(&self, _token: &str) -> Result<Vec<Product>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Ok(vec![])
    }

    fn delete_product(&self, _token: &str, id: Uuid) -> Result<()> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Err(Error::not_found(format!("product {}", id)))
    }

    fn list_sales(&self, _token: &str) -> Result<Vec<Sale>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Ok(self.sales.lock().unwrap().clone())
    }

    fn delete_sale(&self, _token: &str, id: Uuid) -> Result<()> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        let mut sales = self.sales.lock().unwrap();
        let before = sales.len();
        sales.retain(|s| s.id != id);
        if sales.len() == before {
            return Err(Error::not_found(format!("sale {}", id)));
        }
        Ok(())
    }

    fn list_purchases(&self, _token: &str) -> Result<Vec<Purchase>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Ok(vec![Purchase {
            id: Uuid::parse_str("cccccccc-cccc-cccc-cccc-cccccccccccc").unwrap(),
            product_name: "Pixel 8".to_string(),
            supplier: Some("Acme Distribution".to_string()),
            quantity: 10,
            total_amount: Some(Decimal::new(550000, 2)),
            paid: Some(Decimal::new(550000, 2)),
            purchased_at: day(1),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap(),
        }])
    }

    fn delete_purchase(&self, _token: &str, id: Uuid) -> Result<()> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Err(Error::not_found(format!("purchase {}", id)))
    }

    fn list_exchanges(&self, _token: &str) -> Result<Vec<Exchange>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Ok(vec![])
    }

    fn delete_exchange(&self, _token: &str, id: Uuid) -> Result<()> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Err(Error::not_found(format!("exchange {}", id)))
    }

    fn list_service_jobs(&self, _token: &str) -> Result<Vec<ServiceJob>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Ok(vec![ServiceJob {
            id: Uuid::parse_str("dddddddd-dddd-dddd-dddd-dddddddddddd").unwrap(),
            device: "iPhone 12".to_string(),
            issue: Some("cracked screen".to_string()),
            customer_name: Some("Alan Kay".to_string()),
            charge: Some(Decimal::new(12000, 2)),
            status: ServiceStatus::InProgress,
            received_at: day(2),
            delivered_at: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 2, 14, 0, 0).unwrap(),
        }])
    }

    fn delete_service_job(&self, _token: &str, id: Uuid) -> Result<()> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Err(Error::not_found(format!("service job {}", id)))
    }

    fn list_customers(&self, _token: &str) -> Result<Vec<Customer>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Ok(self.customers.lock().unwrap().clone())
    }

    fn create_customer(&self, _token: &str, customer: &Customer) -> Result<Customer> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        let mut customers = self.customers.lock().unwrap();
        customers.push(customer.clone());
        Ok(customer.clone())
    }

    fn delete_customer(&self, _token: &str, id: Uuid) -> Result<()> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        let mut customers = self.customers.lock().unwrap();
        let before = customers.len();
        customers.retain(|c| c.id != id);
        if customers.len() == before {
            return Err(Error::not_found(format!("customer {}", id)));
        }
        Ok(())
    }

    fn list_expenses(&self, _token: &str) -> Result<Vec<Expense>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Ok(vec![Expense {
            id: Uuid::parse_str("eeeeeeee-eeee-eeee-eeee-eeeeeeeeeeee").unwrap(),
            title: "Shop rent".to_string(),
            amount: Some(Decimal::new(45000, 2)),
            note: None,
            spent_at: day(1),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        }])
    }

    fn delete_expense(&self, _token: &str, id: Uuid) -> Result<()> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Err(Error::not_found(format!("expense {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_counts_calls() {
        let mock = MockBackend::new(MockConfig::default());
        mock.login("admin@tilldesk.test", "secret").unwrap();
        assert_eq!(mock.login_calls.load(Ordering::SeqCst), 1);
        assert_eq!(mock.profile_call_count(), 0);
    }

    #[test]
    fn test_fail_auth_rejects() {
        let mock = MockBackend::new(MockConfig { fail_auth: true, ..Default::default() });
        let err = mock.fetch_profile(MOCK_TOKEN).unwrap_err();
        assert!(err.is_auth_rejection());
    }

    #[test]
    fn test_delete_sale_removes_record() {
        let mock = MockBackend::new(MockConfig::default());
        let sales = mock.list_sales(MOCK_TOKEN).unwrap();
        let id = sales[0].id;
        mock.delete_sale(MOCK_TOKEN, id).unwrap();
        assert_eq!(mock.list_sales(MOCK_TOKEN).unwrap().len(), sales.len() - 1);

        let err = mock.delete_sale(MOCK_TOKEN, id).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
