//! Backend port - REST API abstraction
//!
//! The POS backend is an external collaborator. This trait defines every
//! call the client makes against it; adapters provide the actual HTTP (or
//! canned test) behavior. All calls except `login` carry the bearer token
//! of the current session.

use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{
    Customer, Exchange, Expense, MetricPoint, PopularProduct, Product, Purchase, Sale, ServiceJob,
    UserProfile,
};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserProfile,
}

/// Raw dashboard payload: one summary series per record type plus the
/// product ranking and the expense series
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub sale_summary: Vec<MetricPoint>,
    pub purchase_summary: Vec<MetricPoint>,
    pub exchange_summary: Vec<MetricPoint>,
    pub service_summary: Vec<MetricPoint>,
    pub expense_summary: Vec<MetricPoint>,
    pub popular_products: Vec<PopularProduct>,
}

/// REST backend abstraction
pub trait BackendApi: Send + Sync {
    // === Auth ===

    /// Exchange credentials for a token and profile
    fn login(&self, email: &str, password: &str) -> Result<LoginOutcome>;

    /// Fetch the profile behind a token
    fn fetch_profile(&self, token: &str) -> Result<UserProfile>;

    // === Dashboard ===

    /// Fetch the raw summary series for the dashboard
    fn dashboard_summary(&self, token: &str) -> Result<DashboardData>;

    // === Products ===

    fn list_products(&self, token: &str) -> Result<Vec<Product>>;
    fn delete_product(&self, token: &str, id: Uuid) -> Result<()>;

    // === Sales ===

    fn list_sales(&self, token: &str) -> Result<Vec<Sale>>;
    fn delete_sale(&self, token: &str, id: Uuid) -> Result<()>;

    // === Purchases ===

    fn list_purchases(&self, token: &str) -> Result<Vec<Purchase>>;
    fn delete_purchase(&self, token: &str, id: Uuid) -> Result<()>;

    // === Exchanges ===

    fn list_exchanges(&self, token: &str) -> Result<Vec<Exchange>>;
    fn delete_exchange(&self, token: &str, id: Uuid) -> Result<()>;

    // === Service jobs ===

    fn list_service_jobs(&self, token: &str) -> Result<Vec<ServiceJob>>;
    fn delete_service_job(&self, token: &str, id: Uuid) -> Result<()>;

    // === Customers ===

    fn list_customers(&self, token: &str) -> Result<Vec<Customer>>;
    fn create_customer(&self, token: &str, customer: &Customer) -> Result<Customer>;
    fn delete_customer(&self, token: &str, id: Uuid) -> Result<()>;

    // === Expenses ===

    fn list_expenses(&self, token: &str) -> Result<Vec<Expense>>;
    fn delete_expense(&self, token: &str, id: Uuid) -> Result<()>;
}
