//! Dashboard service - summary cards from raw series
//!
//! Fetches the backend's summary payload and reduces it to the figures
//! the dashboard shows. All arithmetic lives in `domain::metrics`.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::metrics::{self, CardSummary, PopularProduct};
use crate::domain::result::Result;
use crate::ports::BackendApi;

/// How many products the "popular products" panel shows
const TOP_PRODUCTS: usize = 5;

/// Dashboard service
pub struct DashboardService {
    backend: Arc<dyn BackendApi>,
}

impl DashboardService {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self { backend }
    }

    /// Fetch and aggregate the full dashboard report
    pub fn report(&self, token: &str) -> Result<DashboardReport> {
        let data = self.backend.dashboard_summary(token)?;

        let sales = metrics::card_summary(&data.sale_summary);
        let expense_total = metrics::total(&data.expense_summary);
        let expense_share_of_sales = metrics::percent_share(expense_total, sales.total);

        Ok(DashboardReport {
            purchases: metrics::card_summary(&data.purchase_summary),
            exchanges: metrics::card_summary(&data.exchange_summary),
            services: metrics::card_summary(&data.service_summary),
            top_products: metrics::top_by_quantity(&data.popular_products, TOP_PRODUCTS),
            sales,
            expense_total,
            expense_share_of_sales,
        })
    }
}

/// Aggregated dashboard figures
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub sales: CardSummary,
    pub purchases: CardSummary,
    pub exchanges: CardSummary,
    pub services: CardSummary,
    pub expense_total: Decimal,
    /// Expenses as a percentage of sales revenue; zero when there is no
    /// revenue to divide by
    pub expense_share_of_sales: Decimal,
    pub top_products: Vec<PopularProduct>,
}
