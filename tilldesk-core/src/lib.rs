//! Tilldesk Core - business logic for the point-of-sale admin client
//!
//! This crate implements the client's core logic following hexagonal
//! architecture:
//!
//! - **domain**: entities plus the two behavioral cores (session gate,
//!   metrics aggregation)
//! - **ports**: trait definitions for external dependencies (the REST
//!   backend)
//! - **services**: business logic orchestration
//! - **adapters**: concrete implementations (HTTP backend, token file,
//!   mock backend)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use adapters::{HttpBackend, TokenFile};
use config::Config;
use ports::BackendApi;
use services::{DashboardService, RecordsService, SessionService};

// Re-export commonly used types at crate root
pub use domain::{
    Customer, Error, Exchange, Expense, GateDecision, MetricPoint, PopularProduct, Product,
    Purchase, Result, Sale, ServiceJob, ServiceStatus, Session, SessionPhase, Trend, UserProfile,
};
pub use services::{DashboardReport, EventLog, LogEntry, LogEvent};

/// Main context for tilldesk operations
///
/// This is the primary entry point for all business logic. It holds the
/// configuration, the backend handle, and all services.
pub struct TilldeskContext {
    pub config: Config,
    pub backend: Arc<dyn BackendApi>,
    pub session_service: SessionService,
    pub records_service: RecordsService,
    pub dashboard_service: DashboardService,
}

impl TilldeskContext {
    /// Create a context against the configured HTTP backend
    pub fn new(app_dir: &Path) -> Result<Self> {
        let config = Config::load(app_dir)?;
        let backend: Arc<dyn BackendApi> =
            Arc::new(HttpBackend::new(&config.base_url, config.timeout_secs)?);
        Self::with_backend(app_dir, config, backend)
    }

    /// Create a context over an explicit backend (tests, demo data)
    pub fn with_backend(
        app_dir: &Path,
        config: Config,
        backend: Arc<dyn BackendApi>,
    ) -> Result<Self> {
        let token_file = TokenFile::new(app_dir);
        let session_service = SessionService::new(Arc::clone(&backend), token_file)?;
        let records_service = RecordsService::new(Arc::clone(&backend));
        let dashboard_service = DashboardService::new(Arc::clone(&backend));

        Ok(Self {
            config,
            backend,
            session_service,
            records_service,
            dashboard_service,
        })
    }
}
