//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

pub mod audit;
mod dashboard;
mod export;
mod registry;
mod session;

pub use audit::{EventLog, LogEntry, LogEvent};
pub use dashboard::{DashboardReport, DashboardService};
pub use export::{ExportResult, ExportService};
pub use registry::{RecordsService, RemovalResult};
pub use session::SessionService;
