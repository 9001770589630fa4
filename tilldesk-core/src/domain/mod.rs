//! Core domain entities and pure logic
//!
//! Pure data structures plus the two behavioral cores of the client: the
//! session gate (who may see what) and the metrics aggregation (what the
//! dashboard shows). No I/O here.

mod customer;
pub mod gate;
pub mod metrics;
mod product;
mod records;
pub mod result;
pub mod session;

pub use customer::Customer;
pub use gate::{decide, route_class, GateDecision, RouteClass, HOME_ROUTE, LOGIN_ROUTE};
pub use metrics::{CardSummary, MetricPoint, PopularProduct, Trend};
pub use product::Product;
pub use records::{Exchange, Expense, Purchase, Sale, ServiceJob, ServiceStatus};
pub use result::{Error, Result};
pub use session::{token_expiry, Session, SessionPhase, UserProfile};
