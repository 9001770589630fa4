//! Port definitions - trait seams to external collaborators

mod backend;

pub use backend::{BackendApi, DashboardData, LoginOutcome};
