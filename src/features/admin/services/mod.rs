mod admin_service;
mod reports_view;
mod stats;

pub use admin_service::AdminService;
pub use reports_view::AdminReportsView;
pub use stats::{DriverCount, ReportStats, TypeCount};
