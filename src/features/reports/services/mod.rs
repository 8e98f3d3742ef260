mod history_service;
mod report_store;
mod submission_service;

pub use history_service::{driver_history, ReportHistoryService};
pub use report_store::ReportStore;
pub use submission_service::{NewReport, ReportSubmissionService, SubmissionError};
