mod report;
mod report_type;

pub use report::{Photo, Report};
pub use report_type::{Localized, ReportType, ReportTypeInfo};
