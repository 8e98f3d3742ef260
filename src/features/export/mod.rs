//! CSV export of report collections

mod csv_exporter;

pub use csv_exporter::{export_reports_csv, CsvExport};
