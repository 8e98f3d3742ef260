use chrono::{DateTime, NaiveDate, Utc};

use crate::features::preferences::Language;
use crate::features::reports::models::Report;
use crate::shared::constants::{CSV_CONTENT_TYPE, CSV_FILENAME_PREFIX};

/// A ready-to-download CSV file
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

fn headers(language: Language) -> [&'static str; 7] {
    match language {
        Language::Pl => [
            "ID",
            "Typ",
            "Numer/Opis",
            "Kierowca",
            "Data utworzenia",
            "Liczba zdjęć",
            "Opisy zdjęć",
        ],
        Language::En => [
            "ID",
            "Type",
            "Number/Description",
            "Driver",
            "Created Date",
            "Photo Count",
            "Photo Descriptions",
        ],
    }
}

/// Date as the locale writes it (pl-PL / en-US), in UTC
fn format_date(created_at: &DateTime<Utc>, language: Language) -> String {
    match language {
        Language::Pl => created_at.format("%-d.%m.%Y, %H:%M:%S").to_string(),
        Language::En => created_at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
    }
}

/// Wrap in quotes, doubling embedded quotes
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn quote_if_needed(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        quote(field)
    } else {
        field.to_string()
    }
}

fn report_row(report: &Report, language: Language) -> String {
    let descriptions = report
        .photos
        .iter()
        .map(|p| p.description.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    [
        report.id.to_string(),
        report.report_type.label(language).to_string(),
        quote(&report.number),
        quote_if_needed(&report.driver_id),
        quote_if_needed(&format_date(&report.created_at, language)),
        report.photo_count().to_string(),
        quote(&descriptions),
    ]
    .join(",")
}

/// Render `reports` as a CSV table with localized headers and labels.
///
/// Returns `None` for an empty collection; callers report "no data" instead.
pub fn export_reports_csv(
    reports: &[Report],
    language: Language,
    today: NaiveDate,
) -> Option<CsvExport> {
    if reports.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(reports.len() + 1);
    lines.push(headers(language).join(","));
    lines.extend(reports.iter().map(|r| report_row(r, language)));

    Some(CsvExport {
        filename: format!("{}-{}.csv", CSV_FILENAME_PREFIX, today.format("%Y-%m-%d")),
        content_type: CSV_CONTENT_TYPE,
        body: lines.join("\n"),
    })
}
