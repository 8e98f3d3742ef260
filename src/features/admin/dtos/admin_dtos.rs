use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::admin::services::ReportStats;
use crate::features::preferences::Language;
use crate::features::reports::models::ReportType;

/// Report count for one type
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TypeCountDto {
    #[serde(rename = "type")]
    pub report_type: ReportType,
    /// Plural label in the requested language
    pub label: String,
    pub count: usize,
}

/// Report count for one driver
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DriverCountDto {
    pub driver_id: String,
    pub count: usize,
}

/// Aggregate statistics over all reports
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportStatsDto {
    pub total_reports: usize,
    pub total_drivers: usize,
    pub total_photos: usize,
    pub average_photos_per_report: f64,
    pub reports_by_type: Vec<TypeCountDto>,
    /// Most active first; ties ordered by driver id
    pub reports_by_driver: Vec<DriverCountDto>,
}

impl ReportStatsDto {
    pub fn new(stats: ReportStats, language: Language) -> Self {
        Self {
            total_reports: stats.total_reports,
            total_drivers: stats.total_drivers,
            total_photos: stats.total_photos,
            average_photos_per_report: stats.average_photos_per_report,
            reports_by_type: stats
                .reports_by_type
                .into_iter()
                .map(|t| TypeCountDto {
                    report_type: t.report_type,
                    label: t.report_type.info().plural_label.get(language).to_string(),
                    count: t.count,
                })
                .collect(),
            reports_by_driver: stats
                .reports_by_driver
                .into_iter()
                .map(|d| DriverCountDto {
                    driver_id: d.driver_id,
                    count: d.count,
                })
                .collect(),
        }
    }
}
