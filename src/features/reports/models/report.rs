use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ReportType;

/// Persisted inspection report
///
/// Field names follow the stored JSON layout (`createdAt`, `driverId`, `type`).
/// Records are written once by the submission path and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    /// Vehicle/trailer/forklift number, or the damage description
    #[serde(default)]
    pub number: String,
    pub photos: Vec<Photo>,
    pub created_at: DateTime<Utc>,
    pub driver_id: String,
}

/// Photo attached to a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Original filename
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Data URI, displayable as-is
    pub preview: String,
}

impl Report {
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }
}
