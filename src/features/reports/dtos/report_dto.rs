use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::preferences::Language;
use crate::features::reports::models::{Photo, Report, ReportType};
use crate::features::reports::services::NewReport;

/// Photo as sent with a new report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotoUploadDto {
    /// Original filename
    pub name: String,
    /// Optional note about the photo
    #[serde(default)]
    pub description: String,
    /// Image encoded as a data URI
    #[schema(example = "data:image/jpeg;base64,/9j/4AAQSkZJRg...")]
    pub preview: String,
}

/// Request DTO for submitting a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReportDto {
    #[serde(rename = "type")]
    pub report_type: ReportType,
    /// Vehicle/trailer/forklift number, or the damage description
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub photos: Vec<PhotoUploadDto>,
}

impl From<CreateReportDto> for NewReport {
    fn from(dto: CreateReportDto) -> Self {
        Self {
            report_type: dto.report_type,
            number: dto.number,
            photos: dto
                .photos
                .into_iter()
                .map(|p| Photo {
                    name: p.name,
                    description: p.description,
                    preview: p.preview,
                })
                .collect(),
        }
    }
}

/// Response DTO for a report photo
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotoResponseDto {
    pub name: String,
    pub description: String,
    pub preview: String,
}

impl From<Photo> for PhotoResponseDto {
    fn from(p: Photo) -> Self {
        Self {
            name: p.name,
            description: p.description,
            preview: p.preview,
        }
    }
}

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub number: String,
    pub photo_count: usize,
    pub photos: Vec<PhotoResponseDto>,
    pub created_at: DateTime<Utc>,
    pub driver_id: String,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            report_type: r.report_type,
            number: r.number,
            photo_count: r.photos.len(),
            photos: r.photos.into_iter().map(PhotoResponseDto::from).collect(),
            created_at: r.created_at,
            driver_id: r.driver_id,
        }
    }
}

/// Presentation data for one report type
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportTypeDto {
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub label: String,
    pub plural_label: String,
    pub number_label: String,
    pub placeholder: String,
    pub icon: String,
    pub badge: String,
}

impl ReportTypeDto {
    pub fn new(report_type: ReportType, language: Language) -> Self {
        let info = report_type.info();
        Self {
            report_type,
            label: info.label.get(language).to_string(),
            plural_label: info.plural_label.get(language).to_string(),
            number_label: info.number_label.get(language).to_string(),
            placeholder: info.placeholder.get(language).to_string(),
            icon: info.icon.to_string(),
            badge: info.badge.to_string(),
        }
    }
}
