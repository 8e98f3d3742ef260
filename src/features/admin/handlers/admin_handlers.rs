use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::Result;
use crate::features::admin::dtos::ReportStatsDto;
use crate::features::admin::services::AdminService;
use crate::features::auth::guards::RequireAdmin;
use crate::features::preferences::dtos::LanguageQuery;
use crate::features::reports::dtos::ReportResponseDto;
use crate::shared::types::{ApiResponse, Meta};

/// List all reports from every driver
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    responses(
        (status = 200, description = "All reports, newest first", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_reports(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = service.list_reports().await;
    let total = reports.len() as i64;
    let items: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Get report detail
#[utoipa::path(
    get,
    path = "/api/admin/reports/{id}",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report detail", body = ApiResponse<ReportResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Report not found")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_report(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.get_report(id).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Aggregate statistics
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    params(LanguageQuery),
    responses(
        (status = 200, description = "Report statistics", body = ApiResponse<ReportStatsDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_stats(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<ApiResponse<ReportStatsDto>>> {
    let language = service.language(query.lang).await;
    let stats = service.get_stats().await;
    Ok(Json(ApiResponse::success(
        Some(ReportStatsDto::new(stats, language)),
        None,
        None,
    )))
}

/// Download all reports as CSV
#[utoipa::path(
    get,
    path = "/api/admin/reports/export",
    params(LanguageQuery),
    responses(
        (status = 200, description = "CSV file", content_type = "text/csv", body = String),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "No reports to export")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn export_reports(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
    Query(query): Query<LanguageQuery>,
) -> Result<Response> {
    let export = service.export_csv(query.lang).await?;
    let disposition = format!("attachment; filename=\"{}\"", export.filename);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, export.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.body,
    )
        .into_response())
}
