use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireDriver;
use crate::features::preferences::dtos::LanguageQuery;
use crate::features::preferences::PreferenceService;
use crate::features::reports::dtos::{CreateReportDto, ReportResponseDto, ReportTypeDto};
use crate::features::reports::models::ReportType;
use crate::features::reports::services::{ReportHistoryService, ReportSubmissionService};
use crate::shared::types::{ApiResponse, Meta};

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub submission_service: Arc<ReportSubmissionService>,
    pub history_service: Arc<ReportHistoryService>,
}

/// Submit a new inspection report
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report stored", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Validation error (empty_number, no_photos)"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Driver access required"),
        (status = 409, description = "A submission is already in progress")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn submit_report(
    RequireDriver(user): RequireDriver,
    State(state): State<ReportState>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    let report = state
        .submission_service
        .submit(dto.into(), &user.user_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(report.into()),
            Some("Report submitted".to_string()),
            None,
        )),
    ))
}

/// List the authenticated driver's reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "Driver's reports", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Driver access required")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn list_reports(
    RequireDriver(user): RequireDriver,
    State(state): State<ReportState>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = state
        .history_service
        .list_for_driver(&user.user_id)
        .await;
    let total = reports.len() as i64;
    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get one of the authenticated driver's reports
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn get_report(
    RequireDriver(user): RequireDriver,
    State(state): State<ReportState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = state
        .history_service
        .get_for_driver(&user.user_id, id)
        .await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// List report types with their labels (public)
#[utoipa::path(
    get,
    path = "/api/report-types",
    params(LanguageQuery),
    responses(
        (status = 200, description = "Report type catalogue", body = ApiResponse<Vec<ReportTypeDto>>)
    ),
    tag = "reports"
)]
pub async fn list_report_types(
    State(preferences): State<Arc<PreferenceService>>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<ApiResponse<Vec<ReportTypeDto>>>> {
    let language = preferences.resolve(query.lang).await;
    let types = ReportType::ALL
        .into_iter()
        .map(|t| ReportTypeDto::new(t, language))
        .collect();
    Ok(Json(ApiResponse::success(Some(types), None, None)))
}
