use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::preferences::dtos::{LanguageDto, UpdateLanguageDto};
use crate::features::preferences::services::PreferenceService;
use crate::shared::types::ApiResponse;

/// Get the UI language
#[utoipa::path(
    get,
    path = "/api/preferences/language",
    responses(
        (status = 200, description = "Current UI language", body = ApiResponse<LanguageDto>)
    ),
    tag = "preferences"
)]
pub async fn get_language(
    State(service): State<Arc<PreferenceService>>,
) -> Result<Json<ApiResponse<LanguageDto>>> {
    let language = service.language().await;
    Ok(Json(ApiResponse::success(
        Some(LanguageDto { language }),
        None,
        None,
    )))
}

/// Change the UI language
#[utoipa::path(
    put,
    path = "/api/preferences/language",
    request_body = UpdateLanguageDto,
    responses(
        (status = 200, description = "Language updated", body = ApiResponse<LanguageDto>),
        (status = 400, description = "Unsupported language")
    ),
    tag = "preferences"
)]
pub async fn update_language(
    State(service): State<Arc<PreferenceService>>,
    AppJson(dto): AppJson<UpdateLanguageDto>,
) -> Result<Json<ApiResponse<LanguageDto>>> {
    let language = service.set_language(dto.language).await?;
    Ok(Json(ApiResponse::success(
        Some(LanguageDto { language }),
        None,
        None,
    )))
}
