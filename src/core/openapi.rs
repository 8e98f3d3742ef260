use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers, model as auth_model};
use crate::features::preferences::{
    dtos as preferences_dtos, handlers as preferences_handlers, models as preferences_models,
};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::login,
        auth_handlers::logout,
        auth_handlers::get_me,
        // Preferences
        preferences_handlers::get_language,
        preferences_handlers::update_language,
        // Reports
        reports_handlers::list_report_types,
        reports_handlers::submit_report,
        reports_handlers::list_reports,
        reports_handlers::get_report,
        // Admin
        admin_handlers::list_reports,
        admin_handlers::get_report,
        admin_handlers::get_stats,
        admin_handlers::export_reports,
    ),
    components(
        schemas(
            Meta,
            // Auth
            auth_model::Role,
            auth_dtos::LoginRequestDto,
            auth_dtos::LoginResponseDto,
            auth_dtos::MeResponseDto,
            auth_dtos::LogoutResponseDto,
            ApiResponse<auth_dtos::LoginResponseDto>,
            ApiResponse<auth_dtos::MeResponseDto>,
            ApiResponse<auth_dtos::LogoutResponseDto>,
            // Preferences
            preferences_models::Language,
            preferences_dtos::LanguageDto,
            preferences_dtos::UpdateLanguageDto,
            ApiResponse<preferences_dtos::LanguageDto>,
            // Reports
            reports_models::ReportType,
            reports_dtos::PhotoUploadDto,
            reports_dtos::CreateReportDto,
            reports_dtos::PhotoResponseDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::ReportTypeDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            ApiResponse<Vec<reports_dtos::ReportTypeDto>>,
            // Admin
            admin_dtos::TypeCountDto,
            admin_dtos::DriverCountDto,
            admin_dtos::ReportStatsDto,
            ApiResponse<admin_dtos::ReportStatsDto>,
        )
    ),
    tags(
        (name = "auth", description = "Demo account sessions"),
        (name = "preferences", description = "UI language preference (public)"),
        (name = "reports", description = "Driver inspection reports"),
        (name = "admin", description = "Admin overview, statistics and CSV export"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Truck Reports API",
        version = "0.1.0",
        description = "Inspection reports submitted by drivers",
    )
)]
pub struct ApiDoc;

/// Adds the bearer session token scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/auth/login",
            "/api/auth/logout",
            "/api/auth/me",
            "/api/preferences/language",
            "/api/report-types",
            "/api/reports",
            "/api/reports/{id}",
            "/api/admin/reports",
            "/api/admin/reports/{id}",
            "/api/admin/reports/export",
            "/api/admin/stats",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {}",
                expected
            );
        }
    }
}
