use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};

use crate::core::config::{AuthConfig, Config, StorageBackend, StorageConfig, SubmissionConfig};
use crate::core::middleware;
use crate::features::admin::{routes as admin_routes, AdminService};
use crate::features::auth::routes as auth_routes;
use crate::features::auth::{AuthService, SessionService};
use crate::features::preferences::{self, PreferenceService};
use crate::features::reports::routes as reports_routes;
use crate::features::reports::{ReportHistoryService, ReportStore, ReportSubmissionService};
use crate::modules::storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};

/// Open the configured key-value backend
pub async fn open_storage(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    let storage: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; reports are lost on restart");
            Arc::new(MemoryStorage::new())
        }
        StorageBackend::File => {
            let storage = FileStorage::open(&config.path).await?;
            tracing::info!("File storage opened at {}", storage.path().display());
            Arc::new(storage)
        }
    };
    Ok(storage)
}

/// Every service the HTTP layer depends on, sharing one storage backend
#[derive(Clone)]
pub struct Services {
    pub sessions: Arc<SessionService>,
    pub auth: Arc<AuthService>,
    pub preferences: Arc<PreferenceService>,
    pub submission: Arc<ReportSubmissionService>,
    pub history: Arc<ReportHistoryService>,
    pub admin: Arc<AdminService>,
}

impl Services {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        submission: &SubmissionConfig,
        auth: &AuthConfig,
    ) -> Self {
        let store = Arc::new(ReportStore::new(Arc::clone(&storage)));
        let preferences = Arc::new(PreferenceService::new(Arc::clone(&storage)));
        let sessions = Arc::new(SessionService::new(Arc::clone(&storage), auth.session_ttl));

        Self {
            auth: Arc::new(AuthService::new(
                Arc::clone(&sessions),
                Arc::clone(&store),
                auth.logout_clears_reports,
            )),
            submission: Arc::new(ReportSubmissionService::new(
                Arc::clone(&store),
                submission.simulated_latency,
            )),
            history: Arc::new(ReportHistoryService::new(Arc::clone(&store))),
            admin: Arc::new(AdminService::new(store, Arc::clone(&preferences))),
            preferences,
            sessions,
        }
    }

    pub async fn from_config(config: &Config) -> Result<Self, StorageError> {
        let storage = open_storage(&config.storage).await?;
        Ok(Self::new(storage, &config.submission, &config.auth))
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// API routes plus health check, without swagger or transport layers
pub fn api_router(services: &Services, max_request_body_size: usize) -> Router {
    // Protected routes (require a session)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes(Arc::clone(&services.auth)))
        .merge(reports_routes::routes(
            Arc::clone(&services.submission),
            Arc::clone(&services.history),
        ))
        .nest(
            "/api/admin",
            admin_routes::routes(Arc::clone(&services.admin)),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&services.sessions),
            middleware::auth_middleware,
        ));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(Arc::clone(&services.auth)))
        .merge(preferences::routes(Arc::clone(&services.preferences)))
        .merge(reports_routes::public_routes(Arc::clone(
            &services.preferences,
        )));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_request_body_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::time::Duration;

    fn test_server(logout_clears_reports: bool) -> TestServer {
        let services = Services::new(
            Arc::new(MemoryStorage::new()),
            &SubmissionConfig {
                simulated_latency: Duration::ZERO,
            },
            &AuthConfig {
                session_ttl: Duration::from_secs(3600),
                logout_clears_reports,
            },
        );
        TestServer::new(api_router(&services, 1024 * 1024)).unwrap()
    }

    async fn login(server: &TestServer, id: &str, password: &str, role: &str) -> String {
        let response = server
            .post("/api/auth/login")
            .json(&json!({ "id": id, "password": password, "role": role }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        body["data"]["access_token"]
            .as_str()
            .unwrap()
            .to_string()
    }

    fn forklift_payload() -> Value {
        json!({
            "type": "forklift",
            "number": "FK-12",
            "photos": [{
                "name": "img1.png",
                "description": "left fork",
                "preview": "data:image/png;base64,iVBORw0KGgo="
            }]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let server = test_server(false);
        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_driver_submits_and_sees_history() {
        let server = test_server(false);
        let token = login(&server, "driver1", "password123", "driver").await;

        let response = server
            .post("/api/reports")
            .authorization_bearer(&token)
            .json(&forklift_payload())
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: Value = response.json();
        assert_eq!(created["data"]["type"], "forklift");
        assert_eq!(created["data"]["driver_id"], "driver1");

        let response = server
            .get("/api/reports")
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["number"], "FK-12");
        assert_eq!(body["data"][0]["photo_count"], 1);
    }

    #[tokio::test]
    async fn test_invalid_submission_reports_reason() {
        let server = test_server(false);
        let token = login(&server, "driver1", "password123", "driver").await;

        let response = server
            .post("/api/reports")
            .authorization_bearer(&token)
            .json(&json!({ "type": "vehicle", "number": "  ", "photos": [] }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["errors"], json!(["empty_number"]));
    }

    #[tokio::test]
    async fn test_wrong_credentials_rejected() {
        let server = test_server(false);

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "id": "driver1", "password": "admin123", "role": "driver" }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        // valid pair, wrong role
        let response = server
            .post("/api/auth/login")
            .json(&json!({ "id": "admin", "password": "admin123", "role": "driver" }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_session_required_and_roles_enforced() {
        let server = test_server(false);

        server
            .get("/api/reports")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
        server
            .get("/api/admin/stats")
            .authorization_bearer("not-a-session")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        let driver = login(&server, "driver1", "password123", "driver").await;
        server
            .get("/api/admin/reports")
            .authorization_bearer(&driver)
            .await
            .assert_status(StatusCode::FORBIDDEN);

        let admin = login(&server, "admin", "admin123", "admin").await;
        server
            .post("/api/reports")
            .authorization_bearer(&admin)
            .json(&forklift_payload())
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_export_and_stats() {
        let server = test_server(false);
        let admin = login(&server, "admin", "admin123", "admin").await;

        server
            .get("/api/admin/reports/export")
            .authorization_bearer(&admin)
            .await
            .assert_status(StatusCode::NOT_FOUND);

        let driver = login(&server, "driver1", "password123", "driver").await;
        server
            .post("/api/reports")
            .authorization_bearer(&driver)
            .json(&forklift_payload())
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .get("/api/admin/reports/export")
            .add_query_param("lang", "en")
            .authorization_bearer(&admin)
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.header(header::CONTENT_TYPE),
            "text/csv;charset=utf-8"
        );
        let disposition = response.header(header::CONTENT_DISPOSITION);
        let disposition = disposition.to_str().unwrap();
        assert!(disposition.starts_with("attachment; filename=\"truck-reports-"));
        assert!(disposition.ends_with(".csv\""));

        let csv = response.text();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains(",Forklift,\"FK-12\",driver1,"));

        let response = server
            .get("/api/admin/stats")
            .authorization_bearer(&admin)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["total_reports"], 1);
        assert_eq!(body["data"]["reports_by_type"][0]["type"], "forklift");
        assert_eq!(body["data"]["reports_by_type"][0]["label"], "Wózki widłowe");
    }

    #[tokio::test]
    async fn test_logout_ends_session() {
        let server = test_server(true);
        let token = login(&server, "driver1", "password123", "driver").await;

        server
            .post("/api/reports")
            .authorization_bearer(&token)
            .json(&forklift_payload())
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post("/api/auth/logout")
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["reports_cleared"], true);

        server
            .get("/api/auth/me")
            .authorization_bearer(&token)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        let token = login(&server, "driver1", "password123", "driver").await;
        let body: Value = server
            .get("/api/reports")
            .authorization_bearer(&token)
            .await
            .json();
        assert_eq!(body["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn test_language_preference_drives_labels() {
        let server = test_server(false);

        let body: Value = server.get("/api/preferences/language").await.json();
        assert_eq!(body["data"]["language"], "pl");

        server
            .put("/api/preferences/language")
            .json(&json!({ "language": "en" }))
            .await
            .assert_status_ok();

        let body: Value = server.get("/api/report-types").await.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 4);
        assert_eq!(body["data"][0]["label"], "Vehicle");

        let body: Value = server
            .get("/api/report-types")
            .add_query_param("lang", "pl")
            .await
            .json();
        assert_eq!(body["data"][0]["label"], "Pojazd");
    }
}
