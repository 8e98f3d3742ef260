use std::sync::Arc;

use tracing::{info, warn};

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto, LogoutResponseDto};
use crate::features::auth::model::Role;
use crate::features::auth::services::SessionService;
use crate::features::reports::services::ReportStore;
use crate::shared::constants::DEMO_ACCOUNTS;

/// Login/logout against the fixed demo account table
pub struct AuthService {
    sessions: Arc<SessionService>,
    reports: Arc<ReportStore>,
    logout_clears_reports: bool,
}

impl AuthService {
    pub fn new(
        sessions: Arc<SessionService>,
        reports: Arc<ReportStore>,
        logout_clears_reports: bool,
    ) -> Self {
        Self {
            sessions,
            reports,
            logout_clears_reports,
        }
    }

    fn credentials_match(id: &str, password: &str, role: Role) -> bool {
        DEMO_ACCOUNTS.iter().any(|(account_id, account_password, account_role)| {
            *account_id == id && *account_password == password && *account_role == role.as_str()
        })
    }

    pub async fn login(&self, dto: LoginRequestDto) -> Result<LoginResponseDto> {
        if !Self::credentials_match(&dto.id, &dto.password, dto.role) {
            warn!("Login failed: id={}, role={}", dto.id, dto.role);
            return Err(AppError::Auth("Invalid credentials".to_string()));
        }

        let session = self.sessions.create(&dto.id, dto.role).await?;

        Ok(LoginResponseDto {
            access_token: session.token.clone(),
            token_type: "Bearer".to_string(),
            expires_at: session.expires_at,
            user: session.user().into(),
        })
    }

    pub async fn logout(&self, token: &str) -> Result<LogoutResponseDto> {
        let ended = self.sessions.end(token).await?;

        let reports_cleared = ended.is_some() && self.logout_clears_reports;
        if reports_cleared {
            self.reports.clear().await?;
            info!("Report collection cleared on logout");
        }

        Ok(LogoutResponseDto {
            logged_out: ended.is_some(),
            reports_cleared,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::ReportType;
    use crate::modules::storage::MemoryStorage;
    use crate::shared::test_helpers::sample_report;
    use std::time::Duration;

    async fn auth_service(logout_clears_reports: bool) -> (AuthService, Arc<ReportStore>) {
        let storage = Arc::new(MemoryStorage::new());
        let reports = Arc::new(ReportStore::new(storage.clone()));
        reports
            .save(&[sample_report(1, ReportType::Vehicle, "driver1", 1)])
            .await
            .unwrap();
        let sessions = Arc::new(SessionService::new(storage, Duration::from_secs(60)));
        (
            AuthService::new(sessions, Arc::clone(&reports), logout_clears_reports),
            reports,
        )
    }

    fn request(id: &str, password: &str, role: Role) -> LoginRequestDto {
        LoginRequestDto {
            id: id.to_string(),
            password: password.to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_login_demo_accounts() {
        let (service, _) = auth_service(false).await;

        let driver = service
            .login(request("driver1", "password123", Role::Driver))
            .await
            .unwrap();
        assert_eq!(driver.user.role, Role::Driver);
        assert_eq!(driver.token_type, "Bearer");

        let admin = service
            .login(request("admin", "admin123", Role::Admin))
            .await
            .unwrap();
        assert_eq!(admin.user.user_id, "admin");
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password_or_role() {
        let (service, _) = auth_service(false).await;

        for dto in [
            request("driver1", "wrong", Role::Driver),
            request("driver1", "password123", Role::Admin),
            request("admin", "admin123", Role::Driver),
        ] {
            assert!(matches!(service.login(dto).await, Err(AppError::Auth(_))));
        }
    }

    #[tokio::test]
    async fn test_logout_keeps_reports_by_default() {
        let (service, reports) = auth_service(false).await;
        let session = service
            .login(request("driver1", "password123", Role::Driver))
            .await
            .unwrap();

        let result = service.logout(&session.access_token).await.unwrap();

        assert!(result.logged_out);
        assert!(!result.reports_cleared);
        assert_eq!(reports.load().await.len(), 1);
    }

    #[tokio::test]
    async fn test_logout_can_clear_reports() {
        let (service, reports) = auth_service(true).await;
        let session = service
            .login(request("driver1", "password123", Role::Driver))
            .await
            .unwrap();

        let result = service.logout(&session.access_token).await.unwrap();

        assert!(result.reports_cleared);
        assert!(reports.load().await.is_empty());
    }
}
