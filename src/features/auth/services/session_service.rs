use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthSession, AuthenticatedUser, Role};
use crate::modules::storage::KeyValueStore;

/// Bearer-token sessions
///
/// Sessions live in memory; the `driver_session` / `admin_session` storage
/// keys mirror who is currently signed in with each role.
pub struct SessionService {
    storage: Arc<dyn KeyValueStore>,
    sessions: RwLock<HashMap<String, AuthSession>>,
    ttl: Duration,
}

impl SessionService {
    pub fn new(storage: Arc<dyn KeyValueStore>, ttl: Duration) -> Self {
        Self {
            storage,
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn create(&self, user_id: &str, role: Role) -> Result<AuthSession> {
        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|e| AppError::Internal(format!("Invalid session TTL: {}", e)))?;

        let session = AuthSession {
            token: Uuid::new_v4().simple().to_string(),
            user_id: user_id.to_string(),
            role,
            expires_at: Utc::now() + ttl,
        };

        self.storage
            .set(role.session_key(), user_id.to_string())
            .await?;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        if sessions.len() < before {
            debug!("Purged {} expired sessions", before - sessions.len());
        }
        sessions.insert(session.token.clone(), session.clone());
        drop(sessions);

        info!("Session started: user={}, role={}", user_id, role);
        Ok(session)
    }

    /// User behind `token`; expired sessions are dropped
    pub async fn resolve(&self, token: &str) -> Result<AuthenticatedUser> {
        let session = self
            .sessions
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Invalid session".to_string()))?;

        if session.is_expired() {
            debug!("Session expired: user={}", session.user_id);
            self.sessions.write().await.remove(token);
            return Err(AppError::Unauthorized("Session expired".to_string()));
        }

        Ok(session.user())
    }

    /// End the session behind `token`, returning it if it existed
    pub async fn end(&self, token: &str) -> Result<Option<AuthSession>> {
        let Some(session) = self.sessions.write().await.remove(token) else {
            return Ok(None);
        };

        let key = session.role.session_key();
        if self.storage.get(key).await?.as_deref() == Some(session.user_id.as_str()) {
            self.storage.remove(key).await?;
        }

        info!(
            "Session ended: user={}, role={}",
            session.user_id, session.role
        );
        Ok(Some(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::MemoryStorage;
    use crate::shared::constants::DRIVER_SESSION_KEY;

    fn sessions(ttl: Duration) -> (SessionService, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (SessionService::new(storage.clone(), ttl), storage)
    }

    #[tokio::test]
    async fn test_create_resolve_end() {
        let (service, storage) = sessions(Duration::from_secs(60));

        let session = service.create("driver1", Role::Driver).await.unwrap();
        assert_eq!(
            storage.get(DRIVER_SESSION_KEY).await.unwrap(),
            Some("driver1".to_string())
        );

        let user = service.resolve(&session.token).await.unwrap();
        assert_eq!(user.user_id, "driver1");
        assert!(user.is_driver());

        assert!(service.end(&session.token).await.unwrap().is_some());
        assert_eq!(storage.get(DRIVER_SESSION_KEY).await.unwrap(), None);
        assert!(matches!(
            service.resolve(&session.token).await,
            Err(AppError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_expired_session_rejected() {
        let (service, _) = sessions(Duration::ZERO);
        let session = service.create("admin", Role::Admin).await.unwrap();

        assert!(matches!(
            service.resolve(&session.token).await,
            Err(AppError::Unauthorized(msg)) if msg == "Session expired"
        ));
    }

    #[tokio::test]
    async fn test_end_unknown_token() {
        let (service, _) = sessions(Duration::from_secs(60));
        assert!(service.end("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_purges_expired_sessions() {
        let (service, _) = sessions(Duration::ZERO);
        service.create("driver1", Role::Driver).await.unwrap();
        service.create("driver1", Role::Driver).await.unwrap();
        let latest = service.create("admin", Role::Admin).await.unwrap();

        let sessions = service.sessions.read().await;
        assert_eq!(sessions.len(), 1);
        assert!(sessions.contains_key(&latest.token));
    }
}
