use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{ADMIN_SESSION_KEY, DRIVER_SESSION_KEY};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Submits reports, sees own history
    Driver,
    /// Sees all reports and statistics
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Driver => "driver",
            Role::Admin => "admin",
        }
    }

    /// Storage key marking who is signed in with this role
    pub fn session_key(&self) -> &'static str {
        match self {
            Role::Driver => DRIVER_SESSION_KEY,
            Role::Admin => ADMIN_SESSION_KEY,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_driver(&self) -> bool {
        self.role == Role::Driver
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Bearer token of the current request
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Server-side session behind a bearer token
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user_id: String,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    pub fn user(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: self.user_id.clone(),
            role: self.role,
        }
    }
}
