//! Role-based authorization guards.
//!
//! These guards extract the authenticated user and verify the session role.
//! Roles do not nest: an admin cannot submit reports and a driver cannot
//! see other drivers' data.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

fn current_user(parts: &Parts) -> Result<&AuthenticatedUser, AppError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
}

/// Guard for driver-only operations.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireDriver(user): RequireDriver) { ... }
/// ```
pub struct RequireDriver(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireDriver
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = current_user(parts)?;

        if !user.is_driver() {
            return Err(AppError::Forbidden("Driver access required".to_string()));
        }

        Ok(RequireDriver(user.clone()))
    }
}

/// Guard for admin-only operations.
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = current_user(parts)?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}
