#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};
#[cfg(test)]
use chrono::{Duration, TimeZone, Utc};

#[cfg(test)]
use crate::features::auth::model::{AuthenticatedUser, Role};
#[cfg(test)]
use crate::features::reports::models::{Photo, Report, ReportType};
#[cfg(test)]
use crate::features::reports::services::ReportStore;
#[cfg(test)]
use crate::modules::storage::MemoryStorage;

#[cfg(test)]
pub fn sample_photo(name: &str) -> Photo {
    Photo {
        name: name.to_string(),
        description: format!("photo {}", name),
        preview: "data:image/png;base64,iVBORw0KGgo=".to_string(),
    }
}

/// Report with `photo_count` photos, created `id` seconds (mod one day) after a fixed instant
#[cfg(test)]
pub fn sample_report(id: i64, report_type: ReportType, driver: &str, photo_count: usize) -> Report {
    let base = Utc
        .with_ymd_and_hms(2025, 10, 1, 8, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    Report {
        id,
        report_type,
        number: format!("NUM-{}", id),
        photos: (0..photo_count)
            .map(|i| sample_photo(&format!("img{}.png", i + 1)))
            .collect(),
        created_at: base + Duration::seconds(id.rem_euclid(86_400)),
        driver_id: driver.to_string(),
    }
}

/// Three vehicle reports by `d1` and one damage report by `d2`, newest first
#[cfg(test)]
pub fn stats_fixture() -> Vec<Report> {
    vec![
        sample_report(4, ReportType::Damage, "d2", 1),
        sample_report(3, ReportType::Vehicle, "d1", 2),
        sample_report(2, ReportType::Vehicle, "d1", 3),
        sample_report(1, ReportType::Vehicle, "d1", 1),
    ]
}

#[cfg(test)]
pub async fn seeded_store(reports: Vec<Report>) -> Arc<ReportStore> {
    let store = Arc::new(ReportStore::new(Arc::new(MemoryStorage::new())));
    store.save(&reports).await.unwrap();
    store
}

/// Split one CSV line, honouring quoted fields and doubled quotes
#[cfg(test)]
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
pub fn create_driver_user(user_id: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: user_id.to_string(),
        role: Role::Driver,
    }
}

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: "admin".to_string(),
        role: Role::Admin,
    }
}

#[cfg(test)]
async fn inject_driver_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_driver_user("driver1"));
    next.run(request).await
}

#[cfg(test)]
async fn inject_admin_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_admin_user());
    next.run(request).await
}

/// Every request runs as `driver1`
#[cfg(test)]
pub fn with_driver_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_driver_middleware))
}

#[cfg(test)]
pub fn with_admin_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_middleware))
}
