use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::Report;
use crate::features::reports::services::ReportStore;

/// Reports submitted by `driver_id`, in store order (newest first)
pub fn driver_history<'a>(
    reports: &'a [Report],
    driver_id: &'a str,
) -> impl Iterator<Item = &'a Report> + 'a {
    reports.iter().filter(move |r| r.driver_id == driver_id)
}

/// Read-only view of a driver's own submissions
pub struct ReportHistoryService {
    store: Arc<ReportStore>,
}

impl ReportHistoryService {
    pub fn new(store: Arc<ReportStore>) -> Self {
        Self { store }
    }

    pub async fn list_for_driver(&self, driver_id: &str) -> Vec<Report> {
        let reports = self.store.load().await;
        driver_history(&reports, driver_id).cloned().collect()
    }

    /// One of the driver's reports. Reports of other drivers are reported
    /// as missing.
    pub async fn get_for_driver(&self, driver_id: &str, id: i64) -> Result<Report> {
        let reports = self.store.load().await;
        let found = driver_history(&reports, driver_id)
            .find(|r| r.id == id)
            .cloned();
        found.ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::ReportType;
    use crate::shared::test_helpers::{sample_report, seeded_store};

    fn mixed_reports() -> Vec<Report> {
        vec![
            sample_report(4, ReportType::Damage, "driver2", 1),
            sample_report(3, ReportType::Vehicle, "driver1", 2),
            sample_report(2, ReportType::Trailer, "driver2", 1),
            sample_report(1, ReportType::Forklift, "driver1", 1),
        ]
    }

    #[test]
    fn test_driver_history_filters_and_keeps_order() {
        let reports = mixed_reports();
        let ids: Vec<i64> = driver_history(&reports, "driver1").map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_driver_history_is_repeatable() {
        let reports = mixed_reports();
        let first: Vec<&Report> = driver_history(&reports, "driver2").collect();
        let second: Vec<&Report> = driver_history(&reports, "driver2").collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_driver_has_empty_history() {
        let reports = mixed_reports();
        assert_eq!(driver_history(&reports, "driver9").count(), 0);
    }

    #[tokio::test]
    async fn test_get_for_driver_hides_other_drivers_reports() {
        let service = ReportHistoryService::new(seeded_store(mixed_reports()).await);

        assert_eq!(service.get_for_driver("driver1", 3).await.unwrap().id, 3);
        assert!(matches!(
            service.get_for_driver("driver1", 4).await,
            Err(AppError::NotFound(_))
        ));
    }
}
