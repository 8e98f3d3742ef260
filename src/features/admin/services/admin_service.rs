use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::core::error::{AppError, Result};
use crate::features::admin::services::{AdminReportsView, ReportStats};
use crate::features::export::{export_reports_csv, CsvExport};
use crate::features::preferences::{Language, PreferenceService};
use crate::features::reports::models::Report;
use crate::features::reports::services::ReportStore;

/// Service for admin queries over the whole report collection
///
/// Every call works on a fresh snapshot of the store.
pub struct AdminService {
    store: Arc<ReportStore>,
    preferences: Arc<PreferenceService>,
}

impl AdminService {
    pub fn new(store: Arc<ReportStore>, preferences: Arc<PreferenceService>) -> Self {
        Self { store, preferences }
    }

    async fn view(&self) -> AdminReportsView {
        AdminReportsView::new(self.store.load().await)
    }

    /// All reports, newest first
    pub async fn list_reports(&self) -> Vec<Report> {
        self.view().await.into_reports()
    }

    pub async fn get_report(&self, id: i64) -> Result<Report> {
        let mut view = self.view().await;
        view.select(id).cloned()
    }

    pub async fn get_stats(&self) -> ReportStats {
        ReportStats::compute(self.view().await.reports())
    }

    /// Language to present labels in: the override, else the stored preference
    pub async fn language(&self, requested: Option<Language>) -> Language {
        self.preferences.resolve(requested).await
    }

    pub async fn export_csv(&self, requested: Option<Language>) -> Result<CsvExport> {
        let language = self.language(requested).await;
        let view = self.view().await;

        let export = export_reports_csv(view.reports(), language, Utc::now().date_naive())
            .ok_or_else(|| AppError::NoData("No reports to export".to_string()))?;

        info!(
            "Reports exported: rows={}, language={}, file={}",
            view.reports().len(),
            language,
            export.filename
        );
        Ok(export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::MemoryStorage;
    use crate::shared::test_helpers::{seeded_store, stats_fixture};

    async fn admin_service(reports: Vec<Report>) -> AdminService {
        let preferences = Arc::new(PreferenceService::new(Arc::new(MemoryStorage::new())));
        AdminService::new(seeded_store(reports).await, preferences)
    }

    #[tokio::test]
    async fn test_list_is_unfiltered() {
        let service = admin_service(stats_fixture()).await;
        assert_eq!(service.list_reports().await, stats_fixture());
    }

    #[tokio::test]
    async fn test_get_report_detail() {
        let service = admin_service(stats_fixture()).await;

        assert_eq!(service.get_report(4).await.unwrap().driver_id, "d2");
        assert!(matches!(
            service.get_report(42).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_export_empty_store_is_no_data() {
        let service = admin_service(Vec::new()).await;
        assert!(matches!(
            service.export_csv(None).await,
            Err(AppError::NoData(_))
        ));
    }

    #[tokio::test]
    async fn test_export_uses_stored_language() {
        let preferences = Arc::new(PreferenceService::new(Arc::new(MemoryStorage::new())));
        preferences.set_language(Language::En).await.unwrap();
        let service = AdminService::new(seeded_store(stats_fixture()).await, preferences);

        let export = service.export_csv(None).await.unwrap();
        assert!(export.body.starts_with("ID,Type,"));

        let export = service.export_csv(Some(Language::Pl)).await.unwrap();
        assert!(export.body.starts_with("ID,Typ,"));
    }
}
