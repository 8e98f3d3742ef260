use std::collections::HashSet;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{Photo, Report, ReportType};
use crate::features::reports::services::ReportStore;

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Report number or description is required")]
    EmptyNumber,

    #[error("At least one photo is required")]
    NoPhotos,
}

impl SubmissionError {
    /// Stable reason code reported to clients
    pub fn code(&self) -> &'static str {
        match self {
            SubmissionError::EmptyNumber => "empty_number",
            SubmissionError::NoPhotos => "no_photos",
        }
    }
}

impl From<SubmissionError> for AppError {
    fn from(e: SubmissionError) -> Self {
        AppError::Validation {
            message: e.to_string(),
            codes: vec![e.code().to_string()],
        }
    }
}

/// Report content as entered by the driver
#[derive(Debug, Clone)]
pub struct NewReport {
    pub report_type: ReportType,
    pub number: String,
    pub photos: Vec<Photo>,
}

impl NewReport {
    /// Checks run in order; the first failure wins
    pub fn validate(&self) -> std::result::Result<(), SubmissionError> {
        if self.number.trim().is_empty() {
            return Err(SubmissionError::EmptyNumber);
        }
        if self.photos.is_empty() {
            return Err(SubmissionError::NoPhotos);
        }
        Ok(())
    }
}

/// The single write path into the report collection
pub struct ReportSubmissionService {
    store: Arc<ReportStore>,
    simulated_latency: Duration,
    write_lock: Arc<Mutex<()>>,
    in_flight: StdMutex<HashSet<String>>,
}

/// Busy flag for one driver, cleared on drop
struct InFlight<'a> {
    drivers: &'a StdMutex<HashSet<String>>,
    driver_id: String,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut drivers = self
            .drivers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        drivers.remove(&self.driver_id);
    }
}

impl ReportSubmissionService {
    pub fn new(store: Arc<ReportStore>, simulated_latency: Duration) -> Self {
        Self {
            store,
            simulated_latency,
            write_lock: Arc::new(Mutex::new(())),
            in_flight: StdMutex::new(HashSet::new()),
        }
    }

    /// Validate and persist a new report for `driver_id`.
    ///
    /// The report is either fully stored at the front of the collection or
    /// not stored at all.
    pub async fn submit(&self, input: NewReport, driver_id: &str) -> Result<Report> {
        input.validate().inspect_err(|e| {
            info!(
                "Submission rejected: driver={}, reason={}",
                driver_id,
                e.code()
            );
        })?;

        let _busy = self.mark_in_flight(driver_id)?;

        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }

        // Persisting runs on its own task so a dropped request cannot stop
        // it halfway; the owned guard keeps writes serialized until it ends.
        let write = Arc::clone(&self.write_lock).lock_owned().await;
        let store = Arc::clone(&self.store);
        let driver_id = driver_id.to_string();
        let persist = tokio::spawn(async move {
            let _write = write;
            let created_at = Utc::now();
            let report = Report {
                id: next_report_id(store.max_id().await?, created_at),
                report_type: input.report_type,
                number: input.number,
                photos: input.photos,
                created_at,
                driver_id,
            };

            store.prepend(&report).await.inspect_err(|e| {
                warn!("Failed to persist report {}: {}", report.id, e);
            })?;
            Ok::<_, AppError>(report)
        });

        let report = persist
            .await
            .map_err(|e| AppError::Internal(format!("Submission task failed: {}", e)))??;

        info!(
            "Report submitted: id={}, type={}, driver={}, photos={}",
            report.id,
            report.report_type,
            report.driver_id,
            report.photo_count()
        );

        Ok(report)
    }

    fn mark_in_flight(&self, driver_id: &str) -> Result<InFlight<'_>> {
        let mut drivers = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if !drivers.insert(driver_id.to_string()) {
            return Err(AppError::Conflict(
                "A submission is already in progress".to_string(),
            ));
        }

        Ok(InFlight {
            drivers: &self.in_flight,
            driver_id: driver_id.to_string(),
        })
    }
}

/// Creation timestamp in milliseconds, bumped past every existing id
fn next_report_id(max_id: Option<i64>, created_at: DateTime<Utc>) -> i64 {
    let candidate = created_at.timestamp_millis();
    match max_id {
        Some(max) if max >= candidate => max + 1,
        _ => candidate,
    }
}
