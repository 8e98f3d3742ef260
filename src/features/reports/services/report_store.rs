use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::error::Result;
use crate::features::reports::models::Report;
use crate::modules::storage::{KeyValueStore, StorageError};
use crate::shared::constants::REPORTS_KEY;

/// Typed access to the report collection
///
/// The collection is always handled whole: load everything, change it in
/// memory, save everything back.
pub struct ReportStore {
    storage: Arc<dyn KeyValueStore>,
}

impl ReportStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Snapshot of all reports, newest first.
    ///
    /// Never fails: a missing, unreadable or malformed payload reads as empty,
    /// and individual records that do not parse are skipped.
    pub async fn load(&self) -> Vec<Report> {
        let raw = match self.storage.get(REPORTS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read report collection: {}", e);
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Ignoring malformed report collection: {}", e);
                return Vec::new();
            }
        };

        let total = records.len();
        let reports: Vec<Report> = records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<Report>(record) {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!("Skipping malformed report record: {}", e);
                    None
                }
            })
            .collect();

        debug!("Loaded {} of {} stored reports", reports.len(), total);
        reports
    }

    /// Stored records as raw JSON, strict: read and parse failures are errors
    async fn load_records(&self) -> Result<Vec<Value>> {
        match self.storage.get(REPORTS_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw).map_err(StorageError::from)?),
            None => Ok(Vec::new()),
        }
    }

    /// Highest id among stored records, including ones that no longer parse
    pub async fn max_id(&self) -> Result<Option<i64>> {
        let records = self.load_records().await?;
        Ok(records
            .iter()
            .filter_map(|record| record.get("id").and_then(Value::as_i64))
            .max())
    }

    /// Put `report` at the front of the collection.
    ///
    /// Every stored record is written back as it was, parseable or not. A
    /// payload that is not a list is never overwritten.
    pub async fn prepend(&self, report: &Report) -> Result<()> {
        let mut records = self.load_records().await?;
        records.insert(0, serde_json::to_value(report).map_err(StorageError::from)?);

        let raw = serde_json::to_string(&records).map_err(StorageError::from)?;
        self.storage.set(REPORTS_KEY, raw).await?;
        debug!("Stored report {}, {} records total", report.id, records.len());
        Ok(())
    }

    pub async fn save(&self, reports: &[Report]) -> Result<()> {
        let raw = serde_json::to_string(reports).map_err(StorageError::from)?;
        self.storage.set(REPORTS_KEY, raw).await?;
        debug!("Saved {} reports", reports.len());
        Ok(())
    }

    /// Drop the whole collection
    pub async fn clear(&self) -> Result<()> {
        self.storage.remove(REPORTS_KEY).await?;
        Ok(())
    }
}
