use std::sync::Arc;

use tracing::{info, warn};

use crate::core::error::Result;
use crate::features::preferences::models::Language;
use crate::modules::storage::KeyValueStore;
use crate::shared::constants::UI_LANGUAGE_KEY;

/// Reads and writes the `ui_language` preference
pub struct PreferenceService {
    storage: Arc<dyn KeyValueStore>,
}

impl PreferenceService {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Stored language; `pl` when absent, unreadable or unknown
    pub async fn language(&self) -> Language {
        match self.storage.get(UI_LANGUAGE_KEY).await {
            Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
                warn!("Ignoring stored {}: {}", UI_LANGUAGE_KEY, e);
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                warn!("Failed to read {}: {}", UI_LANGUAGE_KEY, e);
                Language::default()
            }
        }
    }

    pub async fn set_language(&self, language: Language) -> Result<Language> {
        self.storage
            .set(UI_LANGUAGE_KEY, language.as_str().to_string())
            .await?;
        info!("UI language set to {}", language);
        Ok(language)
    }

    /// The explicit override if given, else the stored preference
    pub async fn resolve(&self, requested: Option<Language>) -> Language {
        match requested {
            Some(language) => language,
            None => self.language().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::MemoryStorage;

    #[tokio::test]
    async fn test_language_defaults_to_polish() {
        let service = PreferenceService::new(Arc::new(MemoryStorage::new()));
        assert_eq!(service.language().await, Language::Pl);
    }

    #[tokio::test]
    async fn test_unknown_stored_value_falls_back() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(UI_LANGUAGE_KEY, "klingon".to_string())
            .await
            .unwrap();

        let service = PreferenceService::new(storage);
        assert_eq!(service.language().await, Language::Pl);
    }

    #[tokio::test]
    async fn test_set_and_resolve() {
        let service = PreferenceService::new(Arc::new(MemoryStorage::new()));
        service.set_language(Language::En).await.unwrap();

        assert_eq!(service.resolve(None).await, Language::En);
        assert_eq!(service.resolve(Some(Language::Pl)).await, Language::Pl);
    }
}
