use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::preferences::models::Language;

/// Current UI language
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LanguageDto {
    pub language: Language,
}

/// Request DTO for changing the UI language
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateLanguageDto {
    pub language: Language,
}

/// Optional language override; falls back to the stored preference
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct LanguageQuery {
    /// `pl` or `en`
    pub lang: Option<Language>,
}
