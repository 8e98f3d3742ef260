use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::preferences::Language;

/// Kind of inspection a report covers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Vehicle,
    Trailer,
    Forklift,
    Damage,
}

/// A string in every supported UI language
#[derive(Debug, Clone, Copy)]
pub struct Localized {
    pub pl: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Pl => self.pl,
            Language::En => self.en,
        }
    }
}

/// Presentation data for one report type
#[derive(Debug)]
pub struct ReportTypeInfo {
    /// Icon identifier (lucide icon names)
    pub icon: &'static str,
    /// Badge style variant
    pub badge: &'static str,
    pub label: Localized,
    /// Plural form used in statistics
    pub plural_label: Localized,
    /// Label of the number/description field on the form
    pub number_label: Localized,
    pub placeholder: Localized,
}

const VEHICLE: ReportTypeInfo = ReportTypeInfo {
    icon: "truck",
    badge: "default",
    label: Localized {
        pl: "Pojazd",
        en: "Vehicle",
    },
    plural_label: Localized {
        pl: "Pojazdy",
        en: "Vehicles",
    },
    number_label: Localized {
        pl: "Numer Pojazdu",
        en: "Vehicle Number",
    },
    placeholder: Localized {
        pl: "Wprowadź numer pojazdu",
        en: "Enter vehicle number",
    },
};

const TRAILER: ReportTypeInfo = ReportTypeInfo {
    icon: "package",
    badge: "secondary",
    label: Localized {
        pl: "Naczepa",
        en: "Trailer",
    },
    plural_label: Localized {
        pl: "Naczepy",
        en: "Trailers",
    },
    number_label: Localized {
        pl: "Numer Naczepy",
        en: "Trailer Number",
    },
    placeholder: Localized {
        pl: "Wprowadź numer naczepy",
        en: "Enter trailer number",
    },
};

const FORKLIFT: ReportTypeInfo = ReportTypeInfo {
    icon: "forklift",
    badge: "outline",
    label: Localized {
        pl: "Wózek",
        en: "Forklift",
    },
    plural_label: Localized {
        pl: "Wózki widłowe",
        en: "Forklifts",
    },
    number_label: Localized {
        pl: "Numer Wózka",
        en: "Forklift Number",
    },
    placeholder: Localized {
        pl: "Wprowadź numer wózka widłowego",
        en: "Enter forklift number",
    },
};

const DAMAGE: ReportTypeInfo = ReportTypeInfo {
    icon: "file-text",
    badge: "destructive",
    label: Localized {
        pl: "Szkoda",
        en: "Damage",
    },
    plural_label: Localized {
        pl: "Szkody",
        en: "Damages",
    },
    number_label: Localized {
        pl: "Opis szkody",
        en: "Damage Description",
    },
    placeholder: Localized {
        pl: "Wprowadź opis szkody",
        en: "Enter damage description",
    },
};

impl ReportType {
    /// Every type, in display order
    pub const ALL: [ReportType; 4] = [
        ReportType::Vehicle,
        ReportType::Trailer,
        ReportType::Forklift,
        ReportType::Damage,
    ];

    pub fn info(&self) -> &'static ReportTypeInfo {
        match self {
            ReportType::Vehicle => &VEHICLE,
            ReportType::Trailer => &TRAILER,
            ReportType::Forklift => &FORKLIFT,
            ReportType::Damage => &DAMAGE,
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        self.info().label.get(language)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Vehicle => "vehicle",
            ReportType::Trailer => "trailer",
            ReportType::Forklift => "forklift",
            ReportType::Damage => "damage",
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_per_language() {
        assert_eq!(ReportType::Trailer.label(Language::Pl), "Naczepa");
        assert_eq!(ReportType::Trailer.label(Language::En), "Trailer");
        assert_eq!(ReportType::Damage.info().badge, "destructive");
    }

    #[test]
    fn test_all_is_declaration_order() {
        let mut sorted = ReportType::ALL;
        sorted.sort();
        assert_eq!(sorted, ReportType::ALL);
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for report_type in ReportType::ALL {
            let json = serde_json::to_string(&report_type).unwrap();
            assert_eq!(json, format!("\"{}\"", report_type.as_str()));
        }
    }
}
