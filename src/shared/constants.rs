// =============================================================================
// STORAGE KEYS
// =============================================================================

/// JSON array of every submitted report, newest first
pub const REPORTS_KEY: &str = "reports";

/// Id of the driver currently signed in, absent otherwise
pub const DRIVER_SESSION_KEY: &str = "driver_session";

/// Id of the admin currently signed in, absent otherwise
pub const ADMIN_SESSION_KEY: &str = "admin_session";

/// UI language preference (`pl` or `en`)
pub const UI_LANGUAGE_KEY: &str = "ui_language";

// =============================================================================
// DEMO ACCOUNTS
// =============================================================================

/// Fixed credential table: (id, password, role name)
pub const DEMO_ACCOUNTS: &[(&str, &str, &str)] = &[
    ("driver1", "password123", "driver"),
    ("admin", "admin123", "admin"),
];

// =============================================================================
// EXPORT
// =============================================================================

pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8";

pub const CSV_FILENAME_PREFIX: &str = "truck-reports";
