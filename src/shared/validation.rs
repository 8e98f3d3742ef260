use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating login ids (driver and admin accounts)
    /// ASCII letters, digits, dot, underscore and hyphen
    /// - Valid: "driver1", "admin", "jan.kowalski", "drv_07-b"
    /// - Invalid: "", "driver 1", "kierowca@firma", "żuk"
    pub static ref ACCOUNT_ID_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_.\-]+$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_regex_valid() {
        assert!(ACCOUNT_ID_REGEX.is_match("driver1"));
        assert!(ACCOUNT_ID_REGEX.is_match("admin"));
        assert!(ACCOUNT_ID_REGEX.is_match("jan.kowalski"));
        assert!(ACCOUNT_ID_REGEX.is_match("drv_07-b"));
    }

    #[test]
    fn test_account_id_regex_invalid() {
        assert!(!ACCOUNT_ID_REGEX.is_match("")); // empty
        assert!(!ACCOUNT_ID_REGEX.is_match("driver 1")); // space
        assert!(!ACCOUNT_ID_REGEX.is_match("kierowca@firma")); // at sign
        assert!(!ACCOUNT_ID_REGEX.is_match("żuk")); // non-ascii
    }
}
