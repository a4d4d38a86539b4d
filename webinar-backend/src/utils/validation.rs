// webinar-backend/src/utils/validation.rs

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// サブドメイン用正規表現 (DNSラベル: 小文字英数字とハイフン、先頭末尾はハイフン不可)
pub static SUBDOMAIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").unwrap());

/// サブドメインバリデーション
pub fn validate_subdomain(subdomain: &str) -> Result<(), ValidationError> {
    if SUBDOMAIN_REGEX.is_match(subdomain) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_subdomain"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subdomain_regex() {
        assert!(SUBDOMAIN_REGEX.is_match("acme"));
        assert!(SUBDOMAIN_REGEX.is_match("acme-inc"));
        assert!(SUBDOMAIN_REGEX.is_match("acme2"));
        assert!(SUBDOMAIN_REGEX.is_match("a1"));
        assert!(!SUBDOMAIN_REGEX.is_match("Acme"));
        assert!(!SUBDOMAIN_REGEX.is_match("-acme"));
        assert!(!SUBDOMAIN_REGEX.is_match("acme-"));
        assert!(!SUBDOMAIN_REGEX.is_match("acme inc"));
        assert!(!SUBDOMAIN_REGEX.is_match("acme.inc"));
        assert!(!SUBDOMAIN_REGEX.is_match("acme_inc"));
    }

    #[test]
    fn test_validate_subdomain() {
        assert!(validate_subdomain("acme").is_ok());
        assert!(validate_subdomain("Acme").is_err());
        assert!(validate_subdomain("").is_err());
    }
}
