//! Principal identifier validation and masking

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Minimum accepted secret length
pub const MIN_SECRET_LENGTH: usize = 6;

/// Maximum accepted secret length
pub const MAX_SECRET_LENGTH: usize = 32;

/// Check whether an identifier has the shape of an email address
pub fn is_valid_email(identifier: &str) -> bool {
    EMAIL_REGEX.is_match(identifier)
}

/// Mask an identifier for logging
///
/// Keeps the first character of the local part and the full domain:
/// `alice@example.com` becomes `a****@example.com`.
pub fn mask_identifier(identifier: &str) -> String {
    match identifier.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}****@{}", first, domain)
        }
        None if identifier.chars().count() <= 2 => "****".to_string(),
        None => {
            let first: String = identifier.chars().take(2).collect();
            format!("{}****", first)
        }
    }
}
