//! Input validation predicates for account fields.
//!
//! # Responsibility
//! - Decide email syntax and password strength for registration.
//!
//! # Invariants
//! - Pure predicates; the account service owns which failure they map to.
//! - Strength policy: length >= 8, at least one lowercase, one uppercase,
//!   one digit and one symbol.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

const PASSWORD_MIN_CHARS: usize = 8;

/// Returns whether the value is a syntactically valid email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Returns whether the value satisfies the password strength policy.
pub fn is_strong_password(value: &str) -> bool {
    if value.chars().count() < PASSWORD_MIN_CHARS {
        return false;
    }

    let has_lowercase = value.chars().any(|c| c.is_lowercase());
    let has_uppercase = value.chars().any(|c| c.is_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_symbol = value
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    has_lowercase && has_uppercase && has_digit && has_symbol
}

#[cfg(test)]
mod tests {
    use super::{is_email, is_strong_password};

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_email("a@a.com"));
        assert!(is_email("user.name+tag@example.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_email("bad email"));
        assert!(!is_email("no-at-sign.com"));
        assert!(!is_email("missing@tld"));
        assert!(!is_email("@example.com"));
        assert!(!is_email(""));
    }

    #[test]
    fn strong_password_requires_all_character_classes() {
        assert!(is_strong_password("Password-123"));
        assert!(!is_strong_password("weakpw"));
        assert!(!is_strong_password("alllowercase1!"));
        assert!(!is_strong_password("ALLUPPERCASE1!"));
        assert!(!is_strong_password("NoDigits-Here"));
        assert!(!is_strong_password("NoSymbols123"));
        assert!(!is_strong_password("Sh0rt-!"));
    }
}
