//! Basic field checks shared by the booking, checkout and account forms.
//! The backend re-validates everything; these only block obviously bad
//! submissions and mark the offending field.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("field pattern is a valid regex"))
}

pub fn is_valid_email(value: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    pattern(&EMAIL, r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_match(value.trim())
}

/// 16 digits, spaces allowed between groups
pub fn is_valid_card_number(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    digits.len() == 16 && digits.chars().all(|c| c.is_ascii_digit())
}

/// `MM/YY`
pub fn is_valid_expiry(value: &str) -> bool {
    static EXPIRY: OnceLock<Regex> = OnceLock::new();
    pattern(&EXPIRY, r"^(0[1-9]|1[0-2])/\d{2}$").is_match(value.trim())
}

pub fn is_valid_cvc(value: &str) -> bool {
    static CVC: OnceLock<Regex> = OnceLock::new();
    pattern(&CVC, r"^\d{3,4}$").is_match(value.trim())
}

pub fn is_valid_postal_code(value: &str) -> bool {
    static POSTAL: OnceLock<Regex> = OnceLock::new();
    pattern(&POSTAL, r"^\d{5,6}$").is_match(value.trim())
}

/// One-time passwords are exactly six digits
pub fn is_valid_otp(value: &str) -> bool {
    value.len() == 6 && value.chars().all(|c| c.is_ascii_digit())
}

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Field name → message, for field-local error display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless `valid`
    pub fn check(&mut self, field: &'static str, valid: bool, message: &str) {
        if valid {
            self.errors.remove(field);
        } else {
            self.errors.insert(field, message.to_string());
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.errors.values().next().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("guest@example.com"));
        assert!(is_valid_email(" guest@example.vn "));
        assert!(!is_valid_email("guest@example"));
        assert!(!is_valid_email("guest example@x.com"));
    }

    #[test]
    fn test_card_fields() {
        assert!(is_valid_card_number("4111 1111 1111 1111"));
        assert!(!is_valid_card_number("4111 1111 1111"));
        assert!(is_valid_expiry("09/27"));
        assert!(!is_valid_expiry("13/27"));
        assert!(is_valid_cvc("123"));
        assert!(is_valid_cvc("1234"));
        assert!(!is_valid_cvc("12a"));
        assert!(is_valid_postal_code("100000"));
        assert!(!is_valid_postal_code("1000"));
    }

    #[test]
    fn test_otp() {
        assert!(is_valid_otp("012345"));
        assert!(!is_valid_otp("12345"));
        assert!(!is_valid_otp("12345a"));
    }

    #[test]
    fn test_field_errors_clear_when_fixed() {
        let mut errors = FieldErrors::new();
        errors.check("email", false, "Invalid email");
        assert_eq!(errors.get("email"), Some("Invalid email"));
        assert_eq!(errors.first(), Some("Invalid email"));

        errors.check("email", true, "Invalid email");
        assert!(errors.is_empty());
    }
}
