//! Caller-side input validation.
//!
//! The store trusts its inputs; these checks run in the UI flow before a
//! value is ever handed to the database, so a validation failure never
//! produces a half-applied write.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}$").expect("valid regex")
    })
}

/// Check the basic shape of an email address.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    if !email_regex().is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Registration password rule: at least 8 alphanumeric characters,
/// containing at least one letter and one digit.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    let alphanumeric = password.chars().all(|c| c.is_ascii_alphanumeric());
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if password.len() < 8 || !alphanumeric || !has_letter || !has_digit {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().is_empty() {
        return Err(ValidationError::EmptyPhone);
    }
    Ok(())
}

pub fn validate_list_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyListTitle);
    }
    Ok(())
}

pub fn validate_item_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyItemName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_email() {
        assert!(validate_email("oscar@example.com").is_ok());
        assert!(validate_email("first.last-1@mail.co.za").is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        assert_eq!(validate_email("not-an-email"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(""), Err(ValidationError::MissingCredentials));
    }

    #[test]
    fn password_needs_letter_digit_and_length() {
        assert!(validate_password("abcd1234").is_ok());
        assert_eq!(validate_password("short1"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password("onlyletters"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password("12345678"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password("abcd 1234"), Err(ValidationError::WeakPassword));
    }

    #[test]
    fn whitespace_only_fields_are_empty() {
        assert_eq!(validate_list_title("   "), Err(ValidationError::EmptyListTitle));
        assert_eq!(validate_item_name("\t"), Err(ValidationError::EmptyItemName));
        assert_eq!(validate_phone(" "), Err(ValidationError::EmptyPhone));
        assert!(validate_item_name("milk").is_ok());
    }
}
