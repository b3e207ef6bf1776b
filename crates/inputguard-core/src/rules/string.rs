use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::{RuleError, Violation},
    rules::RuleKind,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Substrings that make a text invalid. Matching is case-sensitive.
pub const DENIED_WORDS: [&str; 3] = ["error", "fail", "wrong"];

static IDENTIFICATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2}[0-9]{6}$").expect("valid identification pattern"));

// Shape only: octets above 255 are accepted.
static IP_ADDRESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("valid ip address pattern")
});

/// Checks that a password is long enough and contains a digit and a special
/// character. The first unmet condition is reported, in that order.
pub fn validate_password_strength(password: &str) -> Result<bool, RuleError> {
    let rule = RuleKind::PasswordStrength;
    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(RuleError::invalid(
            rule,
            Violation::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: length,
            },
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(RuleError::invalid(rule, Violation::MissingDigit));
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Err(RuleError::invalid(rule, Violation::MissingSpecialCharacter));
    }
    Ok(true)
}

pub fn process_text(text: &str) -> Result<bool, RuleError> {
    match DENIED_WORDS.iter().copied().find(|word| text.contains(*word)) {
        Some(word) => Err(RuleError::invalid(
            RuleKind::TextContent,
            Violation::ForbiddenWord(word),
        )),
        None => Ok(true),
    }
}

/// Only the scheme prefix is checked, `https` is covered by `http`.
pub fn validate_url_format(url: &str) -> Result<bool, RuleError> {
    if url.starts_with("http") {
        Ok(true)
    } else {
        Err(RuleError::invalid(
            RuleKind::UrlFormat,
            Violation::MissingHttpPrefix,
        ))
    }
}

/// Whitespace is stripped and case folded before comparing, punctuation is
/// kept as is.
pub fn check_string_palindrome(input: &str) -> Result<bool, RuleError> {
    let sanitized: Vec<char> = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    if sanitized.iter().eq(sanitized.iter().rev()) {
        Ok(true)
    } else {
        Err(RuleError::invalid(
            RuleKind::Palindrome,
            Violation::NotAPalindrome,
        ))
    }
}

pub fn validate_identification_number(id: &str) -> Result<bool, RuleError> {
    if IDENTIFICATION_PATTERN.is_match(id) {
        Ok(true)
    } else {
        Err(RuleError::invalid(
            RuleKind::IdentificationNumber,
            Violation::MalformedIdentifier(id.to_string()),
        ))
    }
}

pub fn validate_ip_address(ip_address: &str) -> Result<bool, RuleError> {
    if IP_ADDRESS_PATTERN.is_match(ip_address) {
        Ok(true)
    } else {
        Err(RuleError::invalid(
            RuleKind::IpAddress,
            Violation::MalformedIpAddress(ip_address.to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        let err = validate_password_strength("weak").unwrap_err();
        assert_eq!(err.violation(), &Violation::TooShort { min: 8, actual: 4 });
    }

    #[test]
    fn test_password_length_counts_chars() {
        // 7 chars but 8 bytes
        let err = validate_password_strength("pässw1!").unwrap_err();
        assert_eq!(err.violation(), &Violation::TooShort { min: 8, actual: 7 });
    }

    #[test]
    fn test_password_missing_digit() {
        let err = validate_password_strength("noDigit!").unwrap_err();
        assert_eq!(err.violation(), &Violation::MissingDigit);
    }

    #[test]
    fn test_password_missing_special() {
        let err = validate_password_strength("NoSpecialChar1").unwrap_err();
        assert_eq!(err.violation(), &Violation::MissingSpecialCharacter);
    }

    #[test]
    fn test_password_strong() {
        assert!(validate_password_strength("strongPassword1@").unwrap());
    }

    #[test]
    fn test_password_whitespace_counts_as_special() {
        assert!(validate_password_strength("pass word1").is_ok());
    }

    #[test]
    fn test_process_text_reports_first_denied_word() {
        let err = process_text("this is wrong and an error").unwrap_err();
        assert_eq!(err.rule(), RuleKind::TextContent);
        // "error" comes first in the denylist
        assert_eq!(err.violation(), &Violation::ForbiddenWord("error"));
    }

    #[test]
    fn test_process_text_substring() {
        assert!(process_text("wrongway").is_err());
        assert!(process_text("failure").is_err());
    }

    #[test]
    fn test_process_text_case_sensitive() {
        assert!(process_text("Error Fail WRONG").unwrap());
    }

    #[test]
    fn test_url_prefix() {
        assert!(validate_url_format("http://valid.com").unwrap());
        assert!(validate_url_format("httpnothing").unwrap());
        assert!(validate_url_format("HTTP://valid.com").is_err());
        assert!(validate_url_format("").is_err());
    }

    #[test]
    fn test_palindrome_keeps_punctuation() {
        assert!(check_string_palindrome("Was it a car, or a cat I saw").is_err());
        assert!(check_string_palindrome("ab,ba").unwrap());
    }

    #[test]
    fn test_palindrome_empty() {
        assert!(check_string_palindrome("").unwrap());
        assert!(check_string_palindrome(" \t\n").unwrap());
    }

    #[test]
    fn test_identification_lowercase_letters() {
        assert!(validate_identification_number("ab123456").unwrap());
    }

    #[test]
    fn test_identification_rejects_extra_chars() {
        assert!(validate_identification_number("AB1234567").is_err());
        assert!(validate_identification_number("ABC23456").is_err());
        assert!(validate_identification_number("AB123456\n").is_err());
        assert!(validate_identification_number(" AB123456").is_err());
    }

    #[test]
    fn test_ip_address_shape() {
        assert!(validate_ip_address("192.168.0.1").unwrap());
        assert!(validate_ip_address("1.2.3").is_err());
        assert!(validate_ip_address("1.2.3.4.5").is_err());
        assert!(validate_ip_address("1234.1.1.1").is_err());
        assert!(validate_ip_address("1..1.1").is_err());
    }

    #[test]
    fn test_ip_address_range_not_checked() {
        assert!(validate_ip_address("256.256.256.256").unwrap());
        assert!(validate_ip_address("999.999.999.999").unwrap());
    }
}
