//! Independent, pure input validation rules.
//!
//! Every rule takes a borrowed value and returns `Ok` or a
//! [`RuleError::InvalidInput`] naming the rule and the reason.
//!
//! ```
//! use inputguard_core::{validate_identification_number, RuleKind};
//!
//! assert!(validate_identification_number("AB123456").unwrap());
//!
//! let err = validate_identification_number("12345678").unwrap_err();
//! assert_eq!(err.rule(), RuleKind::IdentificationNumber);
//! ```

pub mod errors;
pub mod rules;
pub mod utils;

pub use errors::{RuleError, Violation};
pub use rules::{
    check_email_list_consistency, check_string_palindrome, check_sum_of_list_against_threshold,
    ensure_no_duplicate_entries, process_text, rules_documentation, sum_of_numbers_in_string,
    validate_identification_number, validate_ip_address, validate_password_strength,
    validate_url_format, RuleKind,
};
