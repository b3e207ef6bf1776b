pub mod generic;
pub mod numeric;
pub mod string;

use std::fmt;

pub use generic::{check_email_list_consistency, ensure_no_duplicate_entries};
pub use numeric::{check_sum_of_list_against_threshold, sum_of_numbers_in_string};
pub use string::{
    check_string_palindrome, process_text, validate_identification_number, validate_ip_address,
    validate_password_strength, validate_url_format, DENIED_WORDS, MIN_PASSWORD_LENGTH,
};

/// Identifies which rule rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    PasswordStrength,
    TextContent,
    NumericList,
    UrlFormat,
    EmailList,
    Palindrome,
    IdentificationNumber,
    ThresholdSum,
    IpAddress,
    DuplicateEntries,
}

impl RuleKind {
    pub const ALL: [RuleKind; 10] = [
        RuleKind::PasswordStrength,
        RuleKind::TextContent,
        RuleKind::NumericList,
        RuleKind::UrlFormat,
        RuleKind::EmailList,
        RuleKind::Palindrome,
        RuleKind::IdentificationNumber,
        RuleKind::ThresholdSum,
        RuleKind::IpAddress,
        RuleKind::DuplicateEntries,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::PasswordStrength => "password_strength",
            RuleKind::TextContent => "text_content",
            RuleKind::NumericList => "numeric_list",
            RuleKind::UrlFormat => "url_format",
            RuleKind::EmailList => "email_list",
            RuleKind::Palindrome => "palindrome",
            RuleKind::IdentificationNumber => "identification_number",
            RuleKind::ThresholdSum => "threshold_sum",
            RuleKind::IpAddress => "ip_address",
            RuleKind::DuplicateEntries => "duplicate_entries",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RuleKind::PasswordStrength => {
                "At least 8 characters, one digit and one non-alphanumeric character"
            }
            RuleKind::TextContent => "Rejects text containing 'error', 'fail' or 'wrong'",
            RuleKind::NumericList => "Sums a comma separated list of numbers",
            RuleKind::UrlFormat => "Value must start with 'http'",
            RuleKind::EmailList => "Every element must look like local@domain.tld",
            RuleKind::Palindrome => "Reads the same backwards, ignoring whitespace and case",
            RuleKind::IdentificationNumber => "Two letters followed by six digits",
            RuleKind::ThresholdSum => "Sum of the list must be strictly greater than the threshold",
            RuleKind::IpAddress => "Four dot separated groups of one to three digits",
            RuleKind::DuplicateEntries => "Every element must be unique (case-sensitive)",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders a human readable catalog of every rule.
pub fn rules_documentation() -> String {
    let mut doc = String::from("INPUTGUARD VALIDATION RULES\n");
    for rule in RuleKind::ALL {
        doc.push_str(&format!("\n{}\n  {}\n", rule.name(), rule.description()));
    }
    doc
}
