use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::{
    errors::{RuleError, Violation},
    rules::RuleKind,
    utils::hasher::Xxh3Builder,
};

// local@domain.tld, no whitespace anywhere.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Checks every element has a basic email shape, failing on the first one
/// that does not. An empty list is consistent.
pub fn check_email_list_consistency<S: AsRef<str>>(emails: &[S]) -> Result<bool, RuleError> {
    match emails
        .iter()
        .map(|entry| entry.as_ref())
        .find(|email| !EMAIL_PATTERN.is_match(email))
    {
        Some(email) => Err(RuleError::invalid(
            RuleKind::EmailList,
            Violation::MalformedEmail(email.to_string()),
        )),
        None => Ok(true),
    }
}

/// Fails on the first entry already seen earlier in `entries`. Comparison is
/// exact: no trimming, case-sensitive.
pub fn ensure_no_duplicate_entries<S: AsRef<str>>(entries: &[S]) -> Result<bool, RuleError> {
    let mut seen = HashSet::with_capacity_and_hasher(entries.len(), Xxh3Builder);
    for entry in entries.iter().map(|entry| entry.as_ref()) {
        if !seen.insert(entry) {
            return Err(RuleError::invalid(
                RuleKind::DuplicateEntries,
                Violation::DuplicateEntry(entry.to_string()),
            ));
        }
    }
    Ok(true)
}
