use thiserror::Error;

use crate::rules::RuleKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    /// The value was rejected by one of the rules
    #[error("{rule} rejected input: {violation}")]
    InvalidInput { rule: RuleKind, violation: Violation },
}

impl RuleError {
    pub(crate) fn invalid(rule: RuleKind, violation: Violation) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(rule = %rule, violation = %violation, "input rejected");
        RuleError::InvalidInput { rule, violation }
    }

    /// Returns the rule that rejected the value.
    pub fn rule(&self) -> RuleKind {
        match self {
            RuleError::InvalidInput { rule, .. } => *rule,
        }
    }

    /// Returns why the value was rejected.
    pub fn violation(&self) -> &Violation {
        match self {
            RuleError::InvalidInput { violation, .. } => violation,
        }
    }
}

/// Reason attached to a [`RuleError::InvalidInput`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    #[error("too short: expected at least {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("missing digit")]
    MissingDigit,

    #[error("missing special character")]
    MissingSpecialCharacter,

    #[error("forbidden word: '{0}'")]
    ForbiddenWord(&'static str),

    #[error("empty token at position {position}")]
    EmptyToken { position: usize },

    #[error("alphabetic characters in token: '{0}'")]
    AlphabeticToken(String),

    #[error("not a number: '{0}'")]
    NotANumber(String),

    #[error("missing 'http' prefix")]
    MissingHttpPrefix,

    #[error("malformed email: '{0}'")]
    MalformedEmail(String),

    #[error("not a palindrome")]
    NotAPalindrome,

    #[error("malformed identification number: '{0}'")]
    MalformedIdentifier(String),

    /// Sum and threshold are kept as rendered strings so the error stays
    /// independent of the integer type being summed.
    #[error("sum {sum} is not greater than threshold {threshold}")]
    SumNotAboveThreshold { sum: String, threshold: String },

    #[error("sum overflowed")]
    SumOverflow,

    #[error("malformed ip address: '{0}'")]
    MalformedIpAddress(String),

    #[error("duplicate entry: '{0}'")]
    DuplicateEntry(String),
}
