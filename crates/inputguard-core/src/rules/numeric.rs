use num_traits::PrimInt;
use std::fmt::Display;

use crate::{
    errors::{RuleError, Violation},
    rules::RuleKind,
};

/// Parses a comma separated list of numbers and returns their sum.
///
/// Tokens are checked untrimmed: an empty token or one holding an ASCII letter
/// is rejected. Surviving tokens are trimmed and parsed as `f64`.
pub fn sum_of_numbers_in_string(numbers: &str) -> Result<f64, RuleError> {
    let rule = RuleKind::NumericList;
    let mut sum = 0.0;
    for (position, token) in numbers.split(',').enumerate() {
        if token.is_empty() {
            return Err(RuleError::invalid(rule, Violation::EmptyToken { position }));
        }
        if token.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(RuleError::invalid(
                rule,
                Violation::AlphabeticToken(token.to_string()),
            ));
        }
        let value = token
            .trim()
            .parse::<f64>()
            .map_err(|_| RuleError::invalid(rule, Violation::NotANumber(token.to_string())))?;
        sum += value;
    }
    Ok(sum)
}

/// Succeeds when the sum of `numbers` is strictly greater than `threshold`.
pub fn check_sum_of_list_against_threshold<N>(
    numbers: &[N],
    threshold: N,
) -> Result<bool, RuleError>
where
    N: PrimInt + Display,
{
    let rule = RuleKind::ThresholdSum;
    let sum = numbers
        .iter()
        .try_fold(N::zero(), |acc, n| acc.checked_add(n))
        .ok_or_else(|| RuleError::invalid(rule, Violation::SumOverflow))?;
    if sum > threshold {
        Ok(true)
    } else {
        Err(RuleError::invalid(
            rule,
            Violation::SumNotAboveThreshold {
                sum: sum.to_string(),
                threshold: threshold.to_string(),
            },
        ))
    }
}
