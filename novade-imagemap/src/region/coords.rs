//! Tokenizing of `coords` attribute strings.

use crate::error::DeclarationError;
use std::str::FromStr;

/// Splits a comma-separated coordinate list.
///
/// Trailing empty tokens are dropped, so `"1,2,3,4,"` yields four tokens
/// while an empty token in the middle (`"1,,3"`) is kept and later fails to
/// parse.
pub fn split_tokens(coords: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = coords.split(',').collect();
    while tokens.last().map_or(false, |t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Parses one coordinate token, optionally ignoring surrounding whitespace.
pub fn parse_token<T: FromStr>(token: &str, trim_whitespace: bool) -> Result<T, DeclarationError> {
    let candidate = if trim_whitespace { token.trim() } else { token };
    candidate.parse::<T>().map_err(|_| DeclarationError::InvalidNumber {
        token: token.to_string(),
    })
}

/// Parses exactly `expected` float tokens for `shape`.
pub fn parse_exact_f32(
    shape: &'static str,
    coords: &str,
    expected: usize,
    trim_whitespace: bool,
) -> Result<Vec<f32>, DeclarationError> {
    let tokens = split_tokens(coords);
    if tokens.len() != expected {
        return Err(DeclarationError::CoordinateCount {
            shape,
            expected,
            found: tokens.len(),
        });
    }
    tokens
        .into_iter()
        .map(|t| parse_token::<f32>(t, trim_whitespace))
        .collect()
}
