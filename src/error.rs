//! Error types for token parsing and bitstring parsing.
//!
//! Every failure while encoding an index list is reported as a
//! [`ParseError`], which records the offending token text, its position in
//! the input and a [`ParseErrorKind`] describing what went wrong. Encoding is
//! all-or-nothing: when an error is returned, no partial bitstring exists.

use thiserror::Error;

/// The reason a token could not be turned into a [`Token`](crate::Token).
///
/// # Examples
///
/// ```rust
/// use bitlist::{ParseErrorKind, Token};
///
/// let error = "5-3".parse::<Token>().unwrap_err();
/// assert_eq!(error.kind(), ParseErrorKind::ReversedRange { low: 5, high: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    /// The token is empty, e.g. the middle of `"1,,3"`.
    #[error("token is empty")]
    Empty,
    /// A bound is not an unsigned integer.
    #[error("not a valid integer")]
    InvalidNumber,
    /// A bound is zero or negative. Positions start at 1.
    #[error("indices start at 1")]
    NonPositive,
    /// The lower bound of a range is greater than the upper bound.
    #[error("range start {low} is greater than range end {high}")]
    ReversedRange {
        /// The lower bound as written.
        low: usize,
        /// The upper bound as written.
        high: usize,
    },
    /// The token has more than one `-` or a range bound is missing.
    #[error("expected `<n>` or `<low>-<high>`")]
    MalformedRange,
    /// An index exceeds the configured maximum.
    #[error("index {index} exceeds the limit of {limit}")]
    IndexTooLarge {
        /// The offending index.
        index: usize,
        /// The configured maximum index.
        limit: usize,
    },
}

/// A token of the input list could not be parsed.
///
/// # Examples
///
/// ```rust
/// use bitlist::{ParseErrorKind, encode};
///
/// let error = encode("1,abc,3").unwrap_err();
/// assert_eq!(error.token(), "abc");
/// assert_eq!(error.position(), 1);
/// assert_eq!(error.kind(), ParseErrorKind::InvalidNumber);
/// assert_eq!(
///     error.to_string(),
///     "invalid token \"abc\" at position 1: not a valid integer"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid token {token:?} at position {position}: {kind}")]
pub struct ParseError {
    token: String,
    position: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    /// Creates a new error for `token` found at `position` (0-based).
    pub fn new(token: impl Into<String>, position: usize, kind: ParseErrorKind) -> Self {
        Self {
            token: token.into(),
            position,
            kind,
        }
    }

    /// Returns the token text that failed to parse.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the 0-based position of the token in the input list.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the reason for the failure.
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    #[must_use]
    pub(crate) fn at_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }
}

/// A string could not be read back as a [`Bitset`](crate::Bitset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid bit {character:?} at offset {offset}, expected '0' or '1'")]
pub struct BitsetParseError {
    /// The character that is neither `'0'` nor `'1'`.
    pub character: char,
    /// Its 0-based character offset.
    pub offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ParseErrorKind::Empty, "token is empty")]
    #[case(ParseErrorKind::NonPositive, "indices start at 1")]
    #[case(
        ParseErrorKind::ReversedRange { low: 5, high: 3 },
        "range start 5 is greater than range end 3"
    )]
    #[case(
        ParseErrorKind::IndexTooLarge { index: 10, limit: 8 },
        "index 10 exceeds the limit of 8"
    )]
    fn kind_display(#[case] kind: ParseErrorKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[rstest]
    fn at_position_keeps_token_and_kind() {
        let error = ParseError::new("0", 0, ParseErrorKind::NonPositive).at_position(4);
        assert_eq!(error.position(), 4);
        assert_eq!(error.token(), "0");
        assert_eq!(error.kind(), ParseErrorKind::NonPositive);
    }

    #[rstest]
    fn bitset_parse_error_display() {
        let error = BitsetParseError {
            character: 'x',
            offset: 2,
        };
        assert_eq!(
            error.to_string(),
            "invalid bit 'x' at offset 2, expected '0' or '1'"
        );
    }
}
