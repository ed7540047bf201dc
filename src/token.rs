//! Tokens of an index list: a single position or an inclusive range.
//!
//! Positions are 1-indexed. A token is written either as `"<n>"` or as
//! `"<low>-<high>"` with `low <= high`.
//!
//! # Examples
//!
//! ```rust
//! use bitlist::Token;
//!
//! let single: Token = "7".parse().unwrap();
//! assert_eq!(single.max_index().get(), 7);
//!
//! let range: Token = "14-17".parse().unwrap();
//! assert_eq!(range.indices().collect::<Vec<_>>(), vec![14, 15, 16, 17]);
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind};

/// One comma-separated unit of an index list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A single 1-indexed position.
    Single(NonZeroUsize),
    /// A closed range of 1-indexed positions, `low <= high`.
    Range {
        /// First covered position.
        low: NonZeroUsize,
        /// Last covered position.
        high: NonZeroUsize,
    },
}

impl Token {
    /// Parses the text of a single token without any trimming.
    ///
    /// The returned error carries only the reason; callers that know where
    /// the token came from wrap it in a [`ParseError`].
    ///
    /// # Errors
    ///
    /// Returns the [`ParseErrorKind`] describing why `text` is not a token.
    pub fn parse_kind(text: &str) -> Result<Self, ParseErrorKind> {
        if text.is_empty() {
            return Err(ParseErrorKind::Empty);
        }
        if is_negative_integer(text) {
            return Err(ParseErrorKind::NonPositive);
        }

        let mut parts = text.split('-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(single), None, _) => parse_index(single).map(Self::Single),
            (Some(low), Some(high), None) => {
                if low.is_empty() || high.is_empty() {
                    return Err(ParseErrorKind::MalformedRange);
                }
                let low = parse_index(low)?;
                let high = parse_index(high)?;
                if low > high {
                    return Err(ParseErrorKind::ReversedRange {
                        low: low.get(),
                        high: high.get(),
                    });
                }
                Ok(Self::Range { low, high })
            }
            _ => Err(ParseErrorKind::MalformedRange),
        }
    }

    /// Returns the smallest position covered by this token.
    pub const fn min_index(&self) -> NonZeroUsize {
        match *self {
            Self::Single(index) => index,
            Self::Range { low, .. } => low,
        }
    }

    /// Returns the largest position covered by this token.
    ///
    /// This is the length a bitset must have to hold the token.
    pub const fn max_index(&self) -> NonZeroUsize {
        match *self {
            Self::Single(index) => index,
            Self::Range { high, .. } => high,
        }
    }

    /// Returns the number of positions covered.
    pub const fn len(&self) -> usize {
        self.max_index().get() - self.min_index().get() + 1
    }

    /// A token always covers at least one position.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns whether `index` (1-indexed) is covered by this token.
    pub const fn contains(&self, index: usize) -> bool {
        self.min_index().get() <= index && index <= self.max_index().get()
    }

    /// Iterates over the covered 1-indexed positions in ascending order.
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.min_index().get()..=self.max_index().get()
    }
}

fn parse_index(text: &str) -> Result<NonZeroUsize, ParseErrorKind> {
    let value = text
        .parse::<usize>()
        .map_err(|_| ParseErrorKind::InvalidNumber)?;
    NonZeroUsize::new(value).ok_or(ParseErrorKind::NonPositive)
}

fn is_negative_integer(text: &str) -> bool {
    text.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()))
}

impl FromStr for Token {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_kind(text).map_err(|kind| ParseError::new(text, 0, kind))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(index) => write!(formatter, "{index}"),
            Self::Range { low, high } => write!(formatter, "{low}-{high}"),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize<'de>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn position(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    #[rstest]
    #[case("3", Token::Single(position(3)))]
    #[case("1-3", Token::Range { low: position(1), high: position(3) })]
    #[case("9-9", Token::Range { low: position(9), high: position(9) })]
    #[case("+4", Token::Single(position(4)))]
    fn parses_valid_tokens(#[case] text: &str, #[case] expected: Token) {
        assert_eq!(text.parse::<Token>().unwrap(), expected);
    }

    #[rstest]
    #[case("", ParseErrorKind::Empty)]
    #[case("abc", ParseErrorKind::InvalidNumber)]
    #[case("1.5", ParseErrorKind::InvalidNumber)]
    #[case("0", ParseErrorKind::NonPositive)]
    #[case("-3", ParseErrorKind::NonPositive)]
    #[case("0-4", ParseErrorKind::NonPositive)]
    #[case("5-3", ParseErrorKind::ReversedRange { low: 5, high: 3 })]
    #[case("1-", ParseErrorKind::MalformedRange)]
    #[case("-", ParseErrorKind::MalformedRange)]
    #[case("1-2-3", ParseErrorKind::MalformedRange)]
    #[case("1--3", ParseErrorKind::MalformedRange)]
    #[case("2-x", ParseErrorKind::InvalidNumber)]
    #[case(" 5", ParseErrorKind::InvalidNumber)]
    fn rejects_invalid_tokens(#[case] text: &str, #[case] expected: ParseErrorKind) {
        assert_eq!(Token::parse_kind(text), Err(expected));
    }

    #[rstest]
    fn from_str_reports_the_token_text() {
        let error = "x-1".parse::<Token>().unwrap_err();
        assert_eq!(error.token(), "x-1");
        assert_eq!(error.position(), 0);
    }

    #[rstest]
    fn range_bounds_and_length() {
        let token: Token = "14-17".parse().unwrap();
        assert_eq!(token.min_index().get(), 14);
        assert_eq!(token.max_index().get(), 17);
        assert_eq!(token.len(), 4);
        assert!(!token.is_empty());
        assert!(token.contains(15));
        assert!(!token.contains(13));
        assert!(!token.contains(18));
    }

    #[rstest]
    #[case("5")]
    #[case("22-24")]
    fn display_is_canonical(#[case] text: &str) {
        assert_eq!(text.parse::<Token>().unwrap().to_string(), text);
    }
}
