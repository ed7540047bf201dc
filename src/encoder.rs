//! Folding index lists into bitstrings.
//!
//! An index list is a separator-delimited string of 1-indexed positions and
//! inclusive ranges such as `"22-24,9,11"`. [`RangeBitsetEncoder`] folds the
//! tokens left to right into a [`Bitset`] whose length is the largest
//! position referenced, then renders it as `'0'`/`'1'` characters.
//!
//! Each fold step pads the current bitset with zeros up to the token's
//! largest position and ORs the token's positions in. Because OR is
//! associative, commutative and idempotent, the result does not depend on
//! token order, duplicates or overlaps.
//!
//! # Examples
//!
//! ```rust
//! use bitlist::encode;
//!
//! assert_eq!(encode("3").unwrap(), "001");
//! assert_eq!(encode("1,3,5").unwrap(), "10101");
//! assert_eq!(encode("1-3").unwrap(), "111");
//! assert_eq!(encode("7,1-3,5").unwrap(), "1110101");
//! assert!(encode("5-3").is_err());
//! ```

use std::num::NonZeroUsize;

use crate::bitset::Bitset;
use crate::error::{ParseError, ParseErrorKind};
use crate::token::Token;

/// Default upper bound on any position, 2^20.
pub const DEFAULT_MAX_INDEX: NonZeroUsize = match NonZeroUsize::new(1 << 20) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// Options controlling how an index list is split and parsed.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use bitlist::{EncoderConfig, RangeBitsetEncoder};
///
/// let config = EncoderConfig::default()
///     .with_separator(';')
///     .with_max_index(NonZeroUsize::new(8).unwrap());
/// let encoder = RangeBitsetEncoder::with_config(config);
///
/// assert_eq!(encoder.encode("2;4-5").unwrap(), "01011");
/// assert!(encoder.encode("9").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderConfig {
    /// Strip surrounding whitespace from each token before parsing.
    pub trim_whitespace: bool,
    /// Largest position accepted. Checked before any allocation.
    pub max_index: NonZeroUsize,
    /// Character separating tokens.
    pub separator: char,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            max_index: DEFAULT_MAX_INDEX,
            separator: ',',
        }
    }
}

impl EncoderConfig {
    /// Sets whether whitespace around tokens is ignored.
    #[must_use]
    pub const fn with_trim_whitespace(mut self, trim_whitespace: bool) -> Self {
        self.trim_whitespace = trim_whitespace;
        self
    }

    /// Sets the largest accepted position.
    #[must_use]
    pub const fn with_max_index(mut self, max_index: NonZeroUsize) -> Self {
        self.max_index = max_index;
        self
    }

    /// Sets the token separator.
    #[must_use]
    pub const fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

/// Encodes index lists into bitstrings.
///
/// The encoder is a stateless bundle of configuration; every encoding call
/// starts from its own empty [`Bitset`] and threads it through
/// [`fold`](Self::fold) by value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeBitsetEncoder {
    config: EncoderConfig,
}

impl RangeBitsetEncoder {
    /// Creates an encoder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder with the given configuration.
    pub const fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Parses one raw token according to the configuration.
    ///
    /// `position` is the 0-based index of the token in its list and is
    /// only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the token is malformed, non-positive,
    /// reversed, or references a position above `max_index`.
    pub fn parse_token(&self, raw: &str, position: usize) -> Result<Token, ParseError> {
        let text = if self.config.trim_whitespace {
            raw.trim()
        } else {
            raw
        };
        let token =
            Token::parse_kind(text).map_err(|kind| ParseError::new(raw, position, kind))?;
        self.check_limit(&token)
            .map_err(|kind| ParseError::new(raw, position, kind))?;
        Ok(token)
    }

    fn check_limit(&self, token: &Token) -> Result<(), ParseErrorKind> {
        let limit = self.config.max_index;
        if token.max_index() > limit {
            return Err(ParseErrorKind::IndexTooLarge {
                index: token.max_index().get(),
                limit: limit.get(),
            });
        }
        Ok(())
    }

    /// Folds an already parsed token into `state`.
    ///
    /// The result has length `max(state.len(), token.max_index())`; bits
    /// already set stay set and the token's positions are set.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::IndexTooLarge`] if the token reaches past
    /// `max_index`. Tokens built with [`Token::from_str`](std::str::FromStr)
    /// are not limited, so the check is repeated here before growing.
    pub fn apply(&self, state: Bitset, token: &Token) -> Result<Bitset, ParseError> {
        self.check_limit(token)
            .map_err(|kind| ParseError::new(token.to_string(), 0, kind))?;
        Ok(Self::set_token(state, token))
    }

    /// Grows `state` and sets the token's positions. `token` must already
    /// be within `max_index`.
    fn set_token(mut state: Bitset, token: &Token) -> Bitset {
        state.grow_to(token.max_index().get());
        state.set_range(token.min_index().get() - 1..=token.max_index().get() - 1);
        state
    }

    /// Parses `token` and folds it into `state`.
    ///
    /// Errors report position 0; [`encode`](Self::encode) reports the real
    /// position of the failing token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the token cannot be parsed. `state` is
    /// dropped in that case.
    pub fn fold(&self, state: Bitset, token: &str) -> Result<Bitset, ParseError> {
        let parsed = self.parse_token(token, 0)?;
        tracing::trace!(token = %parsed, length = state.len(), "folding token");
        Ok(Self::set_token(state, &parsed))
    }

    /// Renders the final bitstring, position 1 first.
    pub fn finish(&self, state: &Bitset) -> String {
        state.to_string()
    }

    /// Merges two partial results: pads the shorter with zeros, then ORs.
    #[must_use]
    pub fn merge(left: Bitset, right: Bitset) -> Bitset {
        left.union(right)
    }

    /// Folds a sequence of raw tokens, left to right, from an empty bitset.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of the first invalid token.
    pub fn encode_tokens<'a, I>(&self, tokens: I) -> Result<Bitset, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .enumerate()
            .try_fold(Bitset::new(), |state, (position, raw)| {
                self.fold(state, raw)
                    .map_err(|error| error.at_position(position))
            })
    }

    /// Splits `input` on the separator and folds it into a [`Bitset`].
    ///
    /// Empty or whitespace-only input yields the empty bitset.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of the first invalid token.
    pub fn encode_bitset(&self, input: &str) -> Result<Bitset, ParseError> {
        if self.is_blank(input) {
            return Ok(Bitset::new());
        }
        let bitset = self.encode_tokens(input.split(self.config.separator))?;
        tracing::debug!(
            length = bitset.len(),
            ones = bitset.count_ones(),
            "encoded index list"
        );
        Ok(bitset)
    }

    /// Encodes `input` into a bitstring.
    ///
    /// Positions above the configured `max_index` are rejected even though
    /// they are valid positive integers.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of the first invalid token; no partial
    /// output is produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitlist::RangeBitsetEncoder;
    ///
    /// let encoder = RangeBitsetEncoder::new();
    /// assert_eq!(
    ///     encoder.encode("22-24,9,42-44,11,4,46,14-17,5,2,38-40,33,50,48").unwrap(),
    ///     "01011000101001111000011100000000100001110111010101"
    /// );
    /// ```
    pub fn encode(&self, input: &str) -> Result<String, ParseError> {
        self.encode_bitset(input)
            .map(|bitset| self.finish(&bitset))
    }

    fn is_blank(&self, input: &str) -> bool {
        if self.config.trim_whitespace {
            input.trim().is_empty()
        } else {
            input.is_empty()
        }
    }
}

// =============================================================================
// Parallel Encoding
// =============================================================================

#[cfg(feature = "rayon")]
impl RangeBitsetEncoder {
    /// Encodes `input` using rayon, merging partial bitsets with
    /// [`merge`](Self::merge).
    ///
    /// The output is identical to [`encode_bitset`](Self::encode_bitset),
    /// including which error is reported: tokens are parsed in parallel but
    /// the first failure in input order wins.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of the first invalid token.
    pub fn par_encode_bitset(&self, input: &str) -> Result<Bitset, ParseError> {
        use rayon::prelude::*;

        if self.is_blank(input) {
            return Ok(Bitset::new());
        }

        let raw_tokens: Vec<&str> = input.split(self.config.separator).collect();
        let parsed: Vec<Result<Token, ParseError>> = raw_tokens
            .par_iter()
            .enumerate()
            .map(|(position, raw)| self.parse_token(raw, position))
            .collect();
        let tokens = parsed.into_iter().collect::<Result<Vec<_>, _>>()?;

        let bitset = tokens
            .par_iter()
            .fold(Bitset::new, Self::set_token)
            .reduce(Bitset::new, Self::merge);
        tracing::debug!(
            tokens = tokens.len(),
            length = bitset.len(),
            "encoded index list in parallel"
        );
        Ok(bitset)
    }

    /// Parallel form of [`encode`](Self::encode).
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of the first invalid token.
    pub fn par_encode(&self, input: &str) -> Result<String, ParseError> {
        self.par_encode_bitset(input)
            .map(|bitset| self.finish(&bitset))
    }
}

/// Encodes `input` with the default configuration.
///
/// The default configuration caps positions at [`DEFAULT_MAX_INDEX`]
/// (1 048 576), so larger but otherwise valid positions are rejected with
/// [`ParseErrorKind::IndexTooLarge`]. Use
/// [`EncoderConfig::with_max_index`] to raise the cap.
///
/// # Errors
///
/// Returns [`ParseError`] if any token is invalid or exceeds the cap.
///
/// # Examples
///
/// ```rust
/// use bitlist::{ParseErrorKind, encode};
///
/// assert_eq!(
///     encode("2000000").unwrap_err().kind(),
///     ParseErrorKind::IndexTooLarge { index: 2_000_000, limit: 1 << 20 }
/// );
/// ```
pub fn encode(input: &str) -> Result<String, ParseError> {
    RangeBitsetEncoder::new().encode(input)
}

/// Parallel form of [`encode`] with the default configuration.
///
/// # Errors
///
/// Returns [`ParseError`] if any token is invalid.
#[cfg(feature = "rayon")]
pub fn par_encode(input: &str) -> Result<String, ParseError> {
    RangeBitsetEncoder::new().par_encode(input)
}
