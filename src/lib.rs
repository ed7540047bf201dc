//! # bitlist
//!
//! Folds comma-separated lists of 1-indexed positions and inclusive ranges
//! into bitstrings.
//!
//! ## Overview
//!
//! An index list such as `"7,1-3,5"` names positions to switch on. Encoding
//! it produces a string of `'0'`/`'1'` characters whose length is the largest
//! position referenced and whose `k`-th character (from 1) is `'1'` exactly
//! when some token covers `k`:
//!
//! ```rust
//! assert_eq!(bitlist::encode("7,1-3,5").unwrap(), "1110101");
//! ```
//!
//! The encoding is a left fold over an owned [`Bitset`]. Partial bitsets
//! merge by padding the shorter with zeros and ORing, an associative and
//! commutative operation, so any partition of the input can be folded
//! independently and merged to the same result.
//!
//! - [`RangeBitsetEncoder`]: parsing, folding and rendering
//! - [`Bitset`]: the growable accumulator
//! - [`Token`]: a parsed single position or range
//! - [`typeclass`]: `Semigroup` and `Monoid`
//! - [`collector`]: supplier/accumulator/combiner/finisher reductions
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup` and `Monoid`, implemented for [`Bitset`]
//! - `collector`: the `Collector` trait and its implementations
//! - `rayon`: parallel encoding and `Collector::par_collect`
//! - `serde`: (de)serialization of [`Bitset`], [`Token`] and [`EncoderConfig`]
//! - `full`: Enable all features

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use bitlist::prelude::*;
///
/// let bits = RangeBitsetEncoder::new().encode("1,3").unwrap();
/// assert_eq!(bits, "101");
/// ```
pub mod prelude {
    pub use crate::bitset::Bitset;
    pub use crate::encoder::{EncoderConfig, RangeBitsetEncoder, encode};
    pub use crate::error::{ParseError, ParseErrorKind};
    pub use crate::token::Token;

    #[cfg(feature = "rayon")]
    pub use crate::encoder::par_encode;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "collector")]
    pub use crate::collector::*;
}

mod bitset;
mod encoder;
mod error;
mod token;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "collector")]
pub mod collector;

pub use bitset::Bitset;
pub use encoder::{DEFAULT_MAX_INDEX, EncoderConfig, RangeBitsetEncoder, encode};
pub use error::{BitsetParseError, ParseError, ParseErrorKind};
pub use token::Token;

#[cfg(feature = "rayon")]
pub use encoder::par_encode;
