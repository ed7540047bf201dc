//! Algebraic type classes used to merge partial results.
//!
//! - [`Semigroup`]: types with an associative `combine`
//! - [`Monoid`]: semigroups with an identity element (`empty`)
//!
//! A fold over a sequence can be split at any point and the partial results
//! merged with `combine` exactly when the accumulator forms a semigroup. The
//! [`Bitset`](crate::Bitset) accumulator of the encoder is a monoid under
//! pad-then-OR, with the length-0 bitset as identity.
//!
//! # Examples
//!
//! ```rust
//! use bitlist::Bitset;
//! use bitlist::typeclass::{Monoid, Semigroup};
//!
//! let left: Bitset = "101".parse().unwrap();
//! let right: Bitset = "00001".parse().unwrap();
//! assert_eq!(left.combine(right).to_string(), "10101");
//!
//! let parts: Vec<Bitset> = vec!["1".parse().unwrap(), "001".parse().unwrap()];
//! assert_eq!(Bitset::combine_all(parts).to_string(), "101");
//! assert!(Bitset::empty().is_empty_value());
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
