//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T` (plus associativity from [`Semigroup`]):
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// The identity is the natural starting accumulator of a fold: folding
/// nothing yields `empty()`, and merging with an untouched partition
/// changes nothing.
///
/// # Examples
///
/// ```rust
/// use bitlist::Bitset;
/// use bitlist::typeclass::{Monoid, Semigroup};
///
/// let value: Bitset = "0101".parse().unwrap();
/// assert_eq!(Bitset::empty().combine(value.clone()), value);
/// assert_eq!(value.clone().combine(Bitset::empty()), value);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from `empty()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitlist::typeclass::Monoid;
    ///
    /// let names = vec![String::from("Joe"), String::from(","), String::from("Amy")];
    /// assert_eq!(String::combine_all(names), "Joe,Amy");
    /// assert_eq!(String::combine_all(Vec::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// `None` is the identity for any inner semigroup.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}
