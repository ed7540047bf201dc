//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Associativity is what allows a fold to be cut into partitions whose
//! partial results are combined afterwards in any grouping.

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use bitlist::typeclass::Semigroup;
///
/// let a = String::from("Joe,");
/// let b = String::from("Amy");
/// assert_eq!(a.combine(b), "Joe,Amy");
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements of an iterator with `combine`.
    ///
    /// Returns `None` if the iterator is empty. See
    /// [`Monoid::combine_all`](super::Monoid::combine_all) for a version
    /// that falls back to the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitlist::Bitset;
    /// use bitlist::typeclass::Semigroup;
    ///
    /// let parts: Vec<Bitset> = vec!["01".parse().unwrap(), "1".parse().unwrap()];
    /// assert_eq!(Bitset::reduce_all(parts).unwrap().to_string(), "11");
    /// assert!(Bitset::reduce_all(Vec::new()).is_none());
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

/// Concatenation, `left` first.
impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend_from_slice(self);
        result.extend_from_slice(other);
        result
    }
}

/// `Some` values combine their contents; `None` is absorbed.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}
