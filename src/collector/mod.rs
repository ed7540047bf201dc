//! Collectors: a supplier, an accumulator, a combiner and a finisher.
//!
//! A [`Collector`] describes a mutable-free reduction of a sequence:
//!
//! 1. `supply` creates a fresh accumulator state,
//! 2. `accumulate` folds one item into a state (and may fail),
//! 3. `combine` merges two states built from adjacent parts of the input,
//! 4. `finish` turns the final state into the output.
//!
//! `combine` must be associative and `supply()` must be its identity, so that
//! [`collect`](Collector::collect), [`collect_partitioned`](Collector::collect_partitioned)
//! and the rayon-backed `par_collect` all produce the same output.
//!
//! # Examples
//!
//! ```rust
//! use bitlist::RangeBitsetEncoder;
//! use bitlist::collector::{Collector, Joining};
//!
//! let bits = RangeBitsetEncoder::new()
//!     .collect("7,1-3,5".split(','))
//!     .unwrap();
//! assert_eq!(bits, "1110101");
//!
//! let names = ["Joe", "Steven", "Patrick"];
//! let Ok(csv) = Joining::new(",").collect(names);
//! assert_eq!(csv, "Joe,Steven,Patrick");
//! ```

mod joining;

pub use joining::Joining;

use std::marker::PhantomData;

use crate::bitset::Bitset;
use crate::encoder::RangeBitsetEncoder;
use crate::error::ParseError;
use crate::typeclass::{Monoid, Semigroup};

/// A reduction of a sequence of `T` into an `Output`.
pub trait Collector<T> {
    /// Accumulator threaded through the fold.
    type State;
    /// Final result.
    type Output;
    /// Error raised by `accumulate`.
    type Error;

    /// Creates an empty accumulator state.
    fn supply(&self) -> Self::State;

    /// Folds one item into `state`.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the item cannot be accumulated.
    fn accumulate(&self, state: Self::State, item: T) -> Result<Self::State, Self::Error>;

    /// Merges two states; `left` was built from items preceding `right`'s.
    fn combine(&self, left: Self::State, right: Self::State) -> Self::State;

    /// Converts the final state into the output.
    fn finish(&self, state: Self::State) -> Self::Output;

    /// Sequential left fold over `items`.
    ///
    /// # Errors
    ///
    /// Returns the first accumulation error.
    fn collect<I>(&self, items: I) -> Result<Self::Output, Self::Error>
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        items
            .into_iter()
            .try_fold(self.supply(), |state, item| self.accumulate(state, item))
            .map(|state| self.finish(state))
    }

    /// Folds each partition from a fresh state and combines the partial
    /// states left to right.
    ///
    /// For a lawful collector this equals `collect` over the concatenated
    /// partitions.
    ///
    /// # Errors
    ///
    /// Returns the first accumulation error, in partition order.
    fn collect_partitioned<P, I>(&self, partitions: P) -> Result<Self::Output, Self::Error>
    where
        P: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        let mut merged = self.supply();
        for partition in partitions {
            let partial = partition
                .into_iter()
                .try_fold(self.supply(), |state, item| self.accumulate(state, item))?;
            merged = self.combine(merged, partial);
        }
        Ok(self.finish(merged))
    }

    /// Parallel fold over `items` with rayon.
    ///
    /// Rayon keeps the relative order of adjacent splits when reducing, so
    /// collectors whose `combine` is associative but not commutative (such
    /// as [`Joining`]) still produce the sequential result.
    ///
    /// # Errors
    ///
    /// Returns an accumulation error if any item fails.
    #[cfg(feature = "rayon")]
    fn par_collect<I>(&self, items: I) -> Result<Self::Output, Self::Error>
    where
        I: rayon::iter::IntoParallelIterator<Item = T>,
        Self: Sized + Sync,
        T: Send,
        Self::State: Send,
        Self::Error: Send,
    {
        use rayon::iter::ParallelIterator;

        items
            .into_par_iter()
            .try_fold(
                || self.supply(),
                |state, item| self.accumulate(state, item),
            )
            .try_reduce(|| self.supply(), |left, right| Ok(self.combine(left, right)))
            .map(|state| self.finish(state))
    }
}

// =============================================================================
// RangeBitsetEncoder
// =============================================================================

impl<'a> Collector<&'a str> for RangeBitsetEncoder {
    type State = Bitset;
    type Output = String;
    type Error = ParseError;

    fn supply(&self) -> Bitset {
        Bitset::empty()
    }

    fn accumulate(&self, state: Bitset, item: &'a str) -> Result<Bitset, ParseError> {
        self.fold(state, item)
    }

    fn combine(&self, left: Bitset, right: Bitset) -> Bitset {
        left.combine(right)
    }

    fn finish(&self, state: Bitset) -> String {
        state.to_string()
    }
}

// =============================================================================
// FunctionCollector
// =============================================================================

/// A collector assembled from four closures.
///
/// # Examples
///
/// ```rust
/// use bitlist::collector::{Collector, FunctionCollector};
///
/// let longest = FunctionCollector::new(
///     || 0_usize,
///     |state: usize, name: &str| Ok::<_, std::convert::Infallible>(state.max(name.len())),
///     usize::max,
///     |state: usize| state,
/// );
/// assert_eq!(longest.collect(["Joe", "Patrick", "Amy"]), Ok(7));
/// ```
pub struct FunctionCollector<S, A, C, F, T> {
    supplier: S,
    accumulator: A,
    combiner: C,
    finisher: F,
    marker: PhantomData<fn(T)>,
}

impl<S, A, C, F, T> FunctionCollector<S, A, C, F, T> {
    /// Bundles the four functions into a collector.
    pub const fn new(supplier: S, accumulator: A, combiner: C, finisher: F) -> Self {
        Self {
            supplier,
            accumulator,
            combiner,
            finisher,
            marker: PhantomData,
        }
    }
}

impl<S, A, C, F, T, State, Output, Error> Collector<T> for FunctionCollector<S, A, C, F, T>
where
    S: Fn() -> State,
    A: Fn(State, T) -> Result<State, Error>,
    C: Fn(State, State) -> State,
    F: Fn(State) -> Output,
{
    type State = State;
    type Output = Output;
    type Error = Error;

    fn supply(&self) -> State {
        (self.supplier)()
    }

    fn accumulate(&self, state: State, item: T) -> Result<State, Error> {
        (self.accumulator)(state, item)
    }

    fn combine(&self, left: State, right: State) -> State {
        (self.combiner)(left, right)
    }

    fn finish(&self, state: State) -> Output {
        (self.finisher)(state)
    }
}

/// Collector that merges monoid values with `combine`.
///
/// # Examples
///
/// ```rust
/// use bitlist::Bitset;
/// use bitlist::collector::{Collector, MonoidCollector};
///
/// let parts: Vec<Bitset> = vec!["1".parse().unwrap(), "001".parse().unwrap()];
/// let Ok(merged) = MonoidCollector::<Bitset>::new().collect(parts);
/// assert_eq!(merged.to_string(), "101");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoidCollector<M> {
    marker: PhantomData<fn() -> M>,
}

impl<M> MonoidCollector<M> {
    /// Creates the collector.
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<M: Monoid> Collector<M> for MonoidCollector<M> {
    type State = M;
    type Output = M;
    type Error = std::convert::Infallible;

    fn supply(&self) -> M {
        M::empty()
    }

    fn accumulate(&self, state: M, item: M) -> Result<M, Self::Error> {
        Ok(state.combine(item))
    }

    fn combine(&self, left: M, right: M) -> M {
        left.combine(right)
    }

    fn finish(&self, state: M) -> M {
        state
    }
}
