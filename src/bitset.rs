//! Growable bitset rendered as a left-to-right `'0'`/`'1'` string.
//!
//! A [`Bitset`] is an ordered sequence of bits with an explicit length.
//! Bit `i` (0-based) stands for list position `i + 1`, so the first
//! character of the rendered string is position 1.
//!
//! # Storage
//!
//! Bits are packed into `u64` words, least significant bit first. Up to
//! 256 bits are stored inline without a heap allocation. Bits past
//! [`Bitset::len`] inside the last word are always zero, so two bitsets are
//! equal exactly when their lengths and rendered strings are equal.
//!
//! # Merging
//!
//! [`Bitset::union`] pads the shorter operand with zeros to the longer
//! length and ORs position by position. The operation is associative,
//! commutative and idempotent, with the empty bitset as identity, which is
//! what makes partial results from any partition of the input mergeable.
//!
//! # Examples
//!
//! ```rust
//! use bitlist::Bitset;
//!
//! let mut left = Bitset::with_len(3);
//! left.set(0);
//! let mut right = Bitset::with_len(5);
//! right.set(4);
//!
//! assert_eq!(left.union(right).to_string(), "10001");
//! ```

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::BitsetParseError;

const WORD_BITS: usize = u64::BITS as usize;
const INLINE_WORDS: usize = 4;

type Words = SmallVec<[u64; INLINE_WORDS]>;

/// An ordered, growable sequence of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitset {
    words: Words,
    len: usize,
}

impl Bitset {
    /// Creates an empty bitset of length 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bitset of `len` zero bits.
    pub fn with_len(len: usize) -> Self {
        Self {
            words: SmallVec::from_elem(0, words_for(len)),
            len,
        }
    }

    /// Returns the number of bits, set or not.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the bitset has length 0.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the bit at `index` (0-based). Bits past the end read as unset.
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// Sets the bit at `index` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set(&mut self, index: usize) {
        assert!(
            index < self.len,
            "index {index} out of bounds for bitset of length {}",
            self.len
        );
        self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
    }

    /// Sets every bit in the inclusive 0-based `range`.
    ///
    /// An empty range (`start > end`) leaves the bitset unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the range is non-empty and its end is `>= self.len()`.
    pub fn set_range(&mut self, range: RangeInclusive<usize>) {
        let (start, end) = range.into_inner();
        if start > end {
            return;
        }
        assert!(
            end < self.len,
            "range end {end} out of bounds for bitset of length {}",
            self.len
        );

        let first_word = start / WORD_BITS;
        let last_word = end / WORD_BITS;
        for word_index in first_word..=last_word {
            let low = if word_index == first_word {
                start % WORD_BITS
            } else {
                0
            };
            let high = if word_index == last_word {
                end % WORD_BITS
            } else {
                WORD_BITS - 1
            };
            self.words[word_index] |= span_mask(low, high);
        }
    }

    /// Extends the bitset with zero bits up to `len`. Never shrinks.
    pub fn grow_to(&mut self, len: usize) {
        if len <= self.len {
            return;
        }
        self.words.resize(words_for(len), 0);
        self.len = len;
    }

    /// ORs `other` into `self`, padding `self` with zeros first if `other`
    /// is longer.
    pub fn union_with(&mut self, other: &Self) {
        self.grow_to(other.len);
        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word |= other_word;
        }
    }

    /// Consuming form of [`Bitset::union_with`].
    ///
    /// The longer operand's storage is reused.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let (mut longer, shorter) = if self.len >= other.len {
            (self, other)
        } else {
            (other, self)
        };
        longer.union_with(&shorter);
        longer
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    /// Iterates over the 0-based indices of set bits in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(|&index| self.get(index))
    }

    /// Iterates over every bit from index 0 to `len - 1`.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|index| self.get(index))
    }
}

const fn words_for(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

/// Mask with bits `low..=high` set, both within one word.
const fn span_mask(low: usize, high: usize) -> u64 {
    let width = high - low + 1;
    if width == WORD_BITS {
        u64::MAX
    } else {
        ((1 << width) - 1) << low
    }
}

impl fmt::Display for Bitset {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self
            .iter()
            .map(|bit| if bit { '1' } else { '0' })
            .collect();
        formatter.pad(&rendered)
    }
}

impl FromStr for Bitset {
    type Err = BitsetParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut bitset = Self::with_len(text.chars().count());
        for (offset, character) in text.chars().enumerate() {
            match character {
                '0' => {}
                '1' => bitset.set(offset),
                _ => return Err(BitsetParseError { character, offset }),
            }
        }
        Ok(bitset)
    }
}

impl FromIterator<bool> for Bitset {
    fn from_iter<I: IntoIterator<Item = bool>>(iterator: I) -> Self {
        let bits: Vec<bool> = iterator.into_iter().collect();
        let mut bitset = Self::with_len(bits.len());
        for (index, _) in bits.iter().enumerate().filter(|(_, bit)| **bit) {
            bitset.set(index);
        }
        bitset
    }
}

// =============================================================================
// Semigroup / Monoid
// =============================================================================

#[cfg(feature = "typeclass")]
impl crate::typeclass::Semigroup for Bitset {
    fn combine(self, other: Self) -> Self {
        self.union(other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.union_with(other);
        result
    }
}

#[cfg(feature = "typeclass")]
impl crate::typeclass::Monoid for Bitset {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Bitset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Bitset {
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

    #[rstest]
    fn new_is_empty() {
        let bitset = Bitset::new();
        assert!(bitset.is_empty());
        assert_eq!(bitset.to_string(), "");
    }

    #[rstest]
    fn with_len_is_all_zero() {
        let bitset = Bitset::with_len(5);
        assert_eq!(bitset.len(), 5);
        assert_eq!(bitset.count_ones(), 0);
        assert_eq!(bitset.to_string(), "00000");
    }

    #[rstest]
    fn set_and_get() {
        let mut bitset = Bitset::with_len(70);
        bitset.set(0);
        bitset.set(64);
        bitset.set(69);
        assert!(bitset.get(0));
        assert!(bitset.get(64));
        assert!(bitset.get(69));
        assert!(!bitset.get(1));
        assert!(!bitset.get(1000));
        assert_eq!(bitset.iter_ones().collect::<Vec<_>>(), vec![0, 64, 69]);
    }

    #[rstest]
    #[should_panic(expected = "out of bounds")]
    fn set_past_end_panics() {
        let mut bitset = Bitset::with_len(3);
        bitset.set(3);
    }

    #[rstest]
    #[case(0..=2, 5, "11100")]
    #[case(2..=2, 5, "00100")]
    #[case(4..=1, 5, "00000")]
    fn set_range_within_one_word(
        #[case] range: RangeInclusive<usize>,
        #[case] len: usize,
        #[case] expected: &str,
    ) {
        let mut bitset = Bitset::with_len(len);
        bitset.set_range(range);
        assert_eq!(bitset.to_string(), expected);
    }

    #[rstest]
    fn set_range_full_word() {
        let mut bitset = Bitset::with_len(64);
        bitset.set_range(0..=63);
        assert_eq!(bitset.count_ones(), 64);
        assert_eq!(bitset.to_string(), "1".repeat(64));
    }

    #[rstest]
    fn set_range_across_words() {
        let mut bitset = Bitset::with_len(200);
        bitset.set_range(60..=130);
        assert_eq!(bitset.count_ones(), 71);
        assert!(!bitset.get(59));
        assert!(bitset.get(60));
        assert!(bitset.get(128));
        assert!(bitset.get(130));
        assert!(!bitset.get(131));
    }

    #[rstest]
    fn grow_to_never_shrinks() {
        let mut bitset: Bitset = "101".parse().unwrap();
        bitset.grow_to(2);
        assert_eq!(bitset.to_string(), "101");
        bitset.grow_to(6);
        assert_eq!(bitset.to_string(), "101000");
    }

    #[rstest]
    #[case("101", "01", "111")]
    #[case("1", "00001", "10001")]
    #[case("", "0110", "0110")]
    #[case("11", "11", "11")]
    fn union_pads_then_ors(#[case] left: &str, #[case] right: &str, #[case] expected: &str) {
        let left: Bitset = left.parse().unwrap();
        let right: Bitset = right.parse().unwrap();
        assert_eq!(left.clone().union(right.clone()).to_string(), expected);
        assert_eq!(right.union(left).to_string(), expected);
    }

    #[rstest]
    fn from_str_rejects_other_characters() {
        let error = "10x1".parse::<Bitset>().unwrap_err();
        assert_eq!(error.character, 'x');
        assert_eq!(error.offset, 2);
    }

    #[rstest]
    fn from_iterator_of_bools() {
        let bitset: Bitset = [true, false, false, true].into_iter().collect();
        assert_eq!(bitset.to_string(), "1001");
    }

    #[rstest]
    fn display_respects_width() {
        let bitset: Bitset = "11".parse().unwrap();
        assert_eq!(format!("{bitset:>4}"), "  11");
    }
}
