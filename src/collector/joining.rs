//! String joining collector.

use std::convert::Infallible;

use super::Collector;
use crate::typeclass::Semigroup;

/// Joins string items with a separator, optionally wrapped in a prefix and
/// suffix.
///
/// No separator is emitted after the last item, and joining nothing yields
/// just the prefix and suffix.
///
/// # Examples
///
/// ```rust
/// use bitlist::collector::{Collector, Joining};
///
/// let joining = Joining::new(", ").with_affixes("[", "]");
/// let Ok(joined) = joining.collect(["Diana", "Chris"]);
/// assert_eq!(joined, "[Diana, Chris]");
///
/// let Ok(empty) = joining.collect(Vec::<String>::new());
/// assert_eq!(empty, "[]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Joining {
    separator: String,
    prefix: String,
    suffix: String,
}

impl Joining {
    /// Creates a collector joining items with `separator`.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Wraps the joined output in `prefix` and `suffix`.
    #[must_use]
    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }
}

impl<S: AsRef<str>> Collector<S> for Joining {
    type State = Option<String>;
    type Output = String;
    type Error = Infallible;

    fn supply(&self) -> Option<String> {
        None
    }

    fn accumulate(&self, state: Option<String>, item: S) -> Result<Option<String>, Infallible> {
        let joined = match state {
            Some(mut joined) => {
                joined.push_str(&self.separator);
                joined.push_str(item.as_ref());
                joined
            }
            None => item.as_ref().to_owned(),
        };
        Ok(Some(joined))
    }

    fn combine(&self, left: Option<String>, right: Option<String>) -> Option<String> {
        match (left, right) {
            (Some(left), Some(right)) => Some(left.combine_ref(&self.separator).combine(right)),
            (left, right) => left.combine(right),
        }
    }

    fn finish(&self, state: Option<String>) -> String {
        let joined = state.unwrap_or_default();
        let mut output =
            String::with_capacity(self.prefix.len() + joined.len() + self.suffix.len());
        output.push_str(&self.prefix);
        output.push_str(&joined);
        output.push_str(&self.suffix);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], "")]
    #[case(&["Joe"], "Joe")]
    #[case(&["Joe", "Steven", "Patrick"], "Joe,Steven,Patrick")]
    fn joins_without_trailing_separator(#[case] names: &[&str], #[case] expected: &str) {
        let Ok(joined) = Joining::new(",").collect(names.iter().copied());
        assert_eq!(joined, expected);
    }

    #[rstest]
    fn empty_items_still_get_separators() {
        let Ok(joined) = Joining::new(",").collect(["", "a", ""]);
        assert_eq!(joined, ",a,");
    }

    #[rstest]
    #[case(vec![vec!["a", "b"], vec!["c"]])]
    #[case(vec![vec![], vec!["a"], vec![], vec!["b", "c"]])]
    #[case(vec![vec!["a"], vec!["b"], vec!["c"]])]
    fn partitions_join_in_order(#[case] partitions: Vec<Vec<&str>>) {
        let Ok(joined) = Joining::new("-").collect_partitioned(partitions);
        assert_eq!(joined, "a-b-c");
    }

    #[rstest]
    fn combine_with_empty_side_is_identity() {
        let joining = Joining::new(",");
        let left = Some(String::from("a"));
        assert_eq!(
            <Joining as Collector<&str>>::combine(&joining, left.clone(), None),
            left
        );
        assert_eq!(
            <Joining as Collector<&str>>::combine(&joining, None, left.clone()),
            left
        );
    }
}
