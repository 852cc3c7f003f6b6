//! Distinct-permutation enumeration over a multiset of tokens.
//!
//! A recovery phrase may contain the same word more than once, so the
//! orderings worth checking are the distinct permutations of a multiset:
//! `N! / Π(mᵢ!)` of them for multiplicities `m₁..mₖ`. [`Multiset`]
//! tracks each value's multiplicity and [`MultisetPermutations`] walks
//! the distinct orderings exactly once each, in O(N) auxiliary space,
//! by decrementing multiplicity counts during a depth-first descent.
//! No permutation is ever materialized twice and no "seen" set is kept.

#![allow(dead_code)]

/// A fixed collection of tokens with multiplicities derived from value
/// equality. Distinct values keep their first-appearance order, which
/// also fixes the (stable but otherwise unspecified) emission order of
/// the permutation iterator.
#[derive(Debug, Clone)]
pub struct Multiset<T> {
    values: Vec<T>,
    counts: Vec<usize>,
    len: usize,
}

impl<T: Clone + PartialEq> Multiset<T> {
    pub fn new(items: &[T]) -> Self {
        let mut values: Vec<T> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();
        for item in items {
            match values.iter().position(|v| v == item) {
                Some(i) => counts[i] += 1,
                None => {
                    values.push(item.clone());
                    counts.push(1);
                }
            }
        }
        let len = items.len();
        Self {
            values,
            counts,
            len,
        }
    }

    /// Total number of tokens, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct token values.
    pub fn distinct_values(&self) -> usize {
        self.values.len()
    }

    /// Exact number of distinct permutations, `N! / Π(mᵢ!)`.
    ///
    /// Computed incrementally as a product of binomial coefficients so
    /// every intermediate value is itself an exact integer. Returns
    /// `None` when the count does not fit in a `u64`, which is the
    /// limit of the search progress counter.
    pub fn distinct_permutation_count(&self) -> Option<u64> {
        let mut total: u128 = 1;
        let mut placed: u128 = 0;
        for &count in &self.counts {
            for i in 1..=count as u128 {
                placed += 1;
                // Exact division: the running product is always the
                // multinomial coefficient over the tokens placed so far.
                total = total.checked_mul(placed)? / i;
            }
        }
        u64::try_from(total).ok()
    }

    /// Consume the multiset and iterate every distinct permutation
    /// exactly once. Single forward pass; not restartable.
    pub fn permutations(self) -> MultisetPermutations<T> {
        let remaining = self.counts;
        MultisetPermutations {
            values: self.values,
            remaining,
            prefix: Vec::with_capacity(self.len),
            cursor: 0,
            len: self.len,
            done: false,
        }
    }
}

/// Lazy iterator over the distinct permutations of a [`Multiset`].
///
/// The walk is a depth-first descent over value indices: at each
/// position every *distinct* value with a remaining count is tried
/// once, its count decremented for the subtree below, then restored on
/// backtrack. Duplicate tokens therefore never produce duplicate
/// permutations, and memory stays proportional to the phrase length.
#[derive(Debug)]
pub struct MultisetPermutations<T> {
    values: Vec<T>,
    remaining: Vec<usize>,
    /// Value index chosen at each position of the current prefix.
    prefix: Vec<usize>,
    /// Next value index to try at the current position.
    cursor: usize,
    len: usize,
    done: bool,
}

impl<T> MultisetPermutations<T> {
    /// Undo the last choice and aim the cursor past it. Returns false
    /// once the prefix is empty, i.e. the walk is complete.
    fn retreat(&mut self) -> bool {
        match self.prefix.pop() {
            Some(i) => {
                self.remaining[i] += 1;
                self.cursor = i + 1;
                true
            }
            None => false,
        }
    }
}

impl<T: Clone> Iterator for MultisetPermutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if self.prefix.len() == self.len {
                let permutation = self
                    .prefix
                    .iter()
                    .map(|&i| self.values[i].clone())
                    .collect();
                if !self.retreat() {
                    self.done = true;
                }
                return Some(permutation);
            }
            let next_value = (self.cursor..self.values.len()).find(|&i| self.remaining[i] > 0);
            match next_value {
                Some(i) => {
                    self.remaining[i] -= 1;
                    self.prefix.push(i);
                    self.cursor = 0;
                }
                None => {
                    if !self.retreat() {
                        self.done = true;
                        return None;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_duplicates_collapse() {
        let multiset = Multiset::new(&words(&["A", "A", "B"]));
        assert_eq!(multiset.len(), 3);
        assert_eq!(multiset.distinct_values(), 2);
        assert_eq!(multiset.distinct_permutation_count(), Some(3));

        let emitted: Vec<Vec<String>> = multiset.permutations().collect();
        assert_eq!(
            emitted,
            vec![
                words(&["A", "A", "B"]),
                words(&["A", "B", "A"]),
                words(&["B", "A", "A"]),
            ]
        );
    }

    #[test]
    fn test_distinct_tokens_full_factorial() {
        let multiset = Multiset::new(&words(&["w", "x", "y", "z"]));
        assert_eq!(multiset.distinct_permutation_count(), Some(24));

        let emitted: Vec<Vec<String>> = multiset.permutations().collect();
        assert_eq!(emitted.len(), 24);

        let unique: HashSet<Vec<String>> = emitted.into_iter().collect();
        assert_eq!(unique.len(), 24, "every emitted permutation is distinct");
    }

    #[test]
    fn test_count_matches_emission_for_assorted_multisets() {
        let cases: Vec<Vec<String>> = vec![
            words(&["a"]),
            words(&["a", "a", "a", "a"]),
            words(&["a", "b", "b", "c", "c", "c"]),
            words(&["a", "b", "c", "d", "e"]),
            words(&["x", "y", "x", "y", "x"]),
        ];
        for items in cases {
            let multiset = Multiset::new(&items);
            let expected = multiset.distinct_permutation_count().unwrap();
            let emitted: Vec<Vec<String>> = multiset.permutations().collect();
            assert_eq!(
                emitted.len() as u64,
                expected,
                "count drifted for {:?}",
                items
            );
            let unique: HashSet<Vec<String>> = emitted.into_iter().collect();
            assert_eq!(unique.len() as u64, expected, "duplicates for {:?}", items);
        }
    }

    #[test]
    fn test_permutations_use_each_token_once() {
        let items = words(&["a", "b", "b", "c"]);
        let mut sorted_input = items.clone();
        sorted_input.sort();
        for permutation in Multiset::new(&items).permutations() {
            let mut sorted = permutation.clone();
            sorted.sort();
            assert_eq!(sorted, sorted_input, "bad multiset in {:?}", permutation);
        }
    }

    #[test]
    fn test_all_identical_tokens() {
        let multiset = Multiset::new(&words(&["same"; 5]));
        assert_eq!(multiset.distinct_permutation_count(), Some(1));
        let emitted: Vec<Vec<String>> = multiset.permutations().collect();
        assert_eq!(emitted, vec![words(&["same"; 5])]);
    }

    #[test]
    fn test_twelve_distinct_words() {
        let items: Vec<String> = (0..12).map(|i| format!("w{}", i)).collect();
        let multiset = Multiset::new(&items);
        assert_eq!(multiset.distinct_permutation_count(), Some(479_001_600));
    }

    #[test]
    fn test_count_overflow_is_detected() {
        let twenty: Vec<String> = (0..20).map(|i| format!("w{}", i)).collect();
        assert_eq!(
            Multiset::new(&twenty).distinct_permutation_count(),
            Some(2_432_902_008_176_640_000)
        );

        // 21! exceeds u64::MAX.
        let twenty_one: Vec<String> = (0..21).map(|i| format!("w{}", i)).collect();
        assert_eq!(Multiset::new(&twenty_one).distinct_permutation_count(), None);
    }

    #[test]
    fn test_works_with_integer_tokens() {
        let multiset = Multiset::new(&[1, 2, 2, 3]);
        let expected = multiset.distinct_permutation_count().unwrap();
        assert_eq!(expected, 12);
        assert_eq!(multiset.permutations().count() as u64, expected);
    }
}
