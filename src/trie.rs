//! Character tries with exact, wildcard and fuzzy search.
//!
//! One [`Trie`] backs every query type: exact lookup ([`prefix`]), `?`/`*`
//! patterns ([`wildcard`]), and bounded Hamming ([`hamming`]) or Levenshtein
//! ([`levenshtein`]) distance.

pub mod hamming;
pub mod levenshtein;
pub mod node;
pub mod prefix;
pub mod wildcard;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::util::distance::DistanceMetric;

// Re-export commonly used types
pub use node::TrieNode;
pub use prefix::Trie;
pub use wildcard::{PatternToken, WildcardMatcher, WildcardPattern};

/// A stored word found by a fuzzy search, with its exact distance to the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FuzzyMatch {
    /// The matched vocabulary word.
    pub word: String,
    /// Distance between the query and `word`.
    pub distance: usize,
}

impl FuzzyMatch {
    /// Create a new match.
    pub fn new<S: Into<String>>(word: S, distance: usize) -> Self {
        FuzzyMatch {
            word: word.into(),
            distance,
        }
    }
}

impl From<(&str, usize)> for FuzzyMatch {
    fn from((word, distance): (&str, usize)) -> Self {
        FuzzyMatch::new(word, distance)
    }
}

/// Sort matches by distance, then alphabetically.
pub fn sort_matches(matches: impl IntoIterator<Item = FuzzyMatch>) -> Vec<FuzzyMatch> {
    let mut sorted: Vec<FuzzyMatch> = matches.into_iter().collect();
    sorted.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.word.cmp(&b.word)));
    sorted
}

impl Trie {
    /// Return every stored word within `max_distance` of `word` under `metric`.
    pub fn fuzzy_search(
        &self,
        word: &str,
        max_distance: usize,
        metric: DistanceMetric,
    ) -> HashSet<FuzzyMatch> {
        match metric {
            DistanceMetric::Hamming => self.hamming_search(word, max_distance),
            DistanceMetric::Levenshtein => self.levenshtein_search(word, max_distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_search_dispatch() {
        let trie = Trie::build(["hello", "hallo", "hell"]);

        let hamming = trie.fuzzy_search("hello", 1, DistanceMetric::Hamming);
        let expected: HashSet<FuzzyMatch> =
            [("hello", 0), ("hallo", 1)].into_iter().map(FuzzyMatch::from).collect();
        assert_eq!(hamming, expected);

        let levenshtein = trie.fuzzy_search("hello", 1, DistanceMetric::Levenshtein);
        assert!(levenshtein.contains(&FuzzyMatch::new("hell", 1)));
        assert_eq!(levenshtein.len(), 3);
    }

    #[test]
    fn test_sort_matches() {
        let sorted = sort_matches([
            FuzzyMatch::new("hell", 2),
            FuzzyMatch::new("bell", 3),
            FuzzyMatch::new("hallo", 2),
        ]);
        let words: Vec<&str> = sorted.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["hallo", "hell", "bell"]);
    }
}
