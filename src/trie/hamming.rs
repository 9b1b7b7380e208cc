//! Hamming-distance bounded search over a [`Trie`].

use std::collections::HashSet;

use log::trace;

use crate::trie::FuzzyMatch;
use crate::trie::node::TrieNode;
use crate::trie::prefix::Trie;

impl Trie {
    /// Return every stored word of the same length as `word` that differs
    /// from it in at most `max_distance` positions.
    ///
    /// A branch is abandoned as soon as its mismatch count exceeds
    /// `max_distance`. Words of another length never match; a query whose
    /// length matches nothing yields an empty set.
    pub fn hamming_search(&self, word: &str, max_distance: usize) -> HashSet<FuzzyMatch> {
        let query: Vec<char> = word.chars().collect();
        let mut results = HashSet::new();
        let mut stack: Vec<(&TrieNode, usize, usize)> = vec![(self.root(), 0, 0)];

        while let Some((node, depth, mismatches)) = stack.pop() {
            if depth == query.len() {
                if let Some(stored) = node.word() {
                    results.insert(FuzzyMatch::new(stored, mismatches));
                }
                continue;
            }

            for (symbol, child) in node.children() {
                let mismatches = mismatches + usize::from(symbol != query[depth]);
                if mismatches <= max_distance {
                    stack.push((child, depth + 1, mismatches));
                }
            }
        }

        trace!(
            "hamming search {:?} (max {}) found {} matches",
            word,
            max_distance,
            results.len()
        );
        results
    }
}
