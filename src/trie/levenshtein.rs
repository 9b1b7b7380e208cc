//! Levenshtein-distance bounded search over a [`Trie`].
//!
//! Each trie edge extends the dynamic-programming row of the path above it
//! by one symbol, so words sharing a prefix share the work for that prefix.
//! A branch is cut once every entry of its row exceeds the bound: appending
//! more symbols can never bring the distance back down.

use std::collections::HashSet;

use log::trace;

use crate::trie::FuzzyMatch;
use crate::trie::node::TrieNode;
use crate::trie::prefix::Trie;
use crate::util::distance::next_levenshtein_row;

impl Trie {
    /// Return every stored word within edit distance `max_distance` of `word`.
    pub fn levenshtein_search(&self, word: &str, max_distance: usize) -> HashSet<FuzzyMatch> {
        let query: Vec<char> = word.chars().collect();
        let root_row: Vec<usize> = (0..=query.len()).collect();
        let mut results = HashSet::new();
        let mut visited_nodes = 0usize;

        // Rows are computed once per edge and travel with their node.
        let mut stack: Vec<(&TrieNode, Vec<usize>)> = vec![(self.root(), root_row)];

        while let Some((node, row)) = stack.pop() {
            visited_nodes += 1;
            let distance = row[query.len()];

            if distance <= max_distance
                && let Some(stored) = node.word()
            {
                results.insert(FuzzyMatch::new(stored, distance));
            }

            for (symbol, child) in node.children() {
                let child_row = next_levenshtein_row(&query, &row, symbol);
                if child_row.iter().min().is_some_and(|&min| min <= max_distance) {
                    stack.push((child, child_row));
                }
            }
        }

        trace!(
            "levenshtein search {:?} (max {}) visited {} nodes, found {} matches",
            word,
            max_distance,
            visited_nodes,
            results.len()
        );
        results
    }
}
