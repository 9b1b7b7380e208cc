//! String distance metrics.
//!
//! Hamming and Levenshtein distances measured over Unicode scalar values,
//! plus the [`Metric`] trait the BK-tree is generic over.

use std::cmp::min;

use serde::{Deserialize, Serialize};

/// Count the positions at which two equal-length strings differ.
///
/// Returns `None` when the strings have different lengths, since Hamming
/// distance is undefined there.
pub fn hamming_distance(s1: &str, s2: &str) -> Option<usize> {
    if s1.chars().count() != s2.chars().count() {
        return None;
    }

    Some(s1.chars().zip(s2.chars()).filter(|(a, b)| a != b).count())
}

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[len1][len2]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None if the distance exceeds the threshold.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1.abs_diff(len2) > threshold {
        return None;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}

/// Compute the next DP row for Levenshtein distance after appending `symbol`
/// to the candidate prefix whose row is `prev_row`.
///
/// `query` is the string being searched for; `prev_row.len()` must be
/// `query.len() + 1`.
pub fn next_levenshtein_row(query: &[char], prev_row: &[usize], symbol: char) -> Vec<usize> {
    let mut row = Vec::with_capacity(prev_row.len());
    row.push(prev_row[0] + 1);

    for i in 1..prev_row.len() {
        let cost = usize::from(query[i - 1] != symbol);
        let value = min(
            min(
                row[i - 1] + 1,  // insertion
                prev_row[i] + 1, // deletion
            ),
            prev_row[i - 1] + cost, // substitution
        );
        row.push(value);
    }

    row
}

/// A distance function over strings.
///
/// BK-tree correctness requires a true metric: non-negative, zero on identical
/// inputs, symmetric, and satisfying the triangle inequality.
pub trait Metric {
    /// Distance between `a` and `b`.
    fn distance(&self, a: &str, b: &str) -> usize;
}

/// Unit-cost Levenshtein distance as a [`Metric`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Metric for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein_distance(a, b)
    }
}

impl<F> Metric for F
where
    F: Fn(&str, &str) -> usize,
{
    fn distance(&self, a: &str, b: &str) -> usize {
        self(a, b)
    }
}

/// The metrics supported by trie fuzzy search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Positional mismatches; equal lengths only.
    Hamming,
    /// Unit-cost edit distance.
    #[default]
    Levenshtein,
}

impl DistanceMetric {
    /// Distance between `a` and `b`, or `None` when the metric is undefined
    /// for the pair.
    pub fn distance(&self, a: &str, b: &str) -> Option<usize> {
        match self {
            DistanceMetric::Hamming => hamming_distance(a, b),
            DistanceMetric::Levenshtein => Some(levenshtein_distance(a, b)),
        }
    }

    /// Get the metric name.
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Hamming => "hamming",
            DistanceMetric::Levenshtein => "levenshtein",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance("", ""), Some(0));
        assert_eq!(hamming_distance("karolin", "kathrin"), Some(3));
        assert_eq!(hamming_distance("hello", "hallo"), Some(1));
        assert_eq!(hamming_distance("abc", "abc"), Some(0));
        assert_eq!(hamming_distance("abc", "abcd"), None);
        assert_eq!(hamming_distance("héllo", "hallo"), Some(1));
    }

    #[test]
    fn test_hamming_symmetry() {
        let pairs = [("hello", "hallo"), ("bell", "hell"), ("tonic", "timat")];
        for (a, b) in pairs {
            assert_eq!(hamming_distance(a, b), hamming_distance(b, a));
        }
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2); // transposition
        assert_eq!(levenshtein_distance("hklo", "hello"), 2);
        assert_eq!(levenshtein_distance("hklo", "bell"), 3);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(levenshtein_distance("日本語", "日本"), 1);
    }

    #[test]
    fn test_levenshtein_metric_laws() {
        let words = ["hello", "hallo", "leetcode", "hell", "bell", "", "h"];
        for a in words {
            assert_eq!(levenshtein_distance(a, a), 0);
            for b in words {
                let ab = levenshtein_distance(a, b);
                assert_eq!(ab, levenshtein_distance(b, a));
                for c in words {
                    assert!(levenshtein_distance(a, c) <= ab + levenshtein_distance(b, c));
                }
            }
        }
    }

    #[test]
    fn test_levenshtein_distance_threshold() {
        assert_eq!(
            levenshtein_distance_threshold("kitten", "sitting", 3),
            Some(3)
        );
        assert_eq!(levenshtein_distance_threshold("kitten", "sitting", 2), None);
        assert_eq!(
            levenshtein_distance_threshold("search", "search", 0),
            Some(0)
        );
        assert_eq!(levenshtein_distance_threshold("a", "abc", 1), None);
        assert_eq!(levenshtein_distance_threshold("a", "ab", 1), Some(1));
        assert_eq!(levenshtein_distance_threshold("", "ab", 2), Some(2));
    }

    #[test]
    fn test_next_levenshtein_row() {
        let query: Vec<char> = "hello".chars().collect();
        let root: Vec<usize> = (0..=query.len()).collect();

        let row = next_levenshtein_row(&query, &root, 'h');
        assert_eq!(row, vec![1, 0, 1, 2, 3, 4]);

        let row = next_levenshtein_row(&query, &row, 'a');
        assert_eq!(row, vec![2, 1, 1, 2, 3, 4]);
    }

    #[test]
    fn test_metric_trait() {
        assert_eq!(Levenshtein.distance("bar", "baz"), 1);

        let length_gap = |a: &str, b: &str| a.len().abs_diff(b.len());
        assert_eq!(length_gap.distance("abc", "a"), 2);
    }

    #[test]
    fn test_distance_metric_enum() {
        assert_eq!(DistanceMetric::Hamming.distance("abc", "abd"), Some(1));
        assert_eq!(DistanceMetric::Hamming.distance("abc", "ab"), None);
        assert_eq!(DistanceMetric::Levenshtein.distance("abc", "ab"), Some(1));
        assert_eq!(DistanceMetric::default(), DistanceMetric::Levenshtein);
        assert_eq!(DistanceMetric::Hamming.name(), "hamming");

        let json = serde_json::to_string(&DistanceMetric::Hamming).unwrap();
        assert_eq!(json, "\"hamming\"");
    }
}
