//! Function-style entry points for callers that only need to build a
//! structure once and query it.
//!
//! ```
//! use ranseur::search::{build_trie, fuzzy_search, wildcard_search};
//! use ranseur::util::distance::DistanceMetric;
//!
//! let trie = build_trie(["hello", "hallo", "hell"]);
//! assert_eq!(wildcard_search(&trie, "h?llo").len(), 2);
//! assert_eq!(fuzzy_search(&trie, "hello", 1, DistanceMetric::Levenshtein).len(), 3);
//! ```

use std::collections::HashSet;

use crate::bktree::BkTree;
use crate::error::Result;
use crate::trie::{FuzzyMatch, Trie};
use crate::util::distance::{DistanceMetric, Metric};

/// Build a trie over `words`.
pub fn build_trie<I, S>(words: I) -> Trie
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Trie::build(words)
}

/// Whether `word` is stored in `trie`.
pub fn exact_search(trie: &Trie, word: &str) -> bool {
    trie.contains(word)
}

/// Words in `trie` matching a `?`/`*` pattern.
pub fn wildcard_search(trie: &Trie, pattern: &str) -> HashSet<String> {
    trie.wildcard_search_str(pattern)
}

/// Words in `trie` within `max_distance` of `word` under `metric`.
pub fn fuzzy_search(
    trie: &Trie,
    word: &str,
    max_distance: usize,
    metric: DistanceMetric,
) -> HashSet<FuzzyMatch> {
    trie.fuzzy_search(word, max_distance, metric)
}

/// Build a BK-tree over `words` with the given distance function.
pub fn build_bk_tree<I, S, M>(words: I, metric: M) -> BkTree<M>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    M: Metric,
{
    BkTree::build(words, metric)
}

/// Words in `tree` within `max_distance` of `word`.
pub fn bk_search<M: Metric>(
    tree: &BkTree<M>,
    word: &str,
    max_distance: usize,
) -> Result<HashSet<FuzzyMatch>> {
    tree.search(word, max_distance)
}
