//! BK-tree (Burkhard-Keller tree) for bounded-distance lookup.
//!
//! Each child edge is labelled with the exact distance between the child's
//! word and its parent's word at insertion time. A range query visits only
//! edges whose label lies within `max_distance` of the distance to the
//! current node, which the triangle inequality makes safe.
//!
//! The tree is generic over a [`Metric`]; the default is unit-cost
//! Levenshtein distance. The metric must be a true metric for searches to be
//! complete.

use std::collections::HashSet;
use std::collections::hash_map::Entry;

use ahash::AHashMap;
use log::{debug, trace};
use rayon::prelude::*;

use crate::error::{RanseurError, Result};
use crate::trie::{FuzzyMatch, sort_matches};
use crate::util::distance::{Levenshtein, Metric};

/// Largest radius [`BkTree::find_nearest`] widens to before giving up.
const MAX_NEAREST_SEARCH_DISTANCE: usize = 20;

/// A node in the BK-tree.
#[derive(Debug, Clone)]
struct BkNode {
    word: String,
    /// Children keyed by their exact distance to `word`.
    children: AHashMap<usize, BkNode>,
}

impl BkNode {
    fn new(word: &str) -> Self {
        BkNode {
            word: word.to_string(),
            children: AHashMap::new(),
        }
    }
}

/// A BK-tree over a static vocabulary.
#[derive(Debug, Clone)]
pub struct BkTree<M = Levenshtein> {
    root: Option<BkNode>,
    metric: M,
    len: usize,
}

impl BkTree<Levenshtein> {
    /// Create an empty tree using Levenshtein distance.
    pub fn new() -> Self {
        Self::with_metric(Levenshtein)
    }
}

impl Default for BkTree<Levenshtein> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Metric> BkTree<M> {
    /// Create an empty tree using `metric`.
    pub fn with_metric(metric: M) -> Self {
        BkTree {
            root: None,
            metric,
            len: 0,
        }
    }

    /// Build a tree from a vocabulary. The first word becomes the root.
    pub fn build<I, S>(words: I, metric: M) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::with_metric(metric);
        for word in words {
            tree.insert(word.as_ref());
        }
        debug!(
            "built BK-tree with {} words, depth {}",
            tree.len,
            tree.depth()
        );
        tree
    }

    /// Insert a word.
    ///
    /// Walks from the root following the edge labelled with the exact
    /// distance to each visited word and attaches a new leaf where that edge
    /// is missing. Returns `false` if the word was already stored.
    pub fn insert(&mut self, word: &str) -> bool {
        let metric = &self.metric;
        let mut node = match self.root.as_mut() {
            Some(root) => root,
            None => {
                self.root = Some(BkNode::new(word));
                self.len = 1;
                return true;
            }
        };

        loop {
            let distance = metric.distance(word, &node.word);
            if distance == 0 && node.word == word {
                return false;
            }

            match node.children.entry(distance) {
                Entry::Occupied(entry) => node = entry.into_mut(),
                Entry::Vacant(entry) => {
                    entry.insert(BkNode::new(word));
                    break;
                }
            }
        }

        self.len += 1;
        true
    }

    /// Return every stored word within `max_distance` of `query`, paired with
    /// its distance.
    ///
    /// Fails with [`RanseurError::EmptyTree`] if nothing has been inserted.
    pub fn search(&self, query: &str, max_distance: usize) -> Result<HashSet<FuzzyMatch>> {
        let root = self.root.as_ref().ok_or(RanseurError::EmptyTree)?;
        let mut results = HashSet::new();
        let mut stack = vec![root];
        let mut visited_nodes = 0usize;

        while let Some(node) = stack.pop() {
            visited_nodes += 1;
            let distance = self.metric.distance(query, &node.word);
            if distance <= max_distance {
                results.insert(FuzzyMatch::new(node.word.as_str(), distance));
            }

            let low = distance.saturating_sub(max_distance);
            let high = distance.saturating_add(max_distance);
            stack.extend(
                node.children
                    .iter()
                    .filter(|(edge, _)| (low..=high).contains(*edge))
                    .map(|(_, child)| child),
            );
        }

        trace!(
            "BK-tree search {:?} (max {}) visited {}/{} nodes, found {} matches",
            query,
            max_distance,
            visited_nodes,
            self.len,
            results.len()
        );
        Ok(results)
    }

    /// Return up to `limit` words closest to `query`, nearest first (ties
    /// broken alphabetically).
    ///
    /// The search radius widens one step at a time until `limit` words are
    /// found or the radius reaches an internal maximum.
    pub fn find_nearest(&self, query: &str, limit: usize) -> Result<Vec<FuzzyMatch>> {
        if self.root.is_none() {
            return Err(RanseurError::EmptyTree);
        }

        let mut found = HashSet::new();
        for radius in 0..=MAX_NEAREST_SEARCH_DISTANCE {
            found = self.search(query, radius)?;
            if found.len() >= limit {
                break;
            }
        }

        let mut nearest = sort_matches(found);
        nearest.truncate(limit);
        Ok(nearest)
    }

    /// Stored words, in no particular order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        let mut stack: Vec<&BkNode> = self.root.iter().collect();
        while let Some(node) = stack.pop() {
            words.push(node.word.clone());
            stack.extend(node.children.values());
        }
        words
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&BkNode, usize)> = self.root.iter().map(|root| (root, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.values().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// The distance metric used by this tree.
    pub fn metric(&self) -> &M {
        &self.metric
    }
}

impl<M: Metric + Sync> BkTree<M> {
    /// Run [`BkTree::search`] for each query in parallel.
    ///
    /// Results come back in the order of `queries`.
    pub fn search_many<S>(&self, queries: &[S], max_distance: usize) -> Result<Vec<HashSet<FuzzyMatch>>>
    where
        S: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.search(query.as_ref(), max_distance))
            .collect()
    }
}
