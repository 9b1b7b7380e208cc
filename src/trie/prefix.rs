//! Prefix trie with exact lookup.
//!
//! [`Trie`] is the single structure behind every trie query in this crate:
//! exact membership lives here, wildcard and fuzzy traversals are added in
//! sibling modules as further `impl Trie` blocks.

use log::debug;

use crate::trie::node::TrieNode;

/// A character trie over a static vocabulary.
///
/// Words are inserted once and then queried any number of times. There is no
/// removal; rebuild the trie to shrink the vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a vocabulary.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        trie.extend(words);
        debug!(
            "built trie with {} words and {} nodes",
            trie.len,
            trie.root.node_count()
        );
        trie
    }

    /// Insert a word, creating any missing nodes along its path.
    ///
    /// Returns `true` if the word was not already stored. Inserting the same
    /// word twice is otherwise a no-op.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for symbol in word.chars() {
            node = node.child_or_insert(symbol);
        }

        let inserted = node.mark_terminal(word);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Check whether `word` is stored exactly.
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(TrieNode::is_terminal)
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// All stored words, in no particular order.
    pub fn words(&self) -> Vec<String> {
        Self::collect_words(&self.root)
    }

    /// All stored words that start with `prefix`, sorted.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = match self.find_node(prefix) {
            Some(node) => Self::collect_words(node),
            None => Vec::new(),
        };
        words.sort();
        words
    }

    /// The longest prefix of `word` that exists as a path in the trie.
    ///
    /// The path does not have to end at a stored word; no stored word can
    /// share more of `word` than this.
    pub fn find_longest_prefix(&self, word: &str) -> String {
        let mut node = &self.root;
        let mut prefix = String::new();

        for symbol in word.chars() {
            match node.child(symbol) {
                Some(child) => {
                    prefix.push(symbol);
                    node = child;
                }
                None => break,
            }
        }

        prefix
    }

    fn find_node(&self, path: &str) -> Option<&TrieNode> {
        path.chars()
            .try_fold(&self.root, |node, symbol| node.child(symbol))
    }

    fn collect_words(start: &TrieNode) -> Vec<String> {
        let mut words = Vec::new();
        let mut stack = vec![start];

        while let Some(node) = stack.pop() {
            if let Some(word) = node.word() {
                words.push(word.to_string());
            }
            stack.extend(node.children().map(|(_, child)| child));
        }

        words
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        Trie::build(words)
    }
}
