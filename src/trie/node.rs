//! Trie node representation.

use ahash::AHashMap;

/// A single trie node.
///
/// Children are keyed by one `char` each. The terminal marker lives in its
/// own field and carries the stored word, so a node is terminal exactly when
/// `word` is `Some`.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: AHashMap<char, TrieNode>,
    word: Option<String>,
}

impl TrieNode {
    /// Create an empty, non-terminal node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the child reached through `symbol`.
    pub fn child(&self, symbol: char) -> Option<&TrieNode> {
        self.children.get(&symbol)
    }

    /// Get the child reached through `symbol`, creating it if missing.
    pub fn child_or_insert(&mut self, symbol: char) -> &mut TrieNode {
        self.children.entry(symbol).or_default()
    }

    /// Iterate over `(symbol, child)` edges in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(symbol, child)| (*symbol, child))
    }

    /// Number of outgoing edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The stored word if this node is terminal.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Whether a stored word ends here.
    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// Mark this node terminal for `word`. Returns `false` if it already was.
    pub fn mark_terminal(&mut self, word: &str) -> bool {
        if self.word.is_some() {
            return false;
        }
        self.word = Some(word.to_string());
        true
    }

    /// Count this node and all its descendants.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_terminal_once() {
        let mut node = TrieNode::new();
        assert!(!node.is_terminal());
        assert!(node.mark_terminal("ab"));
        assert!(!node.mark_terminal("ab"));
        assert_eq!(node.word(), Some("ab"));
    }

    #[test]
    fn test_children() {
        let mut root = TrieNode::new();
        root.child_or_insert('a').child_or_insert('b');
        root.child_or_insert('a');
        root.child_or_insert('c');

        assert_eq!(root.child_count(), 2);
        assert!(root.child('a').and_then(|a| a.child('b')).is_some());
        assert!(root.child('z').is_none());
        assert_eq!(root.node_count(), 4);
    }
}
