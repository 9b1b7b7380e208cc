//! Wildcard pattern search over a [`Trie`].
//!
//! Supports the following wildcards:
//! - `*` matches zero or more characters
//! - `?` matches exactly one character
//!
//! Every other character, backslash included, is a literal. Patterns built
//! with [`WildcardPattern::parse_escaped`] additionally treat `\*`, `\?` and
//! `\\` as literal `*`, `?` and `\`.

use std::collections::HashSet;

use ahash::AHashSet;
use log::trace;
use regex::Regex;

use crate::error::{RanseurError, Result};
use crate::trie::node::TrieNode;
use crate::trie::prefix::Trie;

/// One element of a parsed wildcard pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternToken {
    /// A symbol that must match exactly.
    Literal(char),
    /// `?`: exactly one arbitrary symbol.
    AnyOne,
    /// `*`: zero or more arbitrary symbols.
    AnyRun,
}

/// A parsed wildcard pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    source: String,
    tokens: Vec<PatternToken>,
}

impl WildcardPattern {
    /// Parse a wildcard pattern. Only `?` and `*` are special; runs of
    /// consecutive `*` collapse into one.
    pub fn parse(pattern: &str) -> Self {
        Self::parse_with(pattern, false)
    }

    /// Parse a wildcard pattern in which a backslash escapes the next
    /// character. A trailing lone backslash is a literal backslash.
    pub fn parse_escaped(pattern: &str) -> Self {
        Self::parse_with(pattern, true)
    }

    fn parse_with(pattern: &str, escapes: bool) -> Self {
        let mut tokens = Vec::new();
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            let token = match c {
                '\\' if escapes => PatternToken::Literal(chars.next().unwrap_or('\\')),
                '?' => PatternToken::AnyOne,
                '*' => {
                    if tokens.last() == Some(&PatternToken::AnyRun) {
                        continue;
                    }
                    PatternToken::AnyRun
                }
                c => PatternToken::Literal(c),
            };
            tokens.push(token);
        }

        WildcardPattern {
            source: pattern.to_string(),
            tokens,
        }
    }

    /// Get the pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Get the parsed tokens.
    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// Whether the pattern contains any wildcard.
    pub fn has_wildcards(&self) -> bool {
        self.tokens
            .iter()
            .any(|token| !matches!(token, PatternToken::Literal(_)))
    }

    /// Compile the pattern into an anchored regex.
    pub fn to_regex(&self) -> Result<Regex> {
        let mut regex_pattern = String::from("^");

        for token in &self.tokens {
            match token {
                PatternToken::Literal(c) => {
                    regex_pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])))
                }
                PatternToken::AnyOne => regex_pattern.push('.'),
                PatternToken::AnyRun => regex_pattern.push_str(".*"),
            }
        }

        regex_pattern.push('$');

        // (?s) lets `.` match newlines like any other symbol.
        Regex::new(&format!("(?s){regex_pattern}")).map_err(|e| {
            RanseurError::invalid_input(format!("Invalid wildcard pattern: {e}"))
        })
    }

    /// Compile the pattern once for checking many single words.
    pub fn matcher(&self) -> Result<WildcardMatcher> {
        Ok(WildcardMatcher {
            regex: self.to_regex()?,
        })
    }
}

/// A compiled [`WildcardPattern`] for checking words one at a time.
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    regex: Regex,
}

impl WildcardMatcher {
    /// Check a single word against the pattern.
    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }
}

impl Trie {
    /// Return every stored word matching `pattern`.
    ///
    /// The traversal is an explicit-stack DFS over `(node, position)` pairs.
    /// A word is accepted only when a terminal node is reached exactly as the
    /// pattern is exhausted.
    pub fn wildcard_search(&self, pattern: &WildcardPattern) -> HashSet<String> {
        let tokens = pattern.tokens();
        let mut results = HashSet::new();
        let mut visited: AHashSet<(*const TrieNode, usize)> = AHashSet::new();
        let mut stack: Vec<(&TrieNode, usize)> = vec![(self.root(), 0)];

        while let Some((node, position)) = stack.pop() {
            if !visited.insert((node as *const TrieNode, position)) {
                continue;
            }

            let Some(token) = tokens.get(position) else {
                if let Some(word) = node.word() {
                    results.insert(word.to_string());
                }
                continue;
            };

            match *token {
                PatternToken::Literal(symbol) => {
                    if let Some(child) = node.child(symbol) {
                        stack.push((child, position + 1));
                    }
                }
                PatternToken::AnyOne => {
                    stack.extend(node.children().map(|(_, child)| (child, position + 1)));
                }
                PatternToken::AnyRun => {
                    // Zero more symbols under this star.
                    stack.push((node, position + 1));
                    // One more symbol, staying on the star.
                    stack.extend(node.children().map(|(_, child)| (child, position)));
                }
            }
        }

        trace!(
            "wildcard pattern {:?} matched {} words",
            pattern.as_str(),
            results.len()
        );
        results
    }

    /// Parse `pattern` and run [`Trie::wildcard_search`].
    pub fn wildcard_search_str(&self, pattern: &str) -> HashSet<String> {
        self.wildcard_search(&WildcardPattern::parse(pattern))
    }
}
