//! # Ranseur
//!
//! Approximate string search over a static vocabulary.
//!
//! ## Features
//!
//! - Character trie with exact lookup and longest-prefix queries
//! - Wildcard search with `?` and `*`
//! - Hamming and Levenshtein bounded fuzzy search driven by the trie
//! - BK-tree range and nearest-neighbour queries over any metric
//!
//! Structures are built once and then queried read-only; none of them
//! supports removal.

pub mod bktree;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod trie;
pub mod util;
pub mod vocabulary;

pub mod prelude {
    pub use crate::bktree::BkTree;
    pub use crate::error::{RanseurError, Result};
    pub use crate::trie::{FuzzyMatch, Trie, WildcardPattern};
    pub use crate::util::distance::{DistanceMetric, Levenshtein, Metric};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
