//! Vocabulary loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;
use log::debug;

use crate::config::VocabularyConfig;
use crate::error::Result;

/// A duplicate-free list of words in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect words, dropping repeats.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = AHashSet::new();
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|word: &String| seen.insert(word.clone()))
            .collect();
        Vocabulary { words }
    }

    /// Load a vocabulary from a text file with one word per line.
    ///
    /// Lines are trimmed and blank lines skipped. With the default config,
    /// lines starting with `#` are treated as comments.
    pub fn load_from_file<P: AsRef<Path>>(path: P, config: &VocabularyConfig) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let mut lines = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || (config.skip_comments && word.starts_with('#')) {
                continue;
            }
            lines.push(if config.lowercase {
                word.to_lowercase()
            } else {
                word.to_string()
            });
        }

        let vocabulary = Vocabulary::from_words(lines);
        debug!(
            "loaded {} words from {}",
            vocabulary.len(),
            path.display()
        );
        Ok(vocabulary)
    }

    /// The words, in first-seen order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether there are no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
