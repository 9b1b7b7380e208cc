//! Configuration for vocabulary loading and search defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RanseurError, Result};
use crate::util::distance::DistanceMetric;

/// Configuration for fuzzy searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Metric used by trie fuzzy search.
    pub metric: DistanceMetric,
    /// Maximum distance for fuzzy and BK-tree searches.
    pub max_distance: usize,
    /// Maximum number of results to report (0 means unlimited).
    pub max_results: usize,
    /// Whether to order results by distance, then alphabetically.
    pub sort_results: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            metric: DistanceMetric::Levenshtein,
            max_distance: 2,
            max_results: 0,
            sort_results: true,
        }
    }
}

impl SearchConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SearchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values no search can use.
    pub fn validate(&self) -> Result<()> {
        if self.max_distance > 64 {
            return Err(RanseurError::config(format!(
                "max_distance {} is larger than the supported maximum of 64",
                self.max_distance
            )));
        }
        Ok(())
    }
}

/// Configuration for reading vocabulary files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Lowercase every word before storing it.
    pub lowercase: bool,
    /// Skip lines starting with `#`.
    pub skip_comments: bool,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        VocabularyConfig {
            lowercase: false,
            skip_comments: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.metric, DistanceMetric::Levenshtein);
        assert_eq!(config.max_distance, 2);
        assert!(config.sort_results);

        let vocabulary = VocabularyConfig::default();
        assert!(!vocabulary.lowercase);
        assert!(vocabulary.skip_comments);
    }

    #[test]
    fn test_partial_json() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"metric": "hamming", "max_distance": 1}"#).unwrap();
        assert_eq!(config.metric, DistanceMetric::Hamming);
        assert_eq!(config.max_distance, 1);
        assert_eq!(config.max_results, 0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"max_distance": 3, "sort_results": false}}"#).unwrap();

        let config = SearchConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.max_distance, 3);
        assert!(!config.sort_results);
    }

    #[test]
    fn test_invalid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"max_distance": 1000}}"#).unwrap();
        assert!(matches!(
            SearchConfig::load_from_file(file.path()),
            Err(RanseurError::Config(_))
        ));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        assert!(matches!(
            SearchConfig::load_from_file(file.path()),
            Err(RanseurError::Json(_))
        ));
    }
}
