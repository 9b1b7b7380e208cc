//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, RanseurArgs};
use crate::error::Result;
use crate::trie::FuzzyMatch;

/// Rendering of a result for people rather than programs.
pub trait HumanOutput {
    /// Lines to print in human-readable mode.
    fn human_lines(&self) -> Vec<String>;
}

/// Result structure for exact lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExactResults {
    pub vocabulary_size: usize,
    pub lookups: Vec<ExactLookup>,
}

/// Outcome of one exact lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExactLookup {
    pub word: String,
    pub found: bool,
    /// Longest prefix of `word` present in the trie.
    pub longest_prefix: String,
}

/// Result structure for prefix and wildcard queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordResults {
    pub query: String,
    pub words: Vec<String>,
    pub total_matches: usize,
    pub duration_ms: u64,
}

/// Result structure for fuzzy, BK-tree and nearest-neighbour queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResults {
    pub query: String,
    pub metric: String,
    pub max_distance: Option<usize>,
    pub matches: Vec<FuzzyMatch>,
    pub total_matches: usize,
    pub duration_ms: u64,
}

/// Result structure for a single distance computation.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub a: String,
    pub b: String,
    pub metric: String,
    /// `None` when the metric is undefined for the pair or the bound was exceeded.
    pub distance: Option<usize>,
    /// Upper bound requested with `--max`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
}

impl HumanOutput for ExactResults {
    fn human_lines(&self) -> Vec<String> {
        self.lookups
            .iter()
            .map(|lookup| {
                if lookup.found {
                    format!("{}: found", lookup.word)
                } else {
                    format!(
                        "{}: not found (longest stored prefix: {:?})",
                        lookup.word, lookup.longest_prefix
                    )
                }
            })
            .collect()
    }
}

impl HumanOutput for WordResults {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = self.words.clone();
        if self.total_matches > self.words.len() {
            lines.push(format!(
                "... {} more",
                self.total_matches - self.words.len()
            ));
        }
        if lines.is_empty() {
            lines.push(format!("No words match {:?}", self.query));
        }
        lines
    }
}

impl HumanOutput for MatchResults {
    fn human_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .matches
            .iter()
            .map(|m| format!("{}\t{}", m.distance, m.word))
            .collect();
        if self.total_matches > self.matches.len() {
            lines.push(format!(
                "... {} more",
                self.total_matches - self.matches.len()
            ));
        }
        if lines.is_empty() {
            lines.push(format!("No words near {:?}", self.query));
        }
        lines
    }
}

impl HumanOutput for DistanceResult {
    fn human_lines(&self) -> Vec<String> {
        match (self.distance, self.max) {
            (Some(distance), _) => vec![distance.to_string()],
            (None, Some(max)) => vec![format!("{} distance exceeds {max}", self.metric)],
            (None, None) => vec![format!(
                "{} distance is undefined for strings of different lengths",
                self.metric
            )],
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &RanseurArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &RanseurArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    for line in result.human_lines() {
        println!("{line}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &RanseurArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_results_human() {
        let results = MatchResults {
            query: "hklo".to_string(),
            metric: "levenshtein".to_string(),
            max_distance: Some(2),
            matches: vec![FuzzyMatch::new("hallo", 2), FuzzyMatch::new("hell", 2)],
            total_matches: 3,
            duration_ms: 0,
        };
        assert_eq!(
            results.human_lines(),
            vec!["2\thallo", "2\thell", "... 1 more"]
        );
    }

    #[test]
    fn test_empty_results_human() {
        let results = WordResults {
            query: "z*".to_string(),
            words: vec![],
            total_matches: 0,
            duration_ms: 0,
        };
        assert_eq!(results.human_lines(), vec!["No words match \"z*\""]);
    }

    #[test]
    fn test_distance_result_json() {
        let result = DistanceResult {
            a: "abc".to_string(),
            b: "ab".to_string(),
            metric: "hamming".to_string(),
            distance: None,
            max: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["distance"], serde_json::Value::Null);
        assert!(json.get("max").is_none());
        assert_eq!(result.human_lines().len(), 1);
    }

    #[test]
    fn test_bounded_distance_human() {
        let result = DistanceResult {
            a: "kitten".to_string(),
            b: "sitting".to_string(),
            metric: "levenshtein".to_string(),
            distance: None,
            max: Some(2),
        };
        assert_eq!(result.human_lines(), vec!["levenshtein distance exceeds 2"]);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["max"], 2);
    }

    #[test]
    fn test_exact_results_human() {
        let results = ExactResults {
            vocabulary_size: 2,
            lookups: vec![
                ExactLookup {
                    word: "bell".to_string(),
                    found: true,
                    longest_prefix: "bell".to_string(),
                },
                ExactLookup {
                    word: "belt".to_string(),
                    found: false,
                    longest_prefix: "bel".to_string(),
                },
            ],
        };
        assert_eq!(
            results.human_lines(),
            vec![
                "bell: found",
                "belt: not found (longest stored prefix: \"bel\")"
            ]
        );
    }
}
