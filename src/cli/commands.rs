//! Command implementations for Ranseur CLI.

use std::time::Instant;

use log::{debug, info};

use crate::bktree::BkTree;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SearchConfig;
use crate::error::{RanseurError, Result};
use crate::trie::{FuzzyMatch, Trie, WildcardPattern, sort_matches};
use crate::util::distance::{DistanceMetric, Levenshtein, levenshtein_distance_threshold};
use crate::vocabulary::Vocabulary;

/// Execute a CLI command.
pub fn execute_command(args: RanseurArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Exact(exact_args) => exact_lookup(exact_args, &args),
        Command::Prefix(prefix_args) => prefix_search(prefix_args, &config, &args),
        Command::Wildcard(wildcard_args) => wildcard_search(wildcard_args, &config, &args),
        Command::Fuzzy(fuzzy_args) => fuzzy_search(fuzzy_args, &config, &args),
        Command::Bk(bk_args) => bk_search(bk_args, &config, &args),
        Command::Nearest(nearest_args) => nearest_search(nearest_args, &args),
        Command::Distance(distance_args) => compute_distance(distance_args, &args),
    }
}

fn load_config(args: &RanseurArgs) -> Result<SearchConfig> {
    match &args.config {
        Some(path) => {
            debug!("loading search configuration from {}", path.display());
            SearchConfig::load_from_file(path)
        }
        None => Ok(SearchConfig::default()),
    }
}

/// Command-line maximum distance layered over the configuration, validated.
fn effective_max_distance(flag: Option<usize>, config: &SearchConfig) -> Result<usize> {
    let merged = SearchConfig {
        max_distance: flag.unwrap_or(config.max_distance),
        ..config.clone()
    };
    merged.validate()?;
    Ok(merged.max_distance)
}

fn load_vocabulary(source: &VocabularyArgs) -> Result<Vocabulary> {
    let vocabulary = Vocabulary::load_from_file(&source.vocabulary, &source.vocabulary_config())?;
    info!(
        "loaded {} words from {}",
        vocabulary.len(),
        source.vocabulary.display()
    );
    Ok(vocabulary)
}

/// Apply the configured result limit; `0` means unlimited.
fn truncate<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    if limit > 0 {
        items.truncate(limit);
    }
    items
}

fn ordered_matches(
    matches: impl IntoIterator<Item = FuzzyMatch>,
    config: &SearchConfig,
) -> Vec<FuzzyMatch> {
    if config.sort_results {
        sort_matches(matches)
    } else {
        matches.into_iter().collect()
    }
}

/// Look up words exactly.
fn exact_lookup(args: &ExactArgs, cli_args: &RanseurArgs) -> Result<()> {
    let vocabulary = load_vocabulary(&args.source)?;
    let trie = Trie::build(&vocabulary);

    let lookups = args
        .words
        .iter()
        .map(|word| ExactLookup {
            word: word.clone(),
            found: trie.contains(word),
            longest_prefix: trie.find_longest_prefix(word),
        })
        .collect();

    output_result(
        "Exact lookup",
        &ExactResults {
            vocabulary_size: trie.len(),
            lookups,
        },
        cli_args,
    )
}

/// Complete a prefix from the vocabulary.
fn prefix_search(args: &PrefixArgs, config: &SearchConfig, cli_args: &RanseurArgs) -> Result<()> {
    let vocabulary = load_vocabulary(&args.source)?;
    let trie = Trie::build(&vocabulary);

    let start_time = Instant::now();
    let words = trie.words_with_prefix(&args.prefix);
    let duration = start_time.elapsed();

    let total_matches = words.len();
    output_result(
        &format!("Words starting with {:?}", args.prefix),
        &WordResults {
            query: args.prefix.clone(),
            words: truncate(words, args.limit.unwrap_or(config.max_results)),
            total_matches,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Match a wildcard pattern.
fn wildcard_search(
    args: &WildcardArgs,
    config: &SearchConfig,
    cli_args: &RanseurArgs,
) -> Result<()> {
    let vocabulary = load_vocabulary(&args.source)?;
    let trie = Trie::build(&vocabulary);
    let pattern = if args.escapes {
        WildcardPattern::parse_escaped(&args.pattern)
    } else {
        WildcardPattern::parse(&args.pattern)
    };

    let start_time = Instant::now();
    let mut words: Vec<String> = trie.wildcard_search(&pattern).into_iter().collect();
    let duration = start_time.elapsed();

    if config.sort_results {
        words.sort();
    }

    let total_matches = words.len();
    output_result(
        &format!("Words matching {:?}", args.pattern),
        &WordResults {
            query: args.pattern.clone(),
            words: truncate(words, args.limit.unwrap_or(config.max_results)),
            total_matches,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Trie-driven fuzzy search.
fn fuzzy_search(args: &FuzzyArgs, config: &SearchConfig, cli_args: &RanseurArgs) -> Result<()> {
    let vocabulary = load_vocabulary(&args.source)?;
    let trie = Trie::build(&vocabulary);
    let metric = args.metric.map(DistanceMetric::from).unwrap_or(config.metric);
    let max_distance = effective_max_distance(args.max_distance, config)?;

    let start_time = Instant::now();
    let found = trie.fuzzy_search(&args.word, max_distance, metric);
    let duration = start_time.elapsed();

    let total_matches = found.len();
    output_result(
        &format!("Words within {} {} of {:?}", max_distance, metric.name(), args.word),
        &MatchResults {
            query: args.word.clone(),
            metric: metric.name().to_string(),
            max_distance: Some(max_distance),
            matches: truncate(
                ordered_matches(found, config),
                args.limit.unwrap_or(config.max_results),
            ),
            total_matches,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// BK-tree range search.
fn bk_search(args: &BkArgs, config: &SearchConfig, cli_args: &RanseurArgs) -> Result<()> {
    let vocabulary = load_vocabulary(&args.source)?;
    let tree = BkTree::build(&vocabulary, Levenshtein);
    let max_distance = effective_max_distance(args.max_distance, config)?;

    let start_time = Instant::now();
    let found = tree.search(&args.word, max_distance)?;
    let duration = start_time.elapsed();

    let total_matches = found.len();
    output_result(
        &format!("Words within edit distance {} of {:?}", max_distance, args.word),
        &MatchResults {
            query: args.word.clone(),
            metric: DistanceMetric::Levenshtein.name().to_string(),
            max_distance: Some(max_distance),
            matches: truncate(
                ordered_matches(found, config),
                args.limit.unwrap_or(config.max_results),
            ),
            total_matches,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// BK-tree nearest-neighbour lookup.
fn nearest_search(args: &NearestArgs, cli_args: &RanseurArgs) -> Result<()> {
    let vocabulary = load_vocabulary(&args.source)?;
    let tree = BkTree::build(&vocabulary, Levenshtein);

    let start_time = Instant::now();
    let nearest = tree.find_nearest(&args.word, args.limit)?;
    let duration = start_time.elapsed();

    output_result(
        &format!("Nearest words to {:?}", args.word),
        &MatchResults {
            query: args.word.clone(),
            metric: DistanceMetric::Levenshtein.name().to_string(),
            max_distance: None,
            total_matches: nearest.len(),
            matches: nearest,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Distance between two strings.
fn compute_distance(args: &DistanceArgs, cli_args: &RanseurArgs) -> Result<()> {
    let metric = DistanceMetric::from(args.metric);
    let distance = match (metric, args.max) {
        (DistanceMetric::Levenshtein, Some(max)) => {
            levenshtein_distance_threshold(&args.a, &args.b, max)
        }
        (DistanceMetric::Hamming, Some(_)) => {
            return Err(RanseurError::invalid_input(
                "--max applies to the levenshtein metric only",
            ));
        }
        (_, None) => metric.distance(&args.a, &args.b),
    };

    output_result(
        &format!("{} distance", metric.name()),
        &DistanceResult {
            a: args.a.clone(),
            b: args.b.clone(),
            metric: metric.name().to_string(),
            distance,
            max: args.max,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn vocabulary_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in ["hello", "hallo", "leetcode", "hell", "bell"] {
            writeln!(file, "{word}").unwrap();
        }
        file
    }

    fn run(argv: &[&str]) -> Result<()> {
        execute_command(RanseurArgs::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_commands_run() {
        let file = vocabulary_file();
        let path = file.path().to_str().unwrap();

        run(&["ranseur", "-q", "exact", path, "hello", "help"]).unwrap();
        run(&["ranseur", "-q", "prefix", path, "he"]).unwrap();
        run(&["ranseur", "-q", "wildcard", path, "h?ll*"]).unwrap();
        run(&["ranseur", "-q", "-f", "json", "fuzzy", path, "hklo", "-d", "3"]).unwrap();
        run(&["ranseur", "-q", "bk", path, "hhllo", "-d", "1"]).unwrap();
        run(&["ranseur", "-q", "nearest", path, "helo", "-l", "2"]).unwrap();
        run(&["ranseur", "-q", "distance", "kitten", "sitting"]).unwrap();
        run(&["ranseur", "-q", "distance", "kitten", "sitting", "--max", "2"]).unwrap();
        run(&["ranseur", "-q", "wildcard", path, r"h\?ll*", "--escapes"]).unwrap();
    }

    #[test]
    fn test_distance_bound_needs_levenshtein() {
        let result = run(&[
            "ranseur", "-q", "distance", "ab", "ac", "--metric", "hamming", "--max", "1",
        ]);
        assert!(matches!(result, Err(RanseurError::InvalidInput(_))));
    }

    #[test]
    fn test_max_distance_flag_is_validated() {
        let file = vocabulary_file();
        let path = file.path().to_str().unwrap();

        let result = run(&["ranseur", "-q", "fuzzy", path, "hello", "-d", "1000"]);
        assert!(matches!(result, Err(RanseurError::Config(_))));

        let result = run(&["ranseur", "-q", "bk", path, "hello", "-d", "65"]);
        assert!(matches!(result, Err(RanseurError::Config(_))));

        run(&["ranseur", "-q", "bk", path, "hello", "-d", "64"]).unwrap();
    }

    #[test]
    fn test_effective_max_distance() {
        let config = SearchConfig::default();
        assert_eq!(effective_max_distance(None, &config).unwrap(), config.max_distance);
        assert_eq!(effective_max_distance(Some(0), &config).unwrap(), 0);
        assert!(effective_max_distance(Some(1000), &config).is_err());
    }

    #[test]
    fn test_bk_search_on_empty_vocabulary() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let result = run(&["ranseur", "-q", "bk", path, "hello"]);
        assert!(matches!(result, Err(RanseurError::EmptyTree)));
    }

    #[test]
    fn test_missing_vocabulary() {
        let result = run(&["ranseur", "-q", "wildcard", "/nonexistent/words.txt", "*"]);
        assert!(matches!(result, Err(RanseurError::Io(_))));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(vec![1, 2, 3], 0), vec![1, 2, 3]);
        assert_eq!(truncate(vec![1, 2, 3], 2), vec![1, 2]);
    }
}
