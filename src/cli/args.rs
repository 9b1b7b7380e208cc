//! Command line argument parsing for Ranseur CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::VocabularyConfig;
use crate::util::distance::DistanceMetric;

/// Ranseur - approximate string search over tries and BK-trees
#[derive(Parser, Debug, Clone)]
#[command(name = "ranseur")]
#[command(about = "Exact, wildcard and fuzzy lookup over a word list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RanseurArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Search configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "RANSEUR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RanseurArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check whether words are in the vocabulary
    Exact(ExactArgs),

    /// List vocabulary words starting with a prefix
    Prefix(PrefixArgs),

    /// Match a `?`/`*` pattern against the vocabulary
    Wildcard(WildcardArgs),

    /// Find words within a Hamming or Levenshtein distance using the trie
    Fuzzy(FuzzyArgs),

    /// Find words within an edit distance using a BK-tree
    Bk(BkArgs),

    /// Find the closest words using a BK-tree
    Nearest(NearestArgs),

    /// Compute the distance between two strings
    Distance(DistanceArgs),
}

/// Where to read the vocabulary from.
#[derive(Args, Debug, Clone)]
pub struct VocabularyArgs {
    /// Word list file, one word per line
    #[arg(value_name = "VOCABULARY")]
    pub vocabulary: PathBuf,

    /// Lowercase words while loading
    #[arg(long)]
    pub lowercase: bool,

    /// Keep lines starting with '#' instead of skipping them
    #[arg(long)]
    pub keep_comments: bool,
}

impl VocabularyArgs {
    /// Loader configuration implied by the flags.
    pub fn vocabulary_config(&self) -> VocabularyConfig {
        VocabularyConfig {
            lowercase: self.lowercase,
            skip_comments: !self.keep_comments,
        }
    }
}

/// Arguments for exact lookup
#[derive(Parser, Debug, Clone)]
pub struct ExactArgs {
    #[command(flatten)]
    pub source: VocabularyArgs,

    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for prefix completion
#[derive(Parser, Debug, Clone)]
pub struct PrefixArgs {
    #[command(flatten)]
    pub source: VocabularyArgs,

    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Maximum number of results to return (0 = unlimited)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for wildcard search
#[derive(Parser, Debug, Clone)]
pub struct WildcardArgs {
    #[command(flatten)]
    pub source: VocabularyArgs,

    /// Pattern; '?' matches one symbol, '*' matches any run
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Treat '\' as an escape so '\*' and '\?' match literally
    #[arg(short, long)]
    pub escapes: bool,

    /// Maximum number of results to return (0 = unlimited)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for trie fuzzy search
#[derive(Parser, Debug, Clone)]
pub struct FuzzyArgs {
    #[command(flatten)]
    pub source: VocabularyArgs,

    /// Query word
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum distance
    #[arg(short = 'd', long, env = "RANSEUR_MAX_DISTANCE")]
    pub max_distance: Option<usize>,

    /// Distance metric
    #[arg(short, long)]
    pub metric: Option<MetricArg>,

    /// Maximum number of results to return (0 = unlimited)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for BK-tree range search
#[derive(Parser, Debug, Clone)]
pub struct BkArgs {
    #[command(flatten)]
    pub source: VocabularyArgs,

    /// Query word
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum edit distance
    #[arg(short = 'd', long, env = "RANSEUR_MAX_DISTANCE")]
    pub max_distance: Option<usize>,

    /// Maximum number of results to return (0 = unlimited)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for nearest-neighbour lookup
#[derive(Parser, Debug, Clone)]
pub struct NearestArgs {
    #[command(flatten)]
    pub source: VocabularyArgs,

    /// Query word
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Number of neighbours to return
    #[arg(short, long, default_value = "5")]
    pub limit: usize,
}

/// Arguments for computing a distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First string
    #[arg(value_name = "A")]
    pub a: String,

    /// Second string
    #[arg(value_name = "B")]
    pub b: String,

    /// Distance metric
    #[arg(short, long, default_value = "levenshtein")]
    pub metric: MetricArg,

    /// Stop early once the edit distance is known to exceed this bound
    #[arg(long, value_name = "MAX")]
    pub max: Option<usize>,
}

/// Distance metrics selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricArg {
    /// Positional mismatches (equal lengths only)
    Hamming,
    /// Edit distance
    Levenshtein,
}

impl From<MetricArg> for DistanceMetric {
    fn from(metric: MetricArg) -> Self {
        match metric {
            MetricArg::Hamming => DistanceMetric::Hamming,
            MetricArg::Levenshtein => DistanceMetric::Levenshtein,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
