//! Command line argument parsing for the lexnorm CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ResourceConfig;
use crate::error::Result;

/// lexnorm - normalize free-text survey answers about professions
#[derive(Parser, Debug, Clone)]
#[command(name = "lexnorm")]
#[command(about = "Normalize free-text survey answers into comparable lemma sets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexnormArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexnormArgs {
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
    /// Normalize one column of a CSV file and write the augmented table
    Normalize(NormalizeArgs),

    /// Show spelling corrections and candidates for words
    Correct(CorrectArgs),

    /// Show the full derived record of a single answer
    Analyze(AnalyzeArgs),
}

/// Resource locations. Flags override the values of `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct ResourceArgs {
    /// Resource configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LEXNORM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Term frequency dictionary ("term count" per line)
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Abbreviation table (";"-separated CSV)
    #[arg(long, value_name = "FILE")]
    pub abbreviations: Option<PathBuf>,

    /// Morphology lexicon (surface<TAB>lemma<TAB>tags)
    #[arg(long, value_name = "FILE")]
    pub morphology: Option<PathBuf>,

    /// Base stop word list
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Extra stop word list
    #[arg(long, value_name = "FILE")]
    pub extra_stopwords: Option<PathBuf>,

    /// Negation keyword list
    #[arg(long, value_name = "FILE")]
    pub negations: Option<PathBuf>,

    /// Past/future marker list
    #[arg(long, value_name = "FILE")]
    pub temporal_markers: Option<PathBuf>,
}

impl ResourceArgs {
    /// Resolve the effective configuration.
    pub fn resolve(&self) -> Result<ResourceConfig> {
        let mut config = match &self.config {
            Some(path) => ResourceConfig::from_file(path)?,
            None => ResourceConfig::default(),
        };

        override_path(&mut config.dictionary_path, &self.dictionary);
        override_path(&mut config.abbreviations_path, &self.abbreviations);
        override_path(&mut config.morphology_path, &self.morphology);
        override_path(&mut config.stopwords_path, &self.stopwords);
        override_path(&mut config.extra_stopwords_path, &self.extra_stopwords);
        override_path(&mut config.negations_path, &self.negations);
        override_path(&mut config.temporal_markers_path, &self.temporal_markers);

        Ok(config)
    }
}

fn override_path(target: &mut Option<PathBuf>, value: &Option<PathBuf>) {
    if let Some(path) = value {
        *target = Some(path.clone());
    }
}

/// Arguments for normalizing a CSV file
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Input CSV file with a header row
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Name of the free-text column
    #[arg(short = 'C', long, value_name = "COLUMN")]
    pub column: String,

    /// Field delimiter of the input and output files
    #[arg(short, long, default_value = ",")]
    pub delimiter: char,

    /// Process rows in parallel
    #[arg(short, long)]
    pub parallel: bool,

    #[command(flatten)]
    pub resources: ResourceArgs,
}

/// Arguments for spelling diagnostics
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Words to correct
    #[arg(value_name = "WORDS", required = true)]
    pub words: Vec<String>,

    /// Show every candidate, not only the selected correction
    #[arg(short, long)]
    pub all: bool,

    #[command(flatten)]
    pub resources: ResourceArgs,
}

/// Arguments for analyzing a single answer
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// The raw answer text
    #[arg(value_name = "ANSWER")]
    pub answer: String,

    #[command(flatten)]
    pub resources: ResourceArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
