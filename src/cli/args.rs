//! Command line argument parsing for the Nomina CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Nomina - canonicalize and pair genealogical personal names
#[derive(Parser, Debug, Clone)]
#[command(name = "nomina")]
#[command(about = "Canonicalize and pair genealogical personal names")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NominaArgs {
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

    /// Vocabulary file (JSON) overriding the built-in vocabularies
    #[arg(long, value_name = "VOCABULARY_FILE", env = "NOMINA_VOCABULARY")]
    pub vocabulary: Option<PathBuf>,

    /// Add the vocabulary file's entries to the built-in ones instead of
    /// replacing the fields it lists
    #[arg(long, requires = "vocabulary")]
    pub extend_vocabulary: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NominaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }

    /// Describe where the vocabulary comes from, for startup logging.
    pub fn vocabulary_source(&self) -> String {
        match &self.vocabulary {
            Some(path) if self.extend_vocabulary => {
                format!("built-in vocabulary extended by {}", path.display())
            }
            Some(path) => format!("vocabulary file {}", path.display()),
            None => "built-in vocabulary".to_string(),
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Normalize a raw name into canonical pieces
    Normalize(NormalizeArgs),

    /// Score the similarity of two pieces
    Similarity(SimilarityArgs),

    /// Normalize two name variants and pair their pieces
    Pair(PairArgs),

    /// Extract training pairs from a CSV file of name records
    Prepare(PrepareArgs),
}

/// Arguments for normalizing a name
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Raw name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Treat the name as a surname
    #[arg(short, long)]
    pub surname: bool,

    /// Keep `?` and `*` wildcard glyphs
    #[arg(short = 'w', long)]
    pub preserve_wildcards: bool,
}

/// Arguments for scoring similarity
#[derive(Parser, Debug, Clone)]
pub struct SimilarityArgs {
    #[arg(value_name = "A")]
    pub a: String,

    #[arg(value_name = "B")]
    pub b: String,
}

/// Arguments for pairing two name variants
#[derive(Parser, Debug, Clone)]
pub struct PairArgs {
    /// Name as recorded in the tree
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Name as recorded in the source record
    #[arg(value_name = "ALT_NAME")]
    pub alt_name: String,

    /// Treat both names as surnames
    #[arg(short, long)]
    pub surname: bool,
}

/// Arguments for bulk training-pair extraction
#[derive(Parser, Debug, Clone)]
pub struct PrepareArgs {
    /// CSV file with name, alt_name and optional frequency columns
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Write pairs to this CSV file instead of standard output
    #[arg(short, long, value_name = "OUTPUT_CSV")]
    pub output: Option<PathBuf>,

    /// Treat the names as surnames
    #[arg(short, long)]
    pub surname: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
