//! Command-line argument definitions

use clap::Parser;
use matterfmt::DEFAULT_SUFFIX;
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser, Debug)]
#[command(
    name = "matterfmt",
    version,
    about = "Normalize YAML front matter of markdown posts into a canonical layout",
    long_about = "matterfmt rewrites the front matter of each markdown file with the keys \
                  draft, date, lastmod, cover, title, categories and tags in a fixed order, \
                  fills in defaults, and comments out unknown keys. Results are written next \
                  to the source as <file>.dst.md. Paths are read from stdin, one per line, \
                  unless given as arguments. Set LOG_LEVEL to change log verbosity."
)]
pub struct Cli {
    /// Files or directories to convert (default: read paths from stdin)
    pub paths: Vec<PathBuf>,

    /// Suffix appended to each source path to name the output file
    #[arg(long, value_name = "SUFFIX", default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Print converted documents to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
