use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::config::LineEnding;
use crate::error::Error;
use crate::logging::LogArgs;

#[derive(Debug, Parser)]
#[command(
    name = "seqgen",
    version,
    about = "Generate two random lowercase sequences as comma-separated lines"
)]
pub struct Cli {
    /// Number of letters in each sequence (positive integer)
    #[arg(allow_negative_numbers = true)]
    pub length: String,

    /// File to write the two sequences to (created or truncated)
    pub output_file: PathBuf,

    /// Seed the generator for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Line separator written after each sequence
    #[arg(long, value_enum)]
    pub line_ending: Option<LineEnding>,

    /// Configuration file path (TOML)
    #[arg(long = "config")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Usage line shown when the positional arguments are wrong.
pub fn usage(program: &str) -> String {
    format!("Usage: {} <length> <output_file>", program)
}

/// Parses the length argument, accepting only integers greater than zero.
pub fn parse_length(s: &str) -> Result<NonZeroUsize, Error> {
    let n: i128 = s
        .trim()
        .parse()
        .map_err(|e| Error::InvalidLength(format!("'{}': {}", s, e)))?;
    if n <= 0 {
        return Err(Error::InvalidLength(
            "Length must be a positive integer.".into(),
        ));
    }
    usize::try_from(n)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| Error::InvalidLength(format!("'{}' is too large", s)))
}
