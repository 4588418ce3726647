//! Run configuration, fixed before conversion starts.

use crate::converter::ConvertOptions;
use std::path::{Path, PathBuf};

/// Extension of the files we write.
pub const OUTPUT_EXTENSION: &str = "qif";

/// Everything a conversion run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV file to read
    pub input_path: PathBuf,

    /// QIF file to write
    pub output_path: PathBuf,

    /// Row handling and memo options
    pub options: ConvertOptions,
}

impl Config {
    /// Builds a config, deriving the output path from the input when absent.
    pub fn new(input_path: PathBuf, output_path: Option<PathBuf>, options: ConvertOptions) -> Self {
        let output_path = output_path.unwrap_or_else(|| default_output_path(&input_path));
        Config {
            input_path,
            output_path,
            options,
        }
    }
}

/// The input path with its extension replaced by `.qif`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}
