use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ErrorPolicy, LogLevel};

/// Writes an indented listing of a directory tree to a text file.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Directory whose contents are listed
    #[clap(long, short, default_value = "lib")]
    pub root: PathBuf,

    /// File the listing is written to, replacing any previous content
    #[clap(long, short, default_value = "file_map.txt")]
    pub output: PathBuf,

    /// What to do with subdirectories that cannot be read
    #[clap(long, short = 'e', default_value = "abort", value_enum)]
    pub on_error: ErrorPolicy,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
