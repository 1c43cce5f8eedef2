use std::path::PathBuf;

use crate::application::data::ErrorPolicy;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub output: PathBuf,
    pub error_policy: ErrorPolicy,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            output: cli.output,
            error_policy: cli.on_error,
        }
    }
}
