use std::path::{Path, PathBuf};

use compio::fs;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info, warn};

use crate::application::RuntimeConfig;
use crate::application::status::print_saved;
use crate::ext::PathExt;
use crate::filesystem::{MapWriteError, MapWriter, TreeWalker, WalkError};

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        ensure_root_directory(&app_config.root).await?;

        info!(
            "Mapping {} (error policy: {})",
            app_config.root.resolved_display(),
            app_config.error_policy
        );
        let file_map = TreeWalker::new(app_config.error_policy)
            .walk(&app_config.root)
            .context(TreeWalkSnafu)?;
        info!("Collected {} entries", file_map.len());
        if !file_map.skipped().is_empty() {
            warn!(
                "{} directories could not be read and were left out",
                file_map.skipped().len()
            );
        }

        MapWriter::write(file_map.render(""), &app_config.output)
            .await
            .context(SaveSnafu)?;
        info!("Saved file map to {}", app_config.output.resolved_display());

        print_saved(&app_config.output);
        Ok(())
    }
}

async fn ensure_root_directory(root: &Path) -> Result<(), ApplicationError> {
    match fs::metadata(root).await {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => {
            debug!("{} is not a directory", root.resolved_display());
            RootMissingSnafu { root }.fail()
        }
        Err(e) => {
            debug!("Cannot stat {}: {}", root.resolved_display(), e);
            RootMissingSnafu { root }.fail()
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display(
        "The directory '{}' does not exist or is not a directory.",
        root.display()
    ))]
    RootMissing { root: PathBuf },
    #[snafu(display("Critical failure encountered while walking the directory tree"))]
    TreeWalkError { source: WalkError },
    #[snafu(display("Critical failure encountered while saving the file map"))]
    SaveError { source: MapWriteError },
}
