use std::path::{Path, PathBuf};

use compio::fs::File;
use compio::io::AsyncWriteAtExt;
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::PathExt;

pub struct MapWriter;

impl MapWriter {
    /// Replaces the contents of `output` with `contents`, creating the file
    /// if needed. Parent directories are not created.
    pub async fn write(contents: String, output: &Path) -> Result<(), MapWriteError> {
        debug!("Opening output file: {}", output.resolved_display());
        let mut file = File::create(output)
            .await
            .context(CreateSnafu { path: output })?;

        let res = file.write_all_at(contents.into_bytes(), 0).await;
        match res.0 {
            Ok(()) => debug!("Wrote {} bytes", res.1.len()),
            Err(source) => return Err(source).context(WriteSnafu { path: output }),
        }

        file.close().await.context(CloseSnafu { path: output })
    }
}

#[derive(Debug, Snafu)]
pub enum MapWriteError {
    #[snafu(display("Failed to create output file: {}", path.resolved_display()))]
    CreateError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to write output file: {}", path.resolved_display()))]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to close output file: {}", path.resolved_display()))]
    CloseError {
        path: PathBuf,
        source: std::io::Error,
    },
}
