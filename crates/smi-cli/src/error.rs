//! CLI error types.

use std::path::PathBuf;

use smi_core::RenderError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
