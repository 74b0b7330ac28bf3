use std::io;

/// Failures that abort a render. Parsing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("input nested too deeply (limit {limit})")]
    TooDeep { limit: usize },

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
