//! Host-level failures of the CLI.

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot read '{path}': {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
}
