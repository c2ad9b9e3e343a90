use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an os-release file.
#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure on caller-supplied input that has no path.
    #[error("failed to read os-release input: {0}")]
    Read(#[source] std::io::Error),

    #[error("line {line_number}: expected KEY=VALUE, got {line:?}")]
    Parse { line_number: usize, line: String },
}

impl ReleaseError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(line_number: usize, line: impl Into<String>) -> Self {
        Self::Parse {
            line_number,
            line: line.into(),
        }
    }
}
