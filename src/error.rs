use std::path::PathBuf;

use thiserror::Error;

/// Errors from the fallible edges of the crate. Key processing itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
