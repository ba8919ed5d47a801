use std::io;
use std::path::PathBuf;

/// Fatal input errors. Anything else a run can hit is recoverable.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Error: File '{}' not found.", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: Cannot read file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
