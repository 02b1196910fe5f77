use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Conversion failure. Every variant ends the run; nothing is retried and
/// output already written stays on disk.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Missing {}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write {}", path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read source: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write destination: {0}")]
    Write(#[source] io::Error),
}
