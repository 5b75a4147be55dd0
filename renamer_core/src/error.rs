//! Error types for the renamer core library.
//!
//! Only filesystem operations can fail; filename parse failures are never
//! errors (unparseable entries are skipped during scanning).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the renamer core library
#[derive(Error, Debug)]
pub enum Error {
    /// The target directory could not be listed
    #[error("failed to read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A rename operation failed (target occupied, permission denied, ...)
    #[error("failed to rename '{}' -> '{}': {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}
