//! Core library for the avatar renamer.
//!
//! Provides directory scanning, rename plan construction, and sequential
//! plan execution for migrating numerically-named image files (`21.png`,
//! `22.png`, ...) into the `avatar_N.png` naming scheme, continuing from
//! the highest index already present.

pub mod error;
pub mod execute;
pub mod plan;
pub mod scan;

// Re-export main types
pub use error::{Error, Result};
pub use execute::execute;
pub use plan::{RenamePlan, RenameStep};
pub use scan::{AVATAR_PREFIX, Candidate, DirectoryScan, IMAGE_EXT};
