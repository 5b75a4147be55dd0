//! Rename plan construction.
//!
//! A plan pairs each candidate, in ascending numeric order, with its
//! sequential `avatar_N.png` target name. Targets depend only on the
//! start index and the candidate's position, never on the outcome of
//! earlier renames.

use crate::scan::{AVATAR_PREFIX, DirectoryScan, IMAGE_EXT};

/// A single planned rename, filenames only (no directory component)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameStep {
    /// Original filename, e.g. `9.png`
    pub source: String,
    /// Target filename, e.g. `avatar_3.png`
    pub target: String,
}

/// Ordered sequence of renames derived from one directory scan
#[derive(Debug, Clone)]
pub struct RenamePlan {
    start_index: u64,
    steps: Vec<RenameStep>,
}

impl RenamePlan {
    /// Build the plan for a scan: candidate `i` (0-based, sorted) is
    /// assigned the target `avatar_<start_index + i>.png`.
    pub fn build(scan: &DirectoryScan) -> Self {
        let start_index = scan.start_index();
        let steps = scan
            .candidates()
            .into_iter()
            .enumerate()
            .map(|(i, candidate)| RenameStep {
                source: candidate.name,
                target: format!("{AVATAR_PREFIX}{}{IMAGE_EXT}", start_index + i as u64),
            })
            .collect();

        Self { start_index, steps }
    }

    /// First index assigned by this plan
    pub fn start_index(&self) -> u64 {
        self.start_index
    }

    /// Planned renames, in execution order
    pub fn steps(&self) -> &[RenameStep] {
        &self.steps
    }

    /// Number of planned renames
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if there is nothing to rename
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
