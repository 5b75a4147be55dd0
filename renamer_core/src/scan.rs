//! Directory scanning and filename classification.
//!
//! A scan reads the directory entry names exactly once; no invariant is
//! enforced against concurrent filesystem mutation after the read. Two
//! disjoint filename populations are recognized: numeric-only candidates
//! (`\d+.png`) awaiting migration, and already-migrated `avatar_N.png`
//! files that only contribute to the start index computation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Prefix carried by already-migrated files
pub const AVATAR_PREFIX: &str = "avatar_";

/// Extension shared by candidates and migrated files
pub const IMAGE_EXT: &str = ".png";

/// A numeric-only file eligible for renaming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Raw filename, e.g. `21.png`
    pub name: String,
    /// Integer value parsed from the name without extension
    pub value: u64,
}

/// A one-shot snapshot of a directory's entry names
#[derive(Debug)]
pub struct DirectoryScan {
    dir: PathBuf,
    names: Vec<String>,
}

impl DirectoryScan {
    /// Read the entry names of `dir`, non-recursively.
    ///
    /// Entry names that are not valid UTF-8 are dropped; they can match
    /// neither filename pattern.
    pub fn read(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir).map_err(|source| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => log::debug!("skipping non-UTF-8 entry {name:?}"),
            }
        }

        log::debug!("scanned {}: {} entries", dir.display(), names.len());

        Ok(Self {
            dir: dir.to_path_buf(),
            names,
        })
    }

    /// Directory this scan was taken from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Candidate files, sorted ascending by numeric value.
    ///
    /// The sort is numeric, not lexicographic: `9.png` orders before
    /// `10.png`. Leading-zero names (`07.png`) match and parse as their
    /// numeric value; the sort is stable, so the rare tie (`07.png` next
    /// to `7.png`) keeps directory listing order.
    pub fn candidates(&self) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = self
            .names
            .iter()
            .filter_map(|name| {
                parse_candidate_value(name).map(|value| Candidate {
                    name: name.clone(),
                    value,
                })
            })
            .collect();
        candidates.sort_by_key(|c| c.value);
        candidates
    }

    /// First index available for renaming: one greater than the highest
    /// existing `avatar_N.png` index, or 1 if none exist.
    ///
    /// Entries whose index does not parse (`avatar_x.png`) are skipped
    /// without error.
    pub fn start_index(&self) -> u64 {
        let max_index = self
            .names
            .iter()
            .filter_map(|name| parse_avatar_index(name))
            .max()
            .unwrap_or(0);
        max_index + 1
    }
}

/// Parse a candidate filename (`^\d+\.png$`) into its numeric value.
fn parse_candidate_value(name: &str) -> Option<u64> {
    let stem = name.strip_suffix(IMAGE_EXT)?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

/// Best-effort parse of an `avatar_N.png` filename's index.
fn parse_avatar_index(name: &str) -> Option<u64> {
    let stem = name.strip_prefix(AVATAR_PREFIX)?.strip_suffix(IMAGE_EXT)?;
    stem.parse().ok()
}
