//! Sequential plan execution.
//!
//! Each step is an independent `std::fs::rename`; there is no batch
//! atomicity, no retry, and no rollback. A failed rename halts the
//! remaining plan, leaving earlier renames in place.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::plan::{RenamePlan, RenameStep};

/// Execute `plan` against `dir`, invoking `on_renamed` after each
/// successful rename.
///
/// Steps run strictly in plan order. The first failure (occupied target,
/// permission denied) is returned as-is; steps already applied are not
/// undone and steps after the failure are not attempted.
pub fn execute<F>(dir: &Path, plan: &RenamePlan, mut on_renamed: F) -> Result<()>
where
    F: FnMut(&RenameStep),
{
    for step in plan.steps() {
        let from = dir.join(&step.source);
        let to = dir.join(&step.target);

        fs::rename(&from, &to).map_err(|source| Error::Rename { from, to, source })?;

        log::debug!("renamed {} -> {}", step.source, step.target);
        on_renamed(step);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::DirectoryScan;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    fn list_names(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_execute_renames_all_candidates() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("9.png"), b"nine").unwrap();
        fs::write(dir.path().join("10.png"), b"ten").unwrap();
        fs::write(dir.path().join("avatar_1.png"), b"one").unwrap();
        fs::write(dir.path().join("avatar_2.png"), b"two").unwrap();

        let scan = DirectoryScan::read(dir.path()).unwrap();
        let plan = RenamePlan::build(&scan);

        let mut applied = Vec::new();
        execute(dir.path(), &plan, |step| applied.push(step.clone())).unwrap();

        assert_eq!(applied.len(), 2);
        assert_eq!(
            list_names(dir.path()),
            ["avatar_1.png", "avatar_2.png", "avatar_3.png", "avatar_4.png"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        );
        // Content follows the numeric order of the original names
        assert_eq!(fs::read(dir.path().join("avatar_3.png")).unwrap(), b"nine");
        assert_eq!(fs::read(dir.path().join("avatar_4.png")).unwrap(), b"ten");
    }

    #[test]
    fn test_execute_empty_plan_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("avatar_1.png"), b"one").unwrap();

        let scan = DirectoryScan::read(dir.path()).unwrap();
        let plan = RenamePlan::build(&scan);

        let mut calls = 0;
        execute(dir.path(), &plan, |_| calls += 1).unwrap();

        assert_eq!(calls, 0);
        assert_eq!(list_names(dir.path()).len(), 1);
    }

    #[test]
    fn test_rerun_leaves_migrated_files_alone() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("5.png"), b"five").unwrap();

        let scan = DirectoryScan::read(dir.path()).unwrap();
        execute(dir.path(), &RenamePlan::build(&scan), |_| {}).unwrap();

        // Second run sees no candidates; avatar_1.png is not re-renamed
        let scan = DirectoryScan::read(dir.path()).unwrap();
        let plan = RenamePlan::build(&scan);
        assert!(plan.is_empty());
        assert_eq!(plan.start_index(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_stops_on_rename_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("1.png"), b"one").unwrap();
        fs::write(dir.path().join("2.png"), b"two").unwrap();

        let scan = DirectoryScan::read(dir.path()).unwrap();
        let plan = RenamePlan::build(&scan);

        // Read-only directory: every rename fails with permission denied
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o555)).unwrap();

        let mut applied = Vec::new();
        let error = execute(dir.path(), &plan, |step| applied.push(step.clone())).unwrap_err();

        assert!(matches!(error, Error::Rename { .. }));
        assert!(applied.is_empty());

        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
    }
}
