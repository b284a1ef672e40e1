use std::path::{Path, PathBuf};

use derive_more::Display;

use crate::{
    error::{Result, StyleError},
    style::ConflictPair,
    tree::{DirWalker, is_regular_file},
};

/// Both files of a pair found in one directory.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display("{dir}: both {go_zero} and {gozero} exist")]
pub struct Conflict {
    /// Directory relative to the project root (`.` for the root itself).
    pub dir: String,
    pub go_zero: String,
    pub gozero: String,
}

/// Check that no directory under `project_path` contains both files of any
/// pair. Unlike cleanup this doesn't stop at the first conflict; the error
/// lists all of them. Never modifies anything.
pub fn validate_no_style_conflicts(project_path: &Path, pairs: &[ConflictPair]) -> Result<()> {
    validate_dirs(project_path, DirWalker::new(project_path), pairs)
}

fn validate_dirs(
    project_path: &Path,
    dirs: impl Iterator<Item = Result<PathBuf>>,
    pairs: &[ConflictPair],
) -> Result<()> {
    let mut conflicts = Vec::new();

    for dir in dirs {
        let dir = dir?;
        for pair in pairs {
            if is_regular_file(&dir.join(&pair.go_zero)) && is_regular_file(&dir.join(&pair.gozero))
            {
                conflicts.push(Conflict {
                    dir: relative_display(project_path, &dir),
                    go_zero: pair.go_zero.clone(),
                    gozero: pair.gozero.clone(),
                });
            }
        }
    }

    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(StyleError::Conflicts(conflicts))
    }
}

fn relative_display(root: &Path, dir: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_owned(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => dir.display().to_string(),
    }
}
