use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    error::{Result, StyleError},
    style::{ConflictPair, Style},
    tree::{DirWalker, is_regular_file},
};

/// Remove the file that doesn't match `style` from every directory under
/// `project_path` that contains both files of a conflict pair. Returns the
/// removed paths in walk order.
///
/// Every pair is checked before anything is removed. Stops at the first walk
/// or removal error. Files removed before the error stay removed.
pub fn cleanup_style_conflicts(
    project_path: &Path,
    style: Style,
    pairs: &[ConflictPair],
) -> Result<Vec<PathBuf>> {
    for pair in pairs {
        pair.check()?;
    }
    cleanup_dirs(DirWalker::new(project_path), style, pairs)
}

fn cleanup_dirs(
    dirs: impl Iterator<Item = Result<PathBuf>>,
    style: Style,
    pairs: &[ConflictPair],
) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for dir in dirs {
        let dir = dir?;
        debug!("Checking {}", dir.display());
        cleanup_dir(&dir, style, pairs, &mut removed)?;
    }
    Ok(removed)
}

fn cleanup_dir(
    dir: &Path,
    style: Style,
    pairs: &[ConflictPair],
    removed: &mut Vec<PathBuf>,
) -> Result<()> {
    for pair in pairs {
        let keep = dir.join(pair.name_for(style));
        let discard = dir.join(pair.name_for(style.other()));

        if !(is_regular_file(&keep) && is_regular_file(&discard)) {
            continue;
        }

        // It may have gone since we looked.
        if !is_regular_file(&discard) {
            continue;
        }

        match fs::remove_file(&discard) {
            Ok(()) => {
                info!("Removed {}", discard.display());
                removed.push(discard);
            }
            // Deleted by someone else between the re-check and here.
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(StyleError::Remove {
                    path: discard,
                    source,
                });
            }
        }
    }
    Ok(())
}
