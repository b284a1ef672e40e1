use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    style::{ConflictPair, Style},
    tree::is_regular_file,
};

/// Directories (relative to the project root) where generated files
/// conventionally live.
pub fn default_convention_dirs() -> Vec<PathBuf> {
    ["internal/svc", "internal/handler", "internal/logic"]
        .into_iter()
        .map(PathBuf::from)
        .collect()
}

/// Guess which style a project uses by looking for either file of each pair
/// in the convention directories. This only probes those directories, not
/// the whole tree.
pub fn detect_existing_style(
    project_path: &Path,
    pairs: &[ConflictPair],
    convention_dirs: &[PathBuf],
) -> Option<Style> {
    for pair in pairs {
        for dir in convention_dirs {
            let dir = project_path.join(dir);
            for style in [Style::GoZero, Style::GoZeroFlat] {
                let candidate = dir.join(pair.name_for(style));
                if is_regular_file(&candidate) {
                    debug!("Found {}, style is {style}", candidate.display());
                    return Some(style);
                }
            }
        }
    }
    None
}

/// The detected style, or `default` if it couldn't be detected.
pub fn suggest_style(
    project_path: &Path,
    pairs: &[ConflictPair],
    convention_dirs: &[PathBuf],
    default: Style,
) -> Style {
    detect_existing_style(project_path, pairs, convention_dirs).unwrap_or(default)
}
