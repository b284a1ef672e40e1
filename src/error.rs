use std::{io, path::PathBuf};

use itertools::Itertools as _;

use crate::validate::Conflict;

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A directory could not be read during the walk. Not-found errors never
    /// end up here; they are skipped by the walker.
    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A conflicting file that was confirmed to exist could not be removed.
    #[error("failed to remove conflicting file {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Every conflict found by the validator, in walk order.
    #[error("style conflicts detected:\n{}", .0.iter().join("\n"))]
    Conflicts(Vec<Conflict>),

    #[error("unrecognized style '{0}' (expected 'go_zero' or 'gozero')")]
    UnknownStyle(String),

    /// A conflict pair whose names can't safely be used as file names.
    #[error("invalid conflict pair ({go_zero}, {gozero}): {reason}")]
    InvalidPair {
        go_zero: String,
        gozero: String,
        reason: String,
    },

    #[error("invalid config ({}): {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T, E = StyleError> = std::result::Result<T, E>;
