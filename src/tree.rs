use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use walkdir::WalkDir;

use crate::error::{Result, StyleError};

/// Returns true if `path` exists and is a regular file. Any error (including
/// permission errors) counts as "not a file".
pub fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|metadata| metadata.is_file())
}

/// Lazily yields every directory under a root, the root included. Symlinks
/// are not followed. Directories that disappear while walking are skipped,
/// as is a root that doesn't exist.
pub struct DirWalker {
    inner: walkdir::IntoIter,
}

impl DirWalker {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            inner: WalkDir::new(root)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter(),
        }
    }
}

impl Iterator for DirWalker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if entry.file_type().is_dir() {
                        return Some(Ok(entry.into_path()));
                    }
                }
                Err(err) if is_not_found(&err) => {
                    debug!("Skipping vanished path: {err}");
                }
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    return Some(Err(StyleError::Walk { path, source: err }));
                }
            }
        }
    }
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|err| err.kind() == io::ErrorKind::NotFound)
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::TempDir;

    fn relative_dirs(root: &Path) -> Vec<PathBuf> {
        DirWalker::new(root)
            .map(|dir| dir.unwrap().strip_prefix(root).unwrap().to_owned())
            .collect()
    }

    #[test]
    fn test_is_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.go");
        fs::write(&file, "package a").unwrap();

        assert!(is_regular_file(&file));
        assert!(!is_regular_file(temp_dir.path()));
        assert!(!is_regular_file(&temp_dir.path().join("missing.go")));
    }

    #[test]
    fn test_walk_visits_every_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("internal/svc")).unwrap();
        fs::create_dir_all(root.join("internal/logic/user")).unwrap();
        fs::write(root.join("internal/svc/a.go"), "").unwrap();
        fs::write(root.join("main.go"), "").unwrap();

        assert_eq!(
            relative_dirs(root),
            vec![
                PathBuf::new(),
                PathBuf::from("internal"),
                PathBuf::from("internal/logic"),
                PathBuf::from("internal/logic/user"),
                PathBuf::from("internal/svc"),
            ]
        );
    }

    #[test]
    fn test_walk_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let mut walker = DirWalker::new(temp_dir.path().join("nope"));
        assert!(walker.next().is_none());
    }

    #[test]
    fn test_walk_directory_removed_mid_walk() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/deep")).unwrap();
        fs::create_dir_all(root.join("z")).unwrap();

        let mut walker = DirWalker::new(root);
        assert_eq!(walker.next().unwrap().unwrap(), root);

        fs::remove_dir_all(root.join("a")).unwrap();

        let rest: Vec<PathBuf> = walker.collect::<Result<_>>().unwrap();
        assert!(rest.contains(&root.join("z")));
        assert!(!rest.contains(&root.join("a/deep")));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let locked = temp_dir.path().join("locked");
        fs::create_dir_all(locked.join("inner")).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root can read anything so there's nothing to test.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result: Result<Vec<PathBuf>> = DirWalker::new(temp_dir.path()).collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(StyleError::Walk { path, .. }) => assert_eq!(path, locked),
            other => panic!("expected walk error, got {other:?}"),
        }
    }
}
