//! Filesystem probe used by the path classifiers.
//!
//! The only side effect in the crate lives here: the writability probe
//! creates a uniquely named temp file and removes it again. The file is a
//! `NamedTempFile`, so it is deleted on drop on every exit path.

use std::fmt;
use std::path::Path;

/// Filesystem queries the classifiers depend on.
pub trait FsProbe: fmt::Debug + Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether a file whose name starts with `name` can be created (and is
    /// then removed) under the system temp directory. An absolute `name` is
    /// tried at that location instead, so its parent must exist.
    fn try_create_and_delete(&self, name: &Path) -> bool;
}

/// Probe backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl FsProbe for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn try_create_and_delete(&self, name: &Path) -> bool {
        if name.as_os_str().is_empty() {
            return false;
        }
        match tempfile::Builder::new().prefix(name).tempfile() {
            Ok(file) => {
                tracing::trace!(path = %file.path().display(), "writability probe created");
                if let Err(e) = file.close() {
                    tracing::debug!("writability probe cleanup failed: {}", e);
                }
                true
            }
            Err(e) => {
                tracing::trace!(name = %name.display(), "writability probe failed: {}", e);
                false
            }
        }
    }
}

/// Strict existence check, or the writability probe when `strict` is false.
pub(crate) fn path_ok(probe: &dyn FsProbe, path: &Path, strict: bool) -> bool {
    if probe.exists(path) {
        return true;
    }
    !strict && probe.try_create_and_delete(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn existing_paths_are_detected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, b"x").unwrap();

        let fs = LocalFs;
        assert!(fs.exists(&file));
        assert!(fs.is_file(&file));
        assert!(!fs.is_dir(&file));
        assert!(fs.is_dir(dir.path()));
    }

    #[test]
    fn probe_leaves_no_residue() {
        let dir = tempdir().unwrap();
        let prefix = dir.path().join("probe-name");

        assert!(LocalFs.try_create_and_delete(&prefix));
        let leftover = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftover, 0);
    }

    #[test]
    fn probe_fails_when_parent_is_missing() {
        let dir = tempdir().unwrap();
        let prefix = dir.path().join("missing").join("child");
        assert!(!LocalFs.try_create_and_delete(&prefix));
        assert!(!LocalFs.try_create_and_delete(Path::new("")));
    }

    #[test]
    fn path_ok_strict_vs_relaxed() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        assert!(!path_ok(&LocalFs, &missing, true));
        assert!(path_ok(&LocalFs, &missing, false));
        assert!(!missing.exists());
    }
}
