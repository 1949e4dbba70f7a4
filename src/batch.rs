//! Batch operations over a resolved file set.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::BopError;
use crate::fileset::FileSet;

/// Binds a [`FileSet`] to a root directory and exposes the batch actions.
///
/// Holds no state beyond the binding; every action re-resolves the set
/// against the live filesystem.
#[derive(Debug)]
pub struct BatchOp {
    root: PathBuf,
    fileset: FileSet,
}

impl BatchOp {
    /// Bind `fileset` to `root`.
    ///
    /// # Errors
    ///
    /// Returns [`BopError::RootNotFound`] unless `root` is an existing
    /// directory.
    pub fn new(root: impl Into<PathBuf>, fileset: FileSet) -> Result<BatchOp, BopError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(BopError::RootNotFound {
                path: root.display().to_string(),
            });
        }
        Ok(BatchOp { root, fileset })
    }

    /// Every matching path.
    pub fn list(&self) -> Vec<PathBuf> {
        self.fileset.resolve(&self.root).collect()
    }

    /// Number of matching paths, without materializing the list.
    pub fn count(&self) -> u64 {
        self.fileset.resolve(&self.root).count() as u64
    }

    /// Matching files and folders, counted separately.
    pub fn count_detailed(&self) -> (u64, u64) {
        let mut files = 0u64;
        let mut folders = 0u64;
        for path in self.fileset.resolve(&self.root) {
            if path.is_dir() {
                folders += 1;
            } else {
                files += 1;
            }
        }
        (files, folders)
    }

    /// Recursively remove every matching path via the shell remover.
    ///
    /// Removal is one-pass in enumeration order with no dependency
    /// ordering: a matching directory may be removed before its
    /// already-enumerated children, which the forced remover then treats
    /// as already gone. Irreversible and non-transactional: a failure
    /// partway leaves earlier removals applied.
    ///
    /// # Errors
    ///
    /// Returns [`BopError::DeleteFailed`] on the first path the remover
    /// rejects.
    pub fn delete(&self) -> Result<u64, BopError> {
        self.delete_with(shell_remove)
    }

    /// [`BatchOp::delete`] with a caller-supplied remover, one call per
    /// matching path.
    pub fn delete_with<F>(&self, mut remove: F) -> Result<u64, BopError>
    where
        F: FnMut(&Path) -> Result<(), BopError>,
    {
        let mut removed = 0u64;
        for path in self.fileset.resolve(&self.root) {
            remove(&path)?;
            removed += 1;
        }
        Ok(removed)
    }
}

/// Forced recursive remove, file or directory alike.
fn shell_remove(path: &Path) -> Result<(), BopError> {
    let status = Command::new("rm").arg("-rf").arg("--").arg(path).status()?;
    if !status.success() {
        return Err(BopError::DeleteFailed {
            path: path.display().to_string(),
            reason: format!("rm exited with {}", status),
        });
    }
    Ok(())
}
