//! Recursive file discovery under a source root

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, StagerError};

/// File names never copied into the deploy tree: the module manifest and the
/// type-configuration file.
pub const IGNORED_FILES: &[&str] = &["package.json", "tsconfig.json"];

fn is_ignored(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| IGNORED_FILES.contains(&name))
}

/// Collect every regular file under `root`, recursively, skipping ignored
/// file names.
///
/// Directories are never included. Order is traversal order; cyclic symlink
/// trees are not guarded against.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(StagerError::DirectoryNotFound {
            path: root.display().to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|e| StagerError::DirectoryReadFailed {
            path: root.display().to_string(),
            reason: e.to_string(),
        })?;
        if entry.file_type().is_file() && !is_ignored(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}
