//! Deployment of source trees into the deploy root
//!
//! For every file discovered under a source root, the relative subdirectory
//! chain is recreated under the deploy root and the file is copied, with
//! import lines rewritten against the loaded module descriptors. Directory
//! creation and the copy are always two sequential steps per file; the two
//! historical variants (rewriting text copy vs. plain byte copy) are one
//! code path behind a policy flag.

use std::fs;
use std::path::Path;

use crate::error::{Result, StagerError};
use crate::manifest::ModuleDescriptor;
use crate::progress::ProgressDisplay;
use crate::rewrite;
use crate::walker;

/// Copy policy for a deployment run.
#[derive(Debug, Clone, Copy)]
pub struct DeployOptions {
    /// Rewrite import lines while copying. When false, files are copied
    /// byte-for-byte with the OS copy primitive.
    pub rewrite_imports: bool,
    /// Print a copy notice per staged file
    pub verbose: bool,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            rewrite_imports: true,
            verbose: false,
        }
    }
}

fn file_read_error(path: &Path, e: std::io::Error) -> StagerError {
    StagerError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn file_write_error(path: &Path, e: std::io::Error) -> StagerError {
    StagerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Remove any previous deploy root and create a fresh empty one.
///
/// Destructive: the old tree is gone before the first file is copied, and a
/// run that fails partway leaves a partial tree behind. The directory is
/// guaranteed to exist for the remainder of the run.
pub fn prepare_deploy_root(deploy_root: &Path) -> Result<()> {
    if deploy_root.exists() {
        fs::remove_dir_all(deploy_root).map_err(|e| file_write_error(deploy_root, e))?;
    }
    fs::create_dir_all(deploy_root).map_err(|e| file_write_error(deploy_root, e))?;
    Ok(())
}

/// Path segments between `source_root` and `file`, excluding the root itself
/// and the file name. The length of the chain is the file's depth.
fn subdirectory_chain(source_root: &Path, file: &Path) -> Vec<String> {
    let relative = file.strip_prefix(source_root).unwrap_or(file);
    relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default()
}

/// True if path has a known binary extension; such files are copied as-is
/// rather than read as text for rewriting.
fn is_likely_binary_file(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    matches!(
        ext.to_lowercase().as_str(),
        "zip"
            | "png"
            | "jpg"
            | "jpeg"
            | "gif"
            | "webp"
            | "ico"
            | "woff"
            | "woff2"
            | "ttf"
            | "otf"
            | "eot"
            | "mp3"
            | "mp4"
            | "webm"
            | "wasm"
            | "bin"
    )
}

/// Copy one file line by line, rewriting import lines at the given depth.
///
/// Line terminators are preserved byte-exactly; only lines matching the
/// import heuristic are touched.
fn copy_with_rewrite(
    source: &Path,
    target: &Path,
    depth: usize,
    modules: &[ModuleDescriptor],
) -> Result<()> {
    let content = fs::read_to_string(source).map_err(|e| file_read_error(source, e))?;

    let mut out = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        if rewrite::is_import_line(line) {
            out.push_str(&rewrite::rewrite_import_line(line, depth, modules));
        } else {
            out.push_str(line);
        }
    }

    fs::write(target, out).map_err(|e| file_write_error(target, e))?;
    Ok(())
}

fn copy_one(
    deploy_root: &Path,
    source_root: &Path,
    file: &Path,
    modules: &[ModuleDescriptor],
    options: DeployOptions,
) -> Result<()> {
    let chain = subdirectory_chain(source_root, file);
    let depth = chain.len();

    let mut target_dir = deploy_root.to_path_buf();
    for segment in &chain {
        target_dir.push(segment);
    }
    fs::create_dir_all(&target_dir).map_err(|e| file_write_error(&target_dir, e))?;

    let file_name = file.file_name().ok_or_else(|| StagerError::IoError {
        message: format!("Path has no file name: {}", file.display()),
    })?;
    let target = target_dir.join(file_name);

    if options.verbose {
        println!("  {} -> {}", file.display(), target.display());
    }

    if options.rewrite_imports && !is_likely_binary_file(file) {
        copy_with_rewrite(file, &target, depth, modules)
    } else {
        fs::copy(file, &target)
            .map_err(|e| file_write_error(&target, e))
            .map(|_| ())
    }
}

/// Mirror every non-ignored file under `source_root` into `deploy_root`,
/// recreating the relative directory structure.
pub fn deploy_files(
    deploy_root: &Path,
    source_root: &Path,
    modules: &[ModuleDescriptor],
    options: DeployOptions,
) -> Result<()> {
    let files = walker::walk_files(source_root)?;
    let progress = ProgressDisplay::new(files.len() as u64);

    for file in &files {
        progress.update_file(&file.display().to_string());
        if let Err(e) = copy_one(deploy_root, source_root, file, modules, options) {
            progress.abandon();
            return Err(e);
        }
    }

    progress.finish();
    Ok(())
}
