//! Module manifest loading
//!
//! Each immediate subdirectory of the modules root may carry a `package.json`
//! declaring the module's name and entry point. Subdirectories without a
//! manifest are skipped silently; manifests missing a required field are
//! skipped with a diagnostic; malformed JSON aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, StagerError};

/// Manifest file name looked up in each module directory
pub const MANIFEST_FILE: &str = "package.json";

/// A module's declared identity and entry point.
///
/// `main` is normalized to a path relative to the modules root, so it can be
/// joined directly onto a parent-directory prefix when rewriting imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: String,
    pub main: String,
}

/// Raw manifest shape; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawManifest {
    name: Option<String>,
    main: Option<String>,
}

/// Normalize a declared entry point to a path relative to the modules root.
///
/// A leading `.` is replaced in place by the directory name, so `./index.js`
/// in `mod/` becomes `mod/index.js`. Anything else is joined under the
/// directory name: `lib/index.js` becomes `mod/lib/index.js`.
fn normalize_main(dir_name: &str, main: &str) -> String {
    match main.strip_prefix('.') {
        Some(rest) => format!("{}{}", dir_name, rest),
        None => format!("{}/{}", dir_name, main),
    }
}

/// Load module descriptors from every immediate subdirectory of
/// `modules_root` that carries a valid manifest.
///
/// Directories are visited in name order so descriptor order (and therefore
/// rewrite order) is stable across runs.
pub fn load_modules(modules_root: &Path) -> Result<Vec<ModuleDescriptor>> {
    let entries = fs::read_dir(modules_root).map_err(|e| StagerError::DirectoryReadFailed {
        path: modules_root.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    let mut modules = Vec::new();
    for dir in dirs {
        let Some(dir_name) = dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let manifest_path = dir.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            continue;
        }

        let content =
            fs::read_to_string(&manifest_path).map_err(|e| StagerError::FileReadFailed {
                path: manifest_path.display().to_string(),
                reason: e.to_string(),
            })?;
        let raw: RawManifest =
            serde_json::from_str(&content).map_err(|e| StagerError::ManifestParseFailed {
                path: manifest_path.display().to_string(),
                reason: e.to_string(),
            })?;

        let Some(name) = raw.name else {
            eprintln!("No \"name\" for {}", manifest_path.display());
            continue;
        };
        let Some(main) = raw.main else {
            eprintln!("No \"main\" for {}", manifest_path.display());
            continue;
        };

        println!("{} -> {}", dir_name, main);

        modules.push(ModuleDescriptor {
            name,
            main: normalize_main(dir_name, &main),
        });
    }

    Ok(modules)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_module(root: &Path, dir_name: &str, manifest: &str) {
        let dir = root.join(dir_name);
        fs::create_dir_all(&dir).expect("Failed to create module dir");
        fs::write(dir.join(MANIFEST_FILE), manifest).expect("Failed to write manifest");
    }

    #[test]
    fn test_normalize_main_relative_marker() {
        assert_eq!(normalize_main("mod", "./x"), "mod/x");
        assert_eq!(normalize_main("mod", "./index.js"), "mod/index.js");
    }

    #[test]
    fn test_normalize_main_plain_path() {
        assert_eq!(normalize_main("mod", "lib/index.js"), "mod/lib/index.js");
        assert_eq!(normalize_main("mod", "index.js"), "mod/index.js");
    }

    #[test]
    fn test_load_modules_basic() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        write_module(
            temp.path(),
            "mymodule",
            r#"{"name": "mymodule", "main": "./index.js"}"#,
        );
        write_module(
            temp.path(),
            "other",
            r#"{"name": "other-pkg", "main": "lib/entry.js"}"#,
        );

        let modules = load_modules(temp.path()).expect("load failed");
        assert_eq!(
            modules,
            vec![
                ModuleDescriptor {
                    name: "mymodule".to_string(),
                    main: "mymodule/index.js".to_string(),
                },
                ModuleDescriptor {
                    name: "other-pkg".to_string(),
                    main: "other/lib/entry.js".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_load_modules_skips_dir_without_manifest() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir_all(temp.path().join("no-manifest")).expect("Failed to create dir");
        write_module(
            temp.path(),
            "valid",
            r#"{"name": "valid", "main": "./index.js"}"#,
        );

        let modules = load_modules(temp.path()).expect("load failed");
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name, "valid");
    }

    #[test]
    fn test_load_modules_skips_missing_fields() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        write_module(temp.path(), "anonymous", r#"{"main": "./index.js"}"#);
        write_module(temp.path(), "entryless", r#"{"name": "entryless"}"#);
        write_module(
            temp.path(),
            "valid",
            r#"{"name": "valid", "main": "./index.js"}"#,
        );

        let modules = load_modules(temp.path()).expect("load failed");
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name, "valid");
        assert_eq!(modules[0].main, "valid/index.js");
    }

    #[test]
    fn test_load_modules_malformed_manifest_is_fatal() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        write_module(temp.path(), "broken", "{not json");

        let result = load_modules(temp.path());
        assert!(matches!(
            result.unwrap_err(),
            StagerError::ManifestParseFailed { .. }
        ));
    }

    #[test]
    fn test_load_modules_ignores_extra_fields() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        write_module(
            temp.path(),
            "rich",
            r#"{"name": "rich", "version": "1.0.0", "main": "./index.js", "dependencies": {}}"#,
        );

        let modules = load_modules(temp.path()).expect("load failed");
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].main, "rich/index.js");
    }

    #[test]
    fn test_load_modules_missing_root() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let result = load_modules(&temp.path().join("missing"));
        assert!(matches!(
            result.unwrap_err(),
            StagerError::DirectoryReadFailed { .. }
        ));
    }
}
