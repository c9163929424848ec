//! Common test utilities for Stager integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test workspace with modules and source trees
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a module directory under node_modules with a manifest
    pub fn create_module(&self, dir_name: &str, manifest: &str) -> PathBuf {
        let module_path = self.path.join("node_modules").join(dir_name);
        std::fs::create_dir_all(&module_path).expect("Failed to create module directory");
        std::fs::write(module_path.join("package.json"), manifest)
            .expect("Failed to write manifest");
        module_path
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Workspace-relative path as a string argument
    pub fn arg(&self, path: &str) -> String {
        self.path.join(path).display().to_string()
    }
}
