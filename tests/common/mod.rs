//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Product name the binary uses for archive names
pub const PRODUCT: &str = "Video-skipping-and-anime-TV-series-tracking-assistant";

/// Test project context
///
/// Creates a temporary directory laid out like an extension source tree.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Write manifest.json with the given version
    pub fn write_manifest(&self, version: &str) {
        self.create_file(
            "manifest.json",
            &format!(r#"{{"manifest_version": 3, "name": "test", "version": "{version}"}}"#),
        );
    }

    /// Path of the archive for `version`
    pub fn archive_path(&self, version: &str) -> PathBuf {
        self.dir.path().join(format!("{PRODUCT}-v{version}.zip"))
    }

    /// Names of all zip files in the project root
    pub fn zip_files(&self) -> Vec<String> {
        std::fs::read_dir(self.dir.path())
            .expect("Failed to list project")
            .map(|entry| entry.expect("Failed to read entry").file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".zip"))
            .collect()
    }

    /// Run extpack in the project directory
    pub fn run(&self) -> Output {
        Command::new(env!("CARGO_BIN_EXE_extpack"))
            .current_dir(self.path())
            .output()
            .expect("Failed to execute extpack")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorted entry names of a zip archive
#[allow(dead_code)]
pub fn archive_entries(path: &Path) -> Vec<String> {
    let archive =
        zip::ZipArchive::new(File::open(path).expect("Failed to open archive")).expect("Invalid zip");
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

/// Content of one archive entry
#[allow(dead_code)]
pub fn archive_entry_content(path: &Path, name: &str) -> String {
    let mut archive =
        zip::ZipArchive::new(File::open(path).expect("Failed to open archive")).expect("Invalid zip");
    let mut entry = archive.by_name(name).expect("Entry not found");
    let mut content = String::new();
    entry.read_to_string(&mut content).expect("Failed to read entry");
    content
}

/// Write a full extension source tree
#[allow(dead_code)]
pub fn create_extension(project: &TestProject, version: &str) {
    project.write_manifest(version);
    project.create_file("background.js", "chrome.runtime.onInstalled.addListener(() => {});");
    project.create_file("content.js", "console.log('content');");
    project.create_file("popup.html", "<html><body>popup</body></html>");
    project.create_file("popup.js", "console.log('popup');");
    project.create_file("options.html", "<html><body>options</body></html>");
    project.create_file("options.js", "console.log('options');");
    project.create_file("icon.png", "PNG");
    project.create_file("README.md", "# Test extension");
    project.create_file("_locales/en/messages.json", r#"{"name": {"message": "Test"}}"#);
    project.create_file("_locales/zh_CN/messages.json", r#"{"name": {"message": "测试"}}"#);
}
