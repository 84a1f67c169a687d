// Integration test utilities and common code
// WHY: centralized helpers avoid duplication across integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use mirrortext::Text;

/// Temporary directory holding input text files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Create a text file with given content
    pub fn create_text_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }
}

/// Letters of a text as a plain string, case preserved
pub fn spelled(text: &Text) -> String {
    text.letters().iter().map(|l| l.as_char()).collect()
}

/// Case-folded letters of a text
pub fn folded(text: &Text) -> String {
    spelled(text).to_lowercase()
}
