//! Common test utilities
//!
//! Provides an isolated page environment for tests that drive a full editor
//! session against real files: a temp-backed store, a config pointing at it,
//! and helpers for inspecting or corrupting the stored page.

use std::path::Path;

use linkdeck::{Config, Session, Store};
use tempfile::TempDir;

/// Test environment with an isolated page file
pub struct PageHarness {
    /// Temporary directory holding the page file
    pub temp_dir: TempDir,
    store: Store,
    config: Config,
}

#[allow(dead_code)]
impl PageHarness {
    /// Create a new isolated page environment
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = Store::new(temp_dir.path().join("page.json"));
        Self {
            temp_dir,
            store,
            config: Config::default(),
        }
    }

    /// Use a different catalog theme for pages with no stored appearance
    pub fn with_default_theme(name: &str) -> Self {
        let mut harness = Self::new();
        harness.config.general.default_theme = name.to_string();
        harness
    }

    /// Open an editor session backed by the harness page file
    pub fn open(&self) -> Session {
        Session::open(self.store.clone(), &self.config)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn page_path(&self) -> &Path {
        self.store.path()
    }

    /// Whether anything has been written to the page file yet
    pub fn page_exists(&self) -> bool {
        self.store.path().exists()
    }

    /// Replace the raw page file contents
    pub fn write_page(&self, content: &str) {
        std::fs::write(self.store.path(), content).expect("Failed to write page file");
    }

    /// The raw page file contents
    pub fn read_page(&self) -> String {
        std::fs::read_to_string(self.store.path()).expect("Failed to read page file")
    }
}

impl Default for PageHarness {
    fn default() -> Self {
        Self::new()
    }
}
