//! Page persistence bridge
//!
//! Mirrors the editable state (profile, links, appearance) to a single JSON
//! file. Loading is tolerant: a missing file means a fresh page, and a
//! malformed sub-field degrades only that sub-field to its default rather
//! than discarding the rest. Saving failures are reported to the caller and
//! never touch the previous file contents.

use std::fs;
use std::path::{Path, PathBuf};

use linkdeck_core::{Link, Profile};
use linkdeck_theme::Appearance;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Persistence failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("could not determine a data directory for the page file")]
    NoDataDir,

    #[error("failed to create {0:?}: {1}")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("failed to write {0:?}: {1}")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("failed to serialize page state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Sub-values recovered from storage; absent fields fall back to defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredPage {
    pub profile: Option<Profile>,
    pub links: Option<Vec<Link>>,
    pub appearance: Option<Appearance>,
}

#[derive(Serialize)]
struct PageBlob<'a> {
    profile: &'a Profile,
    links: &'a [Link],
    appearance: &'a Appearance,
}

/// Reads and writes the page file
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default page file location (<data_dir>/linkdeck/page.json)
    pub fn default_path() -> Result<PathBuf, StoreError> {
        dirs::data_dir()
            .map(|p| p.join("linkdeck").join("page.json"))
            .ok_or(StoreError::NoDataDir)
    }

    /// Open the store at the default location
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load whatever is recoverable from the page file
    pub fn load(&self) -> StoredPage {
        if !self.path.exists() {
            log::info!("No page file at {:?}, starting fresh", self.path);
            return StoredPage::default();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Failed to read page file {:?}: {}", self.path, e);
                return StoredPage::default();
            }
        };

        let blob: serde_json::Value = match serde_json::from_str(&contents) {
            Ok(blob) => blob,
            Err(e) => {
                log::warn!("Page file {:?} is not valid JSON: {}", self.path, e);
                return StoredPage::default();
            }
        };

        StoredPage {
            profile: recover_field(&blob, "profile"),
            links: recover_field(&blob, "links"),
            appearance: recover_field(&blob, "appearance"),
        }
    }

    /// Write the full page state
    pub fn save(
        &self,
        profile: &Profile,
        links: &[Link],
        appearance: &Appearance,
    ) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::CreateDir(parent.to_path_buf(), e))?;
        }

        let blob = PageBlob {
            profile,
            links,
            appearance,
        };
        let contents = serde_json::to_string_pretty(&blob)?;

        fs::write(&self.path, contents).map_err(|e| StoreError::Write(self.path.clone(), e))?;
        log::debug!("Saved page to {:?}", self.path);
        Ok(())
    }
}

/// Deserialize one sub-field, degrading to absent on any mismatch
fn recover_field<T: DeserializeOwned>(blob: &serde_json::Value, key: &str) -> Option<T> {
    let field = blob.get(key)?;
    match serde_json::from_value(field.clone()) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed '{}' in stored page: {}", key, e);
            None
        }
    }
}
