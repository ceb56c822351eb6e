//! # Formula Store Module
//!
//! ## Purpose
//! File-backed lookup of known dissociation constants keyed by chemical formula.
//! One store holds Ka values of acids, another Kb values of bases.
//!
//! ## File Format
//! ```json
//! {
//!   "CH3COOH": 1.8e-5,
//!   "HF": 6.8e-4
//! }
//! ```
//!
//! ## Behaviour
//! - **Open**: the backing file must exist and hold a JSON object of numbers;
//!   it is never created implicitly.
//! - **Save**: re-reads the file, inserts or overwrites one entry and writes the
//!   whole mapping back. Read-then-write is not atomic; the last writer wins.

use log::{info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access store file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed store file '{path}': {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
    #[cfg(test)]
    #[error("Store file '{0}' already exists")]
    AlreadyExists(String),
    #[error("Failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Formula -> dissociation constant mapping backed by one JSON file.
///
/// # Fields
/// * `path` - backing JSON file
/// * `entries` - contents as of the last load or save
#[derive(Debug, Clone)]
pub struct FormulaStore {
    path: PathBuf,
    entries: BTreeMap<String, f64>,
}

impl FormulaStore {
    /// Opens an existing store. Fails if the file is absent or malformed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<FormulaStore, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = read_entries(&path)?;
        info!(
            "opened formula store '{}' with {} entries",
            path.display(),
            entries.len()
        );
        Ok(FormulaStore { path, entries })
    }

    /// Writes an empty store to `path` and opens it. Refuses to overwrite an existing file.
    #[cfg(test)]
    pub fn create<P: AsRef<Path>>(path: P) -> Result<FormulaStore, StoreError> {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            return Err(StoreError::AlreadyExists(path.display().to_string()));
        }
        let store = FormulaStore {
            path,
            entries: BTreeMap::new(),
        };
        store.flush()?;
        Ok(store)
    }

    /// Re-reads the backing file and returns the full mapping.
    pub fn load(&mut self) -> Result<&BTreeMap<String, f64>, StoreError> {
        self.entries = read_entries(&self.path)?;
        Ok(&self.entries)
    }

    /// Inserts or overwrites `formula` and writes the whole mapping back to the file.
    pub fn save(&mut self, formula: &str, value: f64) -> Result<(), StoreError> {
        self.load()?;
        if let Some(old) = self.entries.insert(formula.to_string(), value) {
            if old != value {
                warn!(
                    "overwriting {} in '{}': {} -> {}",
                    formula,
                    self.path.display(),
                    old,
                    value
                );
            }
        }
        self.flush()?;
        info!("saved {} = {} to '{}'", formula, value, self.path.display());
        Ok(())
    }

    /// Writes the in-memory mapping to the backing file.
    pub fn flush(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }

    pub fn get(&self, formula: &str) -> Option<f64> {
        self.entries.get(formula).copied()
    }

    #[cfg(test)]
    pub fn contains(&self, formula: &str) -> bool {
        self.entries.contains_key(formula)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, f64>, StoreError> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    fn store_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_open_existing_store() {
        let file = store_file(r#"{"CH3COOH": 1.8e-5, "HF": 6.8e-4}"#);
        let store = FormulaStore::open(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("CH3COOH"), Some(1.8e-5));
        assert_eq!(store.get("HF"), Some(6.8e-4));
        assert!(store.contains("HF"));
        assert!(!store.contains("HCN"));
        assert_eq!(store.get("HCN"), None);
    }

    #[test]
    fn test_integer_values_are_read_as_floats() {
        let file = store_file(r#"{"X": 1}"#);
        let store = FormulaStore::open(file.path()).unwrap();
        assert_eq!(store.get("X"), Some(1.0));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("acids.json");
        let result = FormulaStore::open(&path);
        assert!(matches!(result, Err(StoreError::Io { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        for content in ["not json", "[1, 2]", r#"{"HF": "6.8e-4"}"#] {
            let file = store_file(content);
            let result = FormulaStore::open(file.path());
            assert!(
                matches!(result, Err(StoreError::Malformed { .. })),
                "{:?} should be malformed",
                content
            );
        }
    }

    #[test]
    fn test_save_then_reload() {
        let file = store_file("{}");
        let mut store = FormulaStore::open(file.path()).unwrap();
        assert!(store.is_empty());
        store.save("CH3COOH", 1.8e-5).unwrap();

        let mut reopened = FormulaStore::open(file.path()).unwrap();
        let entries = reopened.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("CH3COOH"), Some(&1.8e-5));
    }

    #[test]
    fn test_repeated_save_overwrites() {
        let file = store_file(r#"{"HF": 6.8e-4}"#);
        let mut store = FormulaStore::open(file.path()).unwrap();
        store.save("NH3", 1.0e-5).unwrap();
        store.save("NH3", 1.8e-5).unwrap();

        let raw = fs::read_to_string(file.path()).unwrap();
        assert_eq!(raw.matches("NH3").count(), 1);
        let reopened = FormulaStore::open(file.path()).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.get("NH3"), Some(1.8e-5));
        assert_eq!(reopened.get("HF"), Some(6.8e-4));
    }

    #[test]
    fn test_save_merges_changes_made_by_another_writer() {
        let file = store_file("{}");
        let mut first = FormulaStore::open(file.path()).unwrap();
        let mut second = FormulaStore::open(file.path()).unwrap();
        first.save("HF", 6.8e-4).unwrap();
        second.save("HCN", 6.2e-10).unwrap();

        let mut reopened = FormulaStore::open(file.path()).unwrap();
        let entries = reopened.load().unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_create() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bases.json");
        let store = FormulaStore::create(&path).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.path(), path.as_path());
        assert!(FormulaStore::open(&path).unwrap().is_empty());
        assert!(matches!(
            FormulaStore::create(&path),
            Err(StoreError::AlreadyExists(_))
        ));
    }
}
