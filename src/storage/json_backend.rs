//! Directory-backed JSON persistence, one document per storage key.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::domain::ExpenseRecord;
use crate::errors::LedgerError;
use crate::storage::StorageBackend;

const EXPENSES_KEY: &str = "expenses";
const BUDGET_KEY: &str = "budget";
const TMP_SUFFIX: &str = "tmp";

/// Stores each key as `<root>/<key>.json`, written atomically through a tmp
/// sibling. Unreadable documents load as absent so a corrupted file never
/// blocks startup.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: PathBuf) -> Result<Self, LedgerError> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, LedgerError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        match serde_json::from_str(&data) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(key, %err, "discarding unreadable state");
                Ok(None)
            }
        }
    }

    fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(value)?;
        let path = self.key_path(key);
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn load_expenses(&self) -> Result<Option<Vec<ExpenseRecord>>, LedgerError> {
        self.read_key(EXPENSES_KEY)
    }

    fn save_expenses(&self, expenses: &[ExpenseRecord]) -> Result<(), LedgerError> {
        self.write_key(EXPENSES_KEY, &expenses)
    }

    fn load_budget(&self) -> Result<Option<f64>, LedgerError> {
        self.read_key(BUDGET_KEY)
    }

    fn save_budget(&self, amount: f64) -> Result<(), LedgerError> {
        self.write_key(BUDGET_KEY, &amount)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().to_path_buf()).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn absent_keys_load_as_none() {
        let (storage, _guard) = storage_with_temp_dir();
        assert!(storage.load_expenses().expect("load expenses").is_none());
        assert!(storage.load_budget().expect("load budget").is_none());
    }

    #[test]
    fn budget_saves_as_a_bare_number() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.save_budget(1500.0).expect("save budget");
        let raw = std::fs::read_to_string(storage.key_path("budget")).expect("read file");
        assert_eq!(raw.trim().parse::<f64>().expect("bare number"), 1500.0);
    }

    #[test]
    fn unreadable_documents_load_as_absent() {
        let (storage, _guard) = storage_with_temp_dir();
        std::fs::write(storage.key_path("expenses"), "{ not json").expect("write garbage");
        assert!(storage.load_expenses().expect("load").is_none());
    }

    #[test]
    fn saves_leave_no_tmp_file_behind() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.save_budget(42.0).expect("save budget");
        let tmp = tmp_path(&storage.key_path("budget"));
        assert!(!tmp.exists());
    }
}
