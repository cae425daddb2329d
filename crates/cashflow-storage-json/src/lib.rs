//! Filesystem-backed JSON persistence for manual cash entries.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use uuid::Uuid;

use cashflow_core::{store::ManualEntryStore, CoreError};
use cashflow_domain::{DateRange, EntryKind, ManualCashEntry};

const ENTRIES_FILE: &str = "manual_entries.json";
const TMP_SUFFIX: &str = "tmp";
const APP_DIR: &str = "cashflow";

/// Stores every manual entry in a single JSON document under a data
/// directory. Each operation re-reads the file, so the store carries no
/// in-memory state between calls.
#[derive(Clone)]
pub struct JsonEntryStore {
    entries_file: PathBuf,
}

impl JsonEntryStore {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            entries_file: data_dir.join(ENTRIES_FILE),
        })
    }

    /// Uses the platform data directory as the storage root.
    pub fn new_default() -> Result<Self, CoreError> {
        let base = dirs::data_dir()
            .ok_or_else(|| CoreError::Storage("no platform data directory available".into()))?;
        Self::new(base.join(APP_DIR))
    }

    pub fn entries_path(&self) -> &Path {
        &self.entries_file
    }

    fn read_all(&self) -> Result<Vec<ManualCashEntry>, CoreError> {
        if !self.entries_file.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.entries_file)?;
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
    }

    fn write_all(&self, entries: &[ManualCashEntry]) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.entries_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.entries_file)?;
        Ok(())
    }
}

impl ManualEntryStore for JsonEntryStore {
    fn insert(&self, entry: &ManualCashEntry) -> Result<(), CoreError> {
        let mut entries = self.read_all()?;
        entries.push(entry.clone());
        self.write_all(&entries)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<ManualCashEntry>, CoreError> {
        Ok(self.read_all()?.into_iter().find(|entry| entry.id == id))
    }

    fn exists(&self, id: Uuid) -> Result<bool, CoreError> {
        Ok(self.read_all()?.iter().any(|entry| entry.id == id))
    }

    fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let mut entries = self.read_all()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() != before {
            self.write_all(&entries)?;
        }
        Ok(())
    }

    fn find_by_date_range(&self, range: DateRange) -> Result<Vec<ManualCashEntry>, CoreError> {
        let mut entries: Vec<_> = self
            .read_all()?
            .into_iter()
            .filter(|entry| range.contains(entry.entry_date))
            .collect();
        entries.sort_by_key(|entry| entry.entry_date);
        Ok(entries)
    }

    fn sum_by_kind(&self, range: DateRange, kind: EntryKind) -> Result<f64, CoreError> {
        Ok(self
            .read_all()?
            .iter()
            .filter(|entry| entry.kind == kind && range.contains(entry.entry_date))
            .map(|entry| entry.amount)
            .sum())
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

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
