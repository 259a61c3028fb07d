use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::crane::CraneStore;
use super::error::StorageError;
use super::mast::MastStore;
use crate::model::{CraneRecord, MastRecord, ModelId};

const CRANE_DIR: &str = "CraneData";
const MAST_DIR: &str = "MastData";
const CRANE_FILE_SUFFIX: &str = "_crane.db";
const MAST_FILE: &str = "mast_data.db";

/// Maps model names to store files under a data root.
///
/// Layout:
///
/// ```text
/// <root>/CraneData/<model id>_crane.db
/// <root>/MastData/mast_data.db
/// ```
#[derive(Debug, Clone)]
pub struct StoreManager {
    base_path: PathBuf,
}

impl StoreManager {
    /// Creates a manager using the platform data directory
    /// (`~/.local/share/liftdata/` on Linux).
    ///
    /// The root is created if it does not already exist.
    pub fn new() -> Result<Self, StorageError> {
        let data_dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Self::with_path(data_dir.join("liftdata"))
    }

    /// Creates a manager rooted at the given path.
    ///
    /// `with_path(".")` keeps `CraneData/` and `MastData/` in the working
    /// directory.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the file backing a crane model's store.
    pub fn crane_store_path(&self, model: &ModelId) -> PathBuf {
        self.base_path
            .join(CRANE_DIR)
            .join(format!("{model}{CRANE_FILE_SUFFIX}"))
    }

    /// Returns the file backing the shared mast store.
    pub fn mast_store_path(&self) -> PathBuf {
        self.base_path.join(MAST_DIR).join(MAST_FILE)
    }

    /// Opens (creating if needed) the store for a crane model.
    pub fn open_crane(&self, model_name: &str) -> Result<CraneStore, StorageError> {
        let model = ModelId::new(model_name)?;
        CraneStore::open(self.crane_store_path(&model), model)
    }

    /// Opens (creating if needed) the shared mast store.
    pub fn open_mast(&self) -> Result<MastStore, StorageError> {
        MastStore::open(self.mast_store_path())
    }

    /// Returns `true` if a store file exists for the crane model.
    pub fn crane_store_exists(&self, model_name: &str) -> Result<bool, StorageError> {
        let model = ModelId::new(model_name)?;
        Ok(self.crane_store_path(&model).is_file())
    }

    /// Deletes a crane model's store file and every record in it.
    ///
    /// Returns `false` when there was no store to delete. The next
    /// [`open_crane`](Self::open_crane) for the model starts empty.
    pub fn delete_crane_store(&self, model_name: &str) -> Result<bool, StorageError> {
        let model = ModelId::new(model_name)?;
        let path = self.crane_store_path(&model);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("deleted crane store {model} at {}", path.display());
                Ok(true)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!("no crane store to delete for {model}");
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Lists the crane models that have a store, sorted by identifier.
    pub fn list_crane_models(&self) -> Result<Vec<ModelId>, StorageError> {
        let entries = match fs::read_dir(self.base_path.join(CRANE_DIR)) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut models: Vec<ModelId> = entries
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                let id = name.strip_suffix(CRANE_FILE_SUFFIX)?;
                (!id.is_empty()).then(|| ModelId::from_normalized(id.to_string()))
            })
            .collect();

        models.sort();
        Ok(models)
    }

    /// Opens the crane store, writes one record, and closes it.
    pub fn upsert_crane(&self, model_name: &str, record: &CraneRecord) -> Result<(), StorageError> {
        let store = self.open_crane(model_name)?;
        let result = store.upsert(record);
        finish(result, store.close())
    }

    /// Opens the crane store, reads one record, and closes it.
    pub fn fetch_crane(
        &self,
        model_name: &str,
        jib_length: f64,
    ) -> Result<Option<CraneRecord>, StorageError> {
        let store = self.open_crane(model_name)?;
        let result = store.fetch(jib_length);
        finish(result, store.close())
    }

    /// Opens the mast store, writes one record, and closes it.
    pub fn upsert_mast(&self, record: &MastRecord) -> Result<(), StorageError> {
        let store = self.open_mast()?;
        let result = store.upsert(record);
        finish(result, store.close())
    }

    /// Opens the mast store, reads one record, and closes it.
    pub fn fetch_mast(&self, mast_model: &str) -> Result<Option<MastRecord>, StorageError> {
        let store = self.open_mast()?;
        let result = store.fetch(mast_model);
        finish(result, store.close())
    }
}

/// Combines an operation's result with the close that follows it.
///
/// An operation error wins over a close error.
fn finish<T>(
    result: Result<T, StorageError>,
    closed: Result<(), StorageError>,
) -> Result<T, StorageError> {
    let value = result?;
    closed?;
    Ok(value)
}
