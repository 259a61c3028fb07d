use std::path::{Path, PathBuf};

use log::{debug, info};
use rusqlite::{Connection, OptionalExtension, params};

use super::error::{StorageError, check_finite};
use super::open_table;
use crate::model::MastRecord;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS mast_data (
    mast_model TEXT PRIMARY KEY,
    self_weight REAL,
    mast_height REAL,
    mast_wind_area REAL
)";

const UPSERT: &str = "INSERT OR REPLACE INTO mast_data (
    mast_model,
    self_weight,
    mast_height,
    mast_wind_area
) VALUES (?1, ?2, ?3, ?4)";

const SELECT_BY_MODEL: &str = "SELECT mast_model, self_weight, mast_height, mast_wind_area
FROM mast_data WHERE mast_model = ?1";

/// The shared mast table.
///
/// Keys are compared byte for byte: `"MC-85"` and `"mc-85"` are different
/// masts.
#[derive(Debug)]
pub struct MastStore {
    conn: Connection,
    path: PathBuf,
}

impl MastStore {
    /// Opens or creates the shared store file at `path`.
    ///
    /// Creates the parent directory and the table if missing. Existing rows
    /// are never touched.
    pub(super) fn open(path: PathBuf) -> Result<Self, StorageError> {
        let (conn, created) = open_table(&path, CREATE_TABLE)?;
        if created {
            info!("created mast store at {}", path.display());
        } else {
            debug!("opened mast store at {}", path.display());
        }
        Ok(Self { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts the record, replacing any row with the same mast model.
    pub fn upsert(&self, record: &MastRecord) -> Result<(), StorageError> {
        let [self_weight, mast_height, mast_wind_area] = record.values();
        check_finite(&MastRecord::LABELS[1..], &record.values())?;
        self.conn.execute(
            UPSERT,
            params![record.mast_model, self_weight, mast_height, mast_wind_area],
        )?;
        debug!("upserted mast {:?}", record.mast_model);
        Ok(())
    }

    /// Looks up the record whose model name matches `mast_model` exactly.
    pub fn fetch(&self, mast_model: &str) -> Result<Option<MastRecord>, StorageError> {
        let record = self
            .conn
            .query_row(SELECT_BY_MODEL, params![mast_model], |row| {
                Ok(MastRecord {
                    mast_model: row.get(0)?,
                    self_weight: row.get(1)?,
                    mast_height: row.get(2)?,
                    mast_wind_area: row.get(3)?,
                })
            })
            .optional()?;
        debug!(
            "fetch mast {mast_model:?}: {}",
            if record.is_some() { "found" } else { "absent" }
        );
        Ok(record)
    }

    /// Releases the connection.
    pub fn close(self) -> Result<(), StorageError> {
        debug!("closing mast store");
        self.conn.close().map_err(|(_, err)| StorageError::Sqlite(err))
    }
}
