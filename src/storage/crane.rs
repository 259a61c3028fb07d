use std::path::{Path, PathBuf};

use log::{debug, info};
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};

use super::error::{StorageError, check_finite};
use super::open_table;
use crate::model::{CraneRecord, ModelId};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS crane_data (
    jib_length REAL PRIMARY KEY,
    in_service_moment REAL,
    in_service_vertical_force REAL,
    in_service_horizontal_force REAL,
    out_of_service_moment REAL,
    out_of_service_vertical_force REAL,
    out_of_service_horizontal_force REAL,
    number_of_falls REAL,
    tip_load REAL,
    max_load_radius REAL,
    wind_area REAL,
    delta_h REAL
)";

const UPSERT: &str = "INSERT OR REPLACE INTO crane_data (
    jib_length,
    in_service_moment,
    in_service_vertical_force,
    in_service_horizontal_force,
    out_of_service_moment,
    out_of_service_vertical_force,
    out_of_service_horizontal_force,
    number_of_falls,
    tip_load,
    max_load_radius,
    wind_area,
    delta_h
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";

const SELECT_BY_JIB: &str = "SELECT
    jib_length,
    in_service_moment,
    in_service_vertical_force,
    in_service_horizontal_force,
    out_of_service_moment,
    out_of_service_vertical_force,
    out_of_service_horizontal_force,
    number_of_falls,
    tip_load,
    max_load_radius,
    wind_area,
    delta_h
FROM crane_data WHERE jib_length = ?1";

/// An open per-model crane table.
///
/// Obtained from [`StoreManager::open_crane`](super::StoreManager::open_crane).
/// The handle owns its connection; [`close`](Self::close) consumes it, and
/// dropping an unclosed handle releases the connection as well.
#[derive(Debug)]
pub struct CraneStore {
    conn: Connection,
    model: ModelId,
    path: PathBuf,
}

impl CraneStore {
    /// Opens or creates the store file at `path`.
    ///
    /// Creates the parent directory and the table if missing. Existing rows
    /// are never touched.
    pub(super) fn open(path: PathBuf, model: ModelId) -> Result<Self, StorageError> {
        let (conn, created) = open_table(&path, CREATE_TABLE)?;
        if created {
            info!("created crane store {model} at {}", path.display());
        } else {
            debug!("opened crane store {model} at {}", path.display());
        }
        Ok(Self { conn, model, path })
    }

    /// The normalized model this store belongs to.
    pub fn model(&self) -> &ModelId {
        &self.model
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts the record, replacing any row with the same jib length.
    ///
    /// Values are not range-checked; only NaN and infinities are refused.
    pub fn upsert(&self, record: &CraneRecord) -> Result<(), StorageError> {
        let values = record.values();
        check_finite(&CraneRecord::LABELS, &values)?;
        self.conn.execute(UPSERT, params_from_iter(values))?;
        debug!(
            "upserted jib length {} into crane store {}",
            record.jib_length, self.model
        );
        Ok(())
    }

    /// Looks up the record with exactly this jib length.
    ///
    /// There is no tolerance: `12.005` does not find a row stored as `12.0`.
    /// A `-0.0` key matches `0.0` and comes back as `0.0`, since SQLite stores
    /// integral reals as integers.
    pub fn fetch(&self, jib_length: f64) -> Result<Option<CraneRecord>, StorageError> {
        let record = self
            .conn
            .query_row(SELECT_BY_JIB, params![jib_length], |row| {
                let mut values = [0.0; CraneRecord::FIELD_COUNT];
                for (idx, value) in values.iter_mut().enumerate() {
                    *value = row.get(idx)?;
                }
                Ok(CraneRecord::from_values(values))
            })
            .optional()?;
        debug!(
            "fetch jib length {jib_length} from crane store {}: {}",
            self.model,
            if record.is_some() { "found" } else { "absent" }
        );
        Ok(record)
    }

    /// Releases the connection.
    pub fn close(self) -> Result<(), StorageError> {
        debug!("closing crane store {}", self.model);
        self.conn.close().map_err(|(_, err)| StorageError::Sqlite(err))
    }
}
