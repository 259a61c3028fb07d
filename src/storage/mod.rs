//! SQLite-backed record stores.
//!
//! Each crane model gets its own `<id>_crane.db` file under `CraneData/`;
//! every mast record shares `MastData/mast_data.db`. A store handle owns its
//! connection from [`StoreManager::open_crane`] / [`StoreManager::open_mast`]
//! until `close` (or drop).

use std::fs;
use std::path::Path;

use rusqlite::Connection;

mod crane;
mod error;
mod manager;
mod mast;

pub use crane::CraneStore;
pub use error::StorageError;
pub use manager::StoreManager;
pub use mast::MastStore;

/// Opens the SQLite file at `path` and ensures its table exists.
///
/// Creates the parent directory first. Returns `true` alongside the
/// connection when the file did not exist before.
pub(super) fn open_table(
    path: &Path,
    create_table: &str,
) -> Result<(Connection, bool), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let created = !path.is_file();
    let conn = Connection::open(path)?;
    conn.execute(create_table, [])?;
    Ok((conn, created))
}
