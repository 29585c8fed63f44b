use std::{borrow::Cow, path::Path};

use anyhow::Context;
use rusqlite::OpenFlags;

use crate::models::Timestamp;

pub struct SqliteController {
    connection: rusqlite::Connection,
}

impl SqliteController {
    /// Opens an existing database for reading and writing. The schema is owned
    /// by the application that created the file, so nothing is created here.
    pub fn open(database_path: &Path) -> anyhow::Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let connection =
            rusqlite::Connection::open_with_flags(plain_file_path(database_path), flags)
                .with_context(|| format!("Failed to open database at {}", database_path.display()))?;
        Ok(Self { connection })
    }

    /// Resets `discount` and `discount_expires_at` on every product whose
    /// expiry compares greater than `now`. Runs in a single transaction that
    /// rolls back if the statement fails.
    pub fn expire_discounts(&mut self, now: &Timestamp) -> anyhow::Result<usize> {
        let transaction = self.connection.transaction()?;
        let num_updated = transaction
            .execute(
                "UPDATE products SET discount = 0, discount_expires_at = NULL WHERE discount_expires_at > ?",
                (now.as_str(),),
            )
            .context("Failed to expire discounts")?;
        transaction.commit()?;
        Ok(num_updated)
    }
}

// The bundled SQLite is built with URI filenames enabled, which applies to any
// name starting with `file:` regardless of open flags.
fn plain_file_path(database_path: &Path) -> Cow<'_, Path> {
    if database_path.as_os_str().as_encoded_bytes().starts_with(b"file:") {
        Cow::Owned(Path::new(".").join(database_path))
    } else {
        Cow::Borrowed(database_path)
    }
}
