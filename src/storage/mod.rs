//! Address book persistence.
//!
//! An explicit serialize/deserialize contract over the book: the file
//! holds the ordered record sequence as JSON. Loading a missing file
//! yields an empty book, so a fresh install starts clean.

use crate::book::AddressBook;
use crate::error::StorageResult;
use std::fs;
use std::path::Path;
use tracing::info;

/// Write the whole book to `path` as pretty-printed JSON.
pub fn save(book: &AddressBook, path: &Path) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(book)?;
    fs::write(path, json)?;
    info!(path = %path.display(), records = book.len(), "address book saved");
    Ok(())
}

/// Read a book back from `path`.
///
/// A missing file is not an error: it loads as an empty book.
pub fn load(path: &Path) -> StorageResult<AddressBook> {
    if !path.exists() {
        info!(path = %path.display(), "no address book file, starting empty");
        return Ok(AddressBook::new());
    }
    let json = fs::read_to_string(path)?;
    let book = serde_json::from_str(&json)?;
    Ok(book)
}
