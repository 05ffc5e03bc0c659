// File: src/persistence.rs
use crate::cache::{CacheSnapshot, MemoCache, SNAPSHOT_FORMAT};
use crate::error::PersistenceError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes the cache contents to `path`, replacing any earlier snapshot atomically.
pub fn save_to_disk(cache: &MemoCache, path: &Path) -> Result<(), PersistenceError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let snapshot = cache.snapshot();
    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    debug!(entries = snapshot.len(), path = %path.display(), "saved cache snapshot");
    Ok(())
}

/// Reads a snapshot written by this build. Snapshots from another build, or
/// with entries that do not match a fresh computation, are rejected.
pub fn load_from_disk(path: &Path) -> Result<CacheSnapshot, PersistenceError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot: CacheSnapshot = bincode::deserialize_from(reader)?;
    if snapshot.format != SNAPSHOT_FORMAT {
        return Err(PersistenceError::FormatMismatch {
            found: snapshot.format,
            expected: SNAPSHOT_FORMAT.to_string(),
        });
    }
    if let Some(table) = snapshot.first_inconsistent_table() {
        return Err(PersistenceError::Inconsistent { table });
    }
    debug!(entries = snapshot.len(), path = %path.display(), "loaded cache snapshot");
    Ok(snapshot)
}

/// Builds a cache from `path`, or an empty one if the file does not exist yet.
pub fn load_cache_or_new(path: &Path) -> Result<MemoCache, PersistenceError> {
    let cache = MemoCache::in_memory();
    match load_from_disk(path) {
        Ok(snapshot) => cache.restore(snapshot),
        Err(PersistenceError::Io(e)) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    Ok(cache)
}
