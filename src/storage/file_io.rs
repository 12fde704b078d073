//! JSON documents on disk
//!
//! A document that does not exist yet reads as `T::default()`. Writes land in
//! a sibling `.json.tmp` file that is synced and then renamed over the
//! target, so a reader sees either the previous document or the new one.

use std::fmt;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{TrackerError, TrackerResult};

pub fn read_json<T, P>(path: P) -> TrackerResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("read", path, e)),
    };
    serde_json::from_slice(&bytes).map_err(|e| storage_error("parse", path, e))
}

/// Replace the document at `path`, creating parent directories as needed
pub fn write_json_atomic<T, P>(path: P, data: &T) -> TrackerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = serde_json::to_vec_pretty(data).map_err(|e| storage_error("serialize", path, e))?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create the directory of", path, e))?;
    }

    let staging = path.with_extension("json.tmp");
    let replaced = File::create(&staging)
        .and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&staging, path));

    replaced.map_err(|e| {
        let _ = fs::remove_file(&staging);
        storage_error("write", path, e)
    })
}

fn storage_error(action: &str, path: &Path, err: impl fmt::Display) -> TrackerError {
    TrackerError::Storage(format!("cannot {} {}: {}", action, path.display(), err))
}
