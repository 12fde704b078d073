//! JSON-lines audit log on disk

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, ErrorKind, Write};
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};

use super::entry::AuditEntry;

/// Appends [`AuditEntry`] lines to a file and reads them back.
///
/// A log that was never written reads as empty. Blank lines are ignored.
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry; the line is flushed before this returns
    pub fn log(&self, entry: &AuditEntry) -> TrackerResult<()> {
        let mut line = serde_json::to_string(entry).map_err(|e| {
            TrackerError::Json(format!("audit entry for expense {}: {}", entry.expense_id, e))
        })?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_error("open", e))?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| self.io_error("append to", e))
    }

    /// Every entry in the order it was written
    pub fn read_all(&self) -> TrackerResult<Vec<AuditEntry>> {
        let Some(reader) = self.open_reader()? else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| self.io_error("read", e))?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).map_err(|e| {
                TrackerError::Json(format!(
                    "{} line {}: {}",
                    self.log_path.display(),
                    index + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// The last `count` entries, still oldest first
    pub fn read_recent(&self, count: usize) -> TrackerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let older = entries.len().saturating_sub(count);
        entries.drain(..older);
        Ok(entries)
    }

    pub fn entry_count(&self) -> TrackerResult<usize> {
        let Some(reader) = self.open_reader()? else {
            return Ok(0);
        };

        let mut count = 0;
        for line in reader.lines() {
            if !line.map_err(|e| self.io_error("read", e))?.trim().is_empty() {
                count += 1;
            }
        }
        Ok(count)
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }

    fn open_reader(&self) -> TrackerResult<Option<BufReader<File>>> {
        match File::open(&self.log_path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error("open", e)),
        }
    }

    fn io_error(&self, action: &str, err: io::Error) -> TrackerError {
        TrackerError::Io(format!(
            "cannot {} audit log {}: {}",
            action,
            self.log_path.display(),
            err
        ))
    }
}
