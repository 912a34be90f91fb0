//! Append-only log of addresses that failed to parse

use crate::error::Result;
use crate::types::ParsedAddress;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Receives every address the parser could not validate.
///
/// Called with the record as extracted, before normalization. Errors are
/// reported by the parser and never change the parse result.
pub trait RejectLog: Send + Sync {
    fn record(&self, address: &ParsedAddress) -> Result<()>;
}

impl<T: RejectLog + ?Sized> RejectLog for Arc<T> {
    fn record(&self, address: &ParsedAddress) -> Result<()> {
        (**self).record(address)
    }
}

/// One rejected address as written to the log
#[derive(Debug, Serialize)]
pub struct RejectedAddress<'a> {
    pub logged_at: DateTime<Utc>,

    #[serde(flatten)]
    pub address: &'a ParsedAddress,
}

/// Writes each rejected address as one JSON object per line.
///
/// The file is opened in append mode for every record, so several parsers
/// (or processes) may share it.
#[derive(Debug, Clone)]
pub struct JsonLinesRejectLog {
    path: PathBuf,
}

impl JsonLinesRejectLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RejectLog for JsonLinesRejectLog {
    fn record(&self, address: &ParsedAddress) -> Result<()> {
        let entry = RejectedAddress {
            logged_at: Utc::now(),
            address,
        };

        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        Ok(())
    }
}
