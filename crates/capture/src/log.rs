// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution log implementation.

use crate::record::ResolvedLm;
use lmscope::{Resolution, ResolutionSource};
use parking_lot::Mutex;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// Log of resolutions recorded during a test run.
pub struct ResolutionLog {
    start: Instant,
    resolutions: Arc<Mutex<Vec<ResolvedLm>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl ResolutionLog {
    /// Create a new in-memory log.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            resolutions: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a log that also writes each record to a file (JSONL format).
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            start: Instant::now(),
            resolutions: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record a resolution.
    pub fn record(&self, resolution: &Resolution) {
        let mut resolutions = self.resolutions.lock();
        let record = ResolvedLm {
            seq: resolutions.len() as u64,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            model: resolution.lm.model().to_string(),
            provider: resolution.lm.provider().to_string(),
            source: resolution.source,
        };

        resolutions.push(record.clone());

        // Write to file if configured
        if let Some(ref writer) = self.file_writer {
            use std::io::Write;
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&record) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }
    }

    /// Get all recorded resolutions.
    pub fn resolutions(&self) -> Vec<ResolvedLm> {
        self.resolutions.lock().clone()
    }

    /// Get the last N resolutions.
    pub fn last(&self, n: usize) -> Vec<ResolvedLm> {
        let all = self.resolutions.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Count resolutions matching a predicate.
    pub fn count<F: Fn(&ResolvedLm) -> bool>(&self, pred: F) -> usize {
        self.resolutions.lock().iter().filter(|r| pred(r)).count()
    }

    /// Find resolutions by model identifier.
    pub fn find_by_model(&self, model: &str) -> Vec<ResolvedLm> {
        self.resolutions
            .lock()
            .iter()
            .filter(|r| r.model == model)
            .cloned()
            .collect()
    }

    /// Find resolutions served by the given tier.
    pub fn from_tier(&self, source: ResolutionSource) -> Vec<ResolvedLm> {
        self.resolutions
            .lock()
            .iter()
            .filter(|r| r.source == source)
            .cloned()
            .collect()
    }

    /// Get the total number of resolutions.
    pub fn len(&self) -> usize {
        self.resolutions.lock().len()
    }

    /// Check if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.resolutions.lock().is_empty()
    }

    /// Clear all recorded resolutions.
    pub fn clear(&self) {
        self.resolutions.lock().clear();
    }
}

impl Default for ResolutionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ResolutionLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            resolutions: Arc::clone(&self.resolutions),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
