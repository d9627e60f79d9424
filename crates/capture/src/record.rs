// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded resolution entries.

use lmscope::ResolutionSource;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// One recorded resolution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolvedLm {
    /// Zero-based order of this resolution within its log.
    pub seq: u64,
    /// Wall-clock time of the resolution.
    pub timestamp: SystemTime,
    /// Time since the log was created.
    #[serde(with = "crate::duration_millis")]
    pub elapsed: Duration,
    /// Model identifier of the resolved handle.
    pub model: String,
    /// Provider label of the resolved handle.
    pub provider: String,
    /// Tier that served the resolution.
    pub source: ResolutionSource,
}
