// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for resolution and settings loading.

use thiserror::Error;

/// Failure to produce an active LM handle.
///
/// Resolution never retries: a missing configuration is a setup bug, not a
/// transient condition.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// No instance pin, no active scoped override, and no global default.
    #[error(
        "no LM configured: install a global default, enter a scope, or pin an instance override"
    )]
    NoConfiguration,
}

/// Failure to load or parse bootstrap settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file could not be read.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML or has unknown fields.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}
