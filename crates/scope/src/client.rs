// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! LM client contract and handles.

use std::fmt;
use std::sync::Arc;

/// Narrow contract a language-model client exposes to the scoping machinery.
///
/// The resolver never calls into the model; it only moves handles between
/// tiers. `model` and `provider` exist for diagnostics and capture records.
pub trait LmClient: Send + Sync {
    /// Model identifier reported by this client.
    fn model(&self) -> &str;

    /// Provider label (e.g. "openai", "local").
    fn provider(&self) -> &str {
        "unknown"
    }
}

/// Shared handle to a configured LM client.
///
/// Handles are cheap to clone; resolution returns a fresh clone each call so
/// consumers never hold the scoping machinery's own reference.
pub type LmHandle = Arc<dyn LmClient>;

/// Minimal client carrying only identity.
///
/// Used for configuration bootstrap and as a stand-in client in tests; real
/// provider clients implement [`LmClient`] themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticLm {
    model: String,
    provider: String,
}

impl StaticLm {
    /// Create a client with the given model and provider labels.
    pub fn new(model: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            provider: provider.into(),
        }
    }

    /// Create a ready-to-install handle.
    pub fn handle(model: impl Into<String>, provider: impl Into<String>) -> LmHandle {
        Arc::new(Self::new(model, provider))
    }
}

impl fmt::Debug for dyn LmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LmClient")
            .field("model", &self.model())
            .field("provider", &self.provider())
            .finish()
    }
}

impl LmClient for StaticLm {
    fn model(&self) -> &str {
        &self.model
    }

    fn provider(&self) -> &str {
        &self.provider
    }
}

impl fmt::Display for StaticLm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider, self.model)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
