// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Global default registration and three-tier resolution.

use crate::client::LmHandle;
use crate::error::ResolveError;
use crate::scope;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Process-wide fallback handle. Writes are last-write-wins; readers see
/// either the old or the new handle, never a partial state.
static DEFAULT: RwLock<Option<LmHandle>> = RwLock::new(None);

/// Which tier served a resolution.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Object-level pinned handle.
    Instance,
    /// Innermost active scoped override.
    Scope,
    /// Process-wide default.
    Default,
}

/// A resolved handle together with the tier that produced it.
#[derive(Clone)]
pub struct Resolution {
    /// The handle to use for this operation.
    pub lm: LmHandle,
    /// Tier the handle came from.
    pub source: ResolutionSource,
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolution")
            .field("model", &self.lm.model())
            .field("provider", &self.lm.provider())
            .field("source", &self.source)
            .finish()
    }
}

/// Install or replace the process-wide default LM.
///
/// Last write wins. Contexts inside an active scoped override are
/// unaffected: they keep resolving from their scope until it exits.
pub fn set_default_lm(lm: LmHandle) {
    debug!(
        model = lm.model(),
        provider = lm.provider(),
        "installing default LM"
    );
    *DEFAULT.write() = Some(lm);
}

/// Current process-wide default, if one has been installed.
pub fn default_lm() -> Option<LmHandle> {
    DEFAULT.read().clone()
}

/// Resolve the active LM for a consumer.
///
/// Precedence: the `instance` pin, then the calling context's innermost
/// scoped override, then the global default. Side-effect-free; call it per
/// logical operation rather than caching the handle, so scope changes are
/// observed.
pub fn resolve(instance: Option<&LmHandle>) -> Result<LmHandle, ResolveError> {
    resolve_traced(instance).map(|resolution| resolution.lm)
}

/// Resolve and report which tier served the call.
pub fn resolve_traced(instance: Option<&LmHandle>) -> Result<Resolution, ResolveError> {
    if let Some(lm) = instance {
        trace!(model = lm.model(), "resolved from instance pin");
        return Ok(Resolution {
            lm: lm.clone(),
            source: ResolutionSource::Instance,
        });
    }
    if let Some(lm) = scope::current_override() {
        trace!(model = lm.model(), "resolved from active scope");
        return Ok(Resolution {
            lm,
            source: ResolutionSource::Scope,
        });
    }
    match default_lm() {
        Some(lm) => {
            trace!(model = lm.model(), "resolved from global default");
            Ok(Resolution {
                lm,
                source: ResolutionSource::Default,
            })
        }
        None => Err(ResolveError::NoConfiguration),
    }
}

#[cfg(test)]
pub(crate) fn clear_default_lm() {
    *DEFAULT.write() = None;
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
