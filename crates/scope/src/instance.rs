// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Object-level LM pins, the highest-precedence tier.

use crate::client::LmHandle;
use crate::error::ResolveError;
use crate::registry;

/// Optional object-level pinned LM.
///
/// Embed one in a consuming type to let callers pin a specific client to
/// that object while everything else follows scoped overrides and the
/// global default:
///
/// ```
/// use lmscope::{InstanceLm, StaticLm};
///
/// struct Summarizer {
///     lm: InstanceLm,
/// }
///
/// let pinned = Summarizer {
///     lm: InstanceLm::pin(StaticLm::handle("claude-opus", "anthropic")),
/// };
/// assert_eq!(pinned.lm.resolve().unwrap().model(), "claude-opus");
/// ```
#[derive(Clone, Default)]
pub struct InstanceLm {
    pinned: Option<LmHandle>,
}

impl InstanceLm {
    /// Holder with no pin; resolution falls through to the scope and
    /// default tiers.
    pub fn unset() -> Self {
        Self::default()
    }

    /// Holder pinned at construction.
    pub fn pin(lm: LmHandle) -> Self {
        Self { pinned: Some(lm) }
    }

    /// Pin or replace the handle after construction.
    pub fn set(&mut self, lm: LmHandle) {
        self.pinned = Some(lm);
    }

    /// Remove the pin.
    pub fn clear(&mut self) {
        self.pinned = None;
    }

    /// The pinned handle, if any.
    pub fn get(&self) -> Option<&LmHandle> {
        self.pinned.as_ref()
    }

    /// Resolve through the full three-tier scheme with this pin applied.
    pub fn resolve(&self) -> Result<LmHandle, ResolveError> {
        registry::resolve(self.pinned.as_ref())
    }
}

/// Consumers that carry an optional instance-level LM pin.
///
/// `lm` resolves per call; implementations must not cache the returned
/// handle beyond a single logical operation, so scope changes are observed
/// on the next call.
pub trait HasLm {
    /// The object's pinned override, if any.
    fn lm_override(&self) -> Option<&LmHandle>;

    /// Active LM for this object at this call.
    fn lm(&self) -> Result<LmHandle, ResolveError> {
        registry::resolve(self.lm_override())
    }
}

#[cfg(test)]
#[path = "instance_tests.rs"]
mod tests;
