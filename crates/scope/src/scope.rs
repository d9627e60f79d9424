// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped override installation with guaranteed restoration.
//!
//! Storage is a task-local stack snapshot: entering a scope installs the
//! parent stack plus the new handle for the extent of the body, and the
//! previous storage comes back when the body returns, unwinds, or the
//! wrapping future is dropped. Stacks are never shared between logical
//! tasks, so no cross-context synchronization is involved.

use crate::client::LmHandle;
use std::future::Future;
use tracing::debug;

tokio::task_local! {
    /// Active scoped overrides for the current logical task, innermost last.
    static ACTIVE: Vec<LmHandle>;
}

/// Run `body` with `lm` installed as the innermost scoped override.
///
/// Restoration is unconditional: the override is removed when `body`
/// returns or unwinds, and nested calls restore in exact reverse order.
/// A panic inside `body` propagates unchanged after restoration.
pub fn with_lm<R>(lm: LmHandle, body: impl FnOnce() -> R) -> R {
    ACTIVE.sync_scope(extended(lm), body)
}

/// Run `fut` with `lm` installed as the innermost scoped override for the
/// calling logical task.
///
/// The override follows the task across `.await` points and worker-thread
/// migration. Cancellation (dropping the future mid-flight) removes the
/// override as part of teardown, leaving nothing behind on the worker
/// thread.
pub async fn with_lm_async<F>(lm: LmHandle, fut: F) -> F::Output
where
    F: Future,
{
    ACTIVE.scope(extended(lm), fut).await
}

/// Innermost active scoped override for the calling context, if any.
///
/// Consults only the scope tier: never instance pins, never the global
/// default. Intended for diagnostics; consumers resolve through
/// [`crate::resolve`].
pub fn current_override() -> Option<LmHandle> {
    ACTIVE.try_with(|stack| stack.last().cloned()).ok().flatten()
}

/// Number of active scoped overrides in the calling context.
pub fn scope_depth() -> usize {
    ACTIVE.try_with(|stack| stack.len()).unwrap_or(0)
}

/// Snapshot of the ambient stack with `lm` pushed on top.
///
/// Evaluated at scope entry, so nested scopes see their parent's entries.
fn extended(lm: LmHandle) -> Vec<LmHandle> {
    let mut stack = ACTIVE.try_with(|stack| stack.clone()).unwrap_or_default();
    debug!(
        model = lm.model(),
        provider = lm.provider(),
        depth = stack.len() + 1,
        "entering LM scope"
    );
    stack.push(lm);
    stack
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
