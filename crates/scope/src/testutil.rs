// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for unit tests.

use parking_lot::{Mutex, MutexGuard};

static DEFAULT_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that mutate the process-wide default LM.
pub(crate) fn default_lock() -> MutexGuard<'static, ()> {
    DEFAULT_LOCK.lock()
}
