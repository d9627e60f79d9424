// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution capture and recording for test assertions.
//!
//! This crate records which LM handle served each resolution and from which
//! tier, so tests can assert on precedence and scope behavior without
//! instrumenting the code under test.

mod duration_millis;
mod log;
mod record;

pub use log::ResolutionLog;
pub use record::ResolvedLm;
