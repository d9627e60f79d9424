// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped language-model context overrides.
//!
//! Resolves the active LM client for a consumer through three tiers:
//! an object-level pin, the innermost active scoped override, then the
//! process-wide default. Scoped overrides are installed for the extent of
//! a closure or future and removed on every exit path (return, unwind, or
//! cancellation), isolated per logical task.
//!
//! ```
//! use lmscope::{resolve, set_default_lm, with_lm, StaticLm};
//!
//! set_default_lm(StaticLm::handle("gpt-4o-mini", "openai"));
//!
//! let fast = StaticLm::handle("claude-haiku", "anthropic");
//! let model = with_lm(fast, || {
//!     resolve(None).map(|lm| lm.model().to_string())
//! });
//! assert_eq!(model.unwrap(), "claude-haiku");
//!
//! // Outside the scope the default is visible again.
//! assert_eq!(resolve(None).unwrap().model(), "gpt-4o-mini");
//! ```

pub mod client;
pub mod error;
pub mod instance;
pub mod registry;
pub mod scope;
pub mod settings;

pub use client::{LmClient, LmHandle, StaticLm};
pub use error::{ResolveError, SettingsError};
pub use instance::{HasLm, InstanceLm};
pub use registry::{
    default_lm, resolve, resolve_traced, set_default_lm, Resolution, ResolutionSource,
};
pub use scope::{current_override, scope_depth, with_lm, with_lm_async};
pub use settings::{DefaultLmConfig, ScopeSettings};

#[cfg(test)]
pub(crate) mod testutil;
