//! # wp-core
//!
//! Core types and error definitions shared by the wanphra crates.
//!
//! This crate provides the foundational building blocks used across the
//! workspace: the error hierarchy with its `ensure!` / `fail!` macros, and
//! the process-wide [`Settings`] that pins the evaluation date ("today").

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
