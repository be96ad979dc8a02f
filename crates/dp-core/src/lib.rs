//! # dp-core
//!
//! Core types, traits, and error definitions for design-patterns.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace – the error hierarchy, the identity `Handle`, and the
//! double-checked singleton cell behind every global access point.

#![warn(missing_docs)]
#![deny(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types.
pub mod errors;

/// Identity handle to a shared value (`Handle<'a, T>`).
pub mod handle;

/// Design patterns: singleton.
pub mod patterns;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use handle::Handle;
pub use patterns::singleton::DoubleChecked;
