//! # design-patterns
//!
//! Creational design patterns in Rust.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates, and hosts the two demo binaries:
//!
//! * `factory-menu`: pick a broker at runtime through a factory method.
//! * `singleton-demo`: fetch and invoke the process-wide printer.
//!
//! ## Quick start
//!
//! ```rust
//! use design_patterns::singleton::Printer;
//!
//! let a = Printer::instance();
//! let b = Printer::instance();
//! assert_eq!(a, b);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types: errors, identity handles, the double-checked singleton cell.
pub use dp_core as core;

/// The singleton demo service.
pub use dp_singleton as singleton;

/// The factory-method demo.
pub use dp_factory as factory;

/// Logger set-up shared by the binaries.
pub mod logging;
