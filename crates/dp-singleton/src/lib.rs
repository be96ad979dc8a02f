//! # dp-singleton
//!
//! The singleton demo: one process-wide [`Printer`], built on first access
//! through a double-checked [`DoubleChecked`][dp_core::DoubleChecked] cell.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The shared printer service.
pub mod printer;

/// Multi-threaded invocation of the printer.
pub mod workers;

pub use printer::{Printer, MESSAGE};
pub use workers::run_workers;
