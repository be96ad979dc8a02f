//! # dp-factory
//!
//! The factory-method demo. A [`Creator`] picks which [`Broker`] to build,
//! shared creator logic runs against whatever it built, and a text menu
//! chooses the creator at runtime.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Broker products (`Broker`, `Hsbc`, `Axis`).
pub mod broker;

/// Creators and the client code that drives them.
pub mod creator;

/// The interactive selection menu.
pub mod menu;

pub use broker::{Axis, Broker, Hsbc};
pub use creator::{client_code, Creator};
pub use menu::{run_menu, MenuChoice};
