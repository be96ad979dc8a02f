//! Patterns sub-module: singleton.

#[allow(unsafe_code)]
pub mod singleton;
