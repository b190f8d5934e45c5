//! wrapgen-core
//!
//! Core library for turning Ghidra CSV function exports into generated
//! source code: flat named-address tables, or per-class wrappers that bind
//! each native function to its fixed memory address.
//!
//! This crate defines record ingestion, the signature grammar, class-model
//! construction, identifier sanitization, and the code emitters. The goal is
//! to keep all substantive logic here so it is fully testable and reusable
//! from multiple frontends (CLI, build scripts, etc.).

pub mod classmodel;
pub mod emit;
pub mod model;
pub mod naming;
pub mod records;
pub mod signature;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
