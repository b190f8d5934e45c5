//! Core data model for function records, parsed signatures, and class buckets.
//!
//! Everything in here is a plain value type:
//! - `FunctionRecord` is one row of the Ghidra CSV export, read-only after ingestion.
//! - `ParsedSignature` is the structured form of one signature string.
//! - `ClassEntry` and friends are the grouping of functions into emitted types.

use serde::{Deserialize, Serialize};

/// One row of native-function metadata from the Ghidra export.
///
/// The address is already decoded from the prefix-less hex column. `size` is
/// carried through for completeness but the pipeline never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Ghidra label column; doubles as the namespace key for static attachment.
    pub label: String,
    pub address: u64,
    /// Free-text signature, not guaranteed to be valid C++.
    pub signature: String,
    pub name: String,
    pub size: String,
}

impl FunctionRecord {
    pub fn new(
        label: impl Into<String>,
        address: u64,
        signature: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            address,
            signature: signature.into(),
            name: name.into(),
            size: String::new(),
        }
    }
}

/// One parameter recovered from a signature string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedParam {
    pub ty: String,
    pub is_pointer: bool,
    pub name: String,
}

/// Structured form of one signature string.
///
/// Produced by [`crate::signature::parse_signature`]; absence (no match) is an
/// expected outcome for irregular signatures, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSignature {
    pub return_type: String,
    pub return_is_pointer: bool,
    pub function_name: String,
    pub params: Vec<ParsedParam>,
}

/// One parameter of a method attributed to a class bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFunctionParamEntry {
    pub ty: String,
    pub is_pointer: bool,
    pub name: String,
}

/// One method attributed to a class bucket.
///
/// For instance methods (`is_static == false`) the leading `this` receiver
/// parameter has already been dropped; `params` holds the remaining parameters
/// in their original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFunctionEntry {
    pub is_static: bool,
    pub return_type: String,
    pub return_is_pointer: bool,
    pub name: String,
    pub address: u64,
    pub params: Vec<ClassFunctionParamEntry>,
}

/// Grouping of all methods attributed to one raw type token.
///
/// Identity is the token exactly as it appeared in a signature, before
/// sanitization. Two tokens that sanitize to the same identifier are distinct
/// buckets; collisions are a render-time concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub name: String,
    pub functions: Vec<ClassFunctionEntry>,
}

impl ClassEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), functions: Vec::new() }
    }
}

/// Counters reported at the end of a model-building pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Records seen.
    pub total: usize,
    /// Records whose signature matched the grammar.
    pub parsed: usize,
    /// Records skipped because the signature did not match.
    pub unparsed: usize,
    /// Static candidates dropped because no bucket matched the record label.
    pub dropped_static: usize,
}
