//! Source-text emitters.
//!
//! Both generators render to [`GeneratedUnit`] values; writing them to disk
//! is the caller's job. `wrapper` produces one C# unit per retained class,
//! `table` produces a single flat named-address unit.

pub mod table;
pub mod wrapper;

use serde::{Deserialize, Serialize};

/// File extension shared by every generated unit.
pub const SOURCE_EXTENSION: &str = ".cs";

/// One rendered output file: a name for the sink to use and the full source
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedUnit {
    pub file_name: String,
    pub source: String,
}

/// Primitive-type substitution table.
///
/// A closed, fixed set: the scalar C keywords plus the one mangled
/// `std::basic_string` spelling the demangler produces, mapped to the C#
/// string type. Deliberately not extensible — anything else passes through
/// as an opaque sanitized type name, and whether that type exists is the
/// reviewer's problem, not the generator's.
const PRIMITIVE_TYPES: &[(&str, &str)] = &[
    ("bool", "bool"),
    ("char", "char"),
    ("byte", "byte"),
    ("short", "short"),
    ("int", "int"),
    ("long", "long"),
    ("float", "float"),
    ("double", "double"),
    ("void", "void"),
    ("basic_string_char_struct_std_char_traits_char_class_std_allocator_char_", "string"),
];

/// Map a sanitized type token through the primitive table, passing unknown
/// tokens through unchanged.
pub(crate) fn map_type(sanitized: &str) -> &str {
    PRIMITIVE_TYPES
        .iter()
        .find(|(from, _)| *from == sanitized)
        .map(|(_, to)| *to)
        .unwrap_or(sanitized)
}
