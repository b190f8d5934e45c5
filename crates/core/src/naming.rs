//! Identifier sanitization for generated code.
//!
//! Signature and type tokens arrive full of characters that are illegal in
//! identifiers (`::`, `<>`, `*`, spaces). [`sanitize`] maps any token to a
//! safe identifier; [`cap_length`] bounds it for targets with length limits.
//!
//! This module knows nothing about target-language reserved words; callers
//! handle any keyword escaping themselves.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum length of a generated member identifier.
pub const MEMBER_NAME_MAX: usize = 256;

/// Maximum length of a generated file-name stem. File systems are stricter
/// than compilers, so this cap is independent of [`MEMBER_NAME_MAX`].
pub const FILE_NAME_MAX: usize = 64;

/// Suffix appended when truncation occurs, so collisions from truncated
/// names are visibly flagged instead of silent.
pub const TRUNCATION_MARKER: &str = "_etc";

static NON_IDENT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9a-zA-Z]+").expect("sanitizer regex should compile"));

/// Replace every run of non-alphanumeric characters with a single underscore.
///
/// Pure and deterministic; already-sanitized input is a fixed point. Quote
/// characters are replaced explicitly as well, covering inputs where a quote
/// has already been isolated by earlier processing.
pub fn sanitize(raw: &str) -> String {
    NON_IDENT_RUN.replace_all(raw, "_").replace('"', "_").replace('\'', "_")
}

/// Cap `value` at `max` characters.
///
/// Over-long values are truncated so that, with [`TRUNCATION_MARKER`]
/// appended, the result is exactly `max` characters long.
pub fn cap_length(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let mut capped: String =
            value.chars().take(max.saturating_sub(TRUNCATION_MARKER.len())).collect();
        capped.push_str(TRUNCATION_MARKER);
        capped
    } else {
        value.to_string()
    }
}

/// Sanitize and cap a member identifier in one step.
pub fn member_name(raw: &str) -> String {
    cap_length(&sanitize(raw), MEMBER_NAME_MAX)
}

/// Sanitize and cap a file-name stem in one step.
pub fn file_stem(raw: &str) -> String {
    cap_length(&sanitize(raw), FILE_NAME_MAX)
}
