//! Signature grammar.
//!
//! Signatures come from an automated demangler upstream and are "mostly
//! regular", not valid C++ (Ghidra synthesizes names like `FUN_00123`), so
//! the grammar is an anchored pattern with named captures rather than a real
//! C++ parser:
//!
//! ```text
//! signature := returnType WS pointerStars? WS? funcName "(" paramList? ")"
//! paramList := param ("," WS? param)*
//! param     := paramType WS pointerStars? WS? paramName
//! ```
//!
//! The match is whole-or-nothing: any structural deviation (missing
//! separator, unbalanced parentheses, characters outside the token classes)
//! fails the entire signature. Trailing garbage after the closing parenthesis
//! is ignored. The parameter list is validated structurally inside the same
//! anchored match; individual parameters are then re-captured by running the
//! identical sub-pattern over the validated list.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{ParsedParam, ParsedSignature};

// Token classes: types tolerate template/namespace spellings
// (`Map<int,int>`, `std::string&`), function names are slightly narrower,
// parameter names additionally allow `.`. Pointer stars are captured
// separately so they can set the pointer flag and drop out of the token,
// whether written `Foo *`, `Foo * `, or glued as `Foo*`.
static SIGNATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<ret_type>[A-Za-z0-9<>,.:&_()\-]+)",
        r"(?:\s(?P<ret_ptr>\*+)?\s?|(?P<ret_ptr_glued>\*+)\s)",
        r"(?P<func_name>[A-Za-z0-9<>_()\-]+)",
        r"\((?P<params>(?:[A-Za-z0-9<>,.:&_()\-]+(?:\s\**\s?|\*+\s)[A-Za-z0-9<>_.()\-]+,?\s?)*)\)",
    ))
    .expect("signature regex should compile")
});

static PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<ty>[A-Za-z0-9<>,.:&_()\-]+)",
        r"(?:\s(?P<ptr>\*+)?\s?|(?P<ptr_glued>\*+)\s)",
        r"(?P<name>[A-Za-z0-9<>_.()\-]+),?\s?",
    ))
    .expect("parameter regex should compile")
});

/// Parse one signature string into its structured form.
///
/// Returns `None` when the signature does not match the grammar. That is an
/// expected, countable outcome — callers skip the record and move on.
pub fn parse_signature(text: &str) -> Option<ParsedSignature> {
    let caps = SIGNATURE_RE.captures(text)?;

    let return_is_pointer =
        caps.name("ret_ptr").is_some() || caps.name("ret_ptr_glued").is_some();

    let params_text = caps.name("params").map(|m| m.as_str()).unwrap_or("");
    let params: Vec<ParsedParam> = PARAM_RE
        .captures_iter(params_text)
        .map(|p| ParsedParam {
            ty: p["ty"].to_string(),
            is_pointer: p.name("ptr").is_some() || p.name("ptr_glued").is_some(),
            name: p["name"].to_string(),
        })
        .collect();

    Some(ParsedSignature {
        return_type: caps["ret_type"].to_string(),
        return_is_pointer,
        function_name: caps["func_name"].to_string(),
        params,
    })
}
