//! Flat named-address table generation.
//!
//! The simpler of the two modes: one member per record, named from the
//! demangled function name plus the address, valued at the address. No
//! signature parsing is involved — this mode works even for rows the wrapper
//! grammar rejects.

use serde::{Deserialize, Serialize};

use crate::model::FunctionRecord;
use crate::naming::{file_stem, member_name, sanitize};

use super::{GeneratedUnit, SOURCE_EXTENSION};

/// Whether members render as `public const long` fields or enum values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableKind {
    Const,
    Enum,
}

/// Caller-facing knobs for table emission.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Name of the generated class or enum.
    pub class_name: String,
    /// Optional namespace wrapped around the generated type.
    pub namespace: Option<String>,
    pub kind: TableKind,
    /// Attach each record's raw signature as an XML doc comment.
    pub signature_docs: bool,
}

impl TableOptions {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            namespace: None,
            kind: TableKind::Const,
            signature_docs: true,
        }
    }
}

/// Render the whole record list as one named-address unit.
pub fn emit_table(records: &[FunctionRecord], options: &TableOptions) -> GeneratedUnit {
    let class_name = sanitize(&options.class_name);
    let mut out = String::new();
    let indent = if options.namespace.is_some() { 1 } else { 0 };

    if let Some(ns) = &options.namespace {
        out.push_str(&format!("namespace {}\n{{\n", ns));
    }

    let declaration = match options.kind {
        TableKind::Const => format!("public class {}", class_name),
        TableKind::Enum => format!("public enum {} : long", class_name),
    };
    push_line(&mut out, indent, &declaration);
    push_line(&mut out, indent, "{");

    for record in records {
        if options.signature_docs {
            push_line(
                &mut out,
                indent + 1,
                &format!("/// <summary>{}</summary>", escape_xml(&record.signature)),
            );
        }
        let member = format!("{}_{:x}", member_name(&record.name), record.address);
        let line = match options.kind {
            TableKind::Const => {
                format!("public const long {} = 0x{:x};", member, record.address)
            }
            TableKind::Enum => format!("{} = 0x{:x},", member, record.address),
        };
        push_line(&mut out, indent + 1, &line);
    }

    push_line(&mut out, indent, "}");

    if options.namespace.is_some() {
        out.push_str("}\n");
    }

    GeneratedUnit {
        file_name: format!("{}{}", file_stem(&options.class_name), SOURCE_EXTENSION),
        source: out,
    }
}

/// Escape the XML metacharacters a signature may contain before it lands in
/// a doc comment.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn push_line(out: &mut String, indent: usize, line: &str) {
    for _ in 0..indent {
        out.push_str("    ");
    }
    out.push_str(line);
    out.push('\n');
}
