use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use wrapgen_core::emit::table::{emit_table, TableKind, TableOptions};
use wrapgen_core::records::read_records;

use crate::{ensure_out_dir, write_unit};

/// CLI-facing spelling of the table member kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableKindArg {
    /// `public const long` fields.
    Const,
    /// Members of an `enum : long`.
    Enum,
}

impl From<TableKindArg> for TableKind {
    fn from(kind: TableKindArg) -> Self {
        match kind {
            TableKindArg::Const => TableKind::Const,
            TableKindArg::Enum => TableKind::Enum,
        }
    }
}

/// Machine-readable result of a `gen-table` run.
#[derive(Debug, Serialize)]
struct TableReport {
    records: usize,
    file: String,
}

/// Generate a flat named-address table from the input CSV.
#[allow(clippy::too_many_arguments)]
pub fn gen_table_command(
    input: &str,
    class_name: &str,
    namespace: Option<String>,
    kind: TableKindArg,
    signature_docs: bool,
    out_dir: &str,
    json: bool,
) -> Result<()> {
    let records = read_records(Path::new(input))
        .with_context(|| format!("Failed to read function records from {input}"))?;

    let options = TableOptions {
        class_name: class_name.to_string(),
        namespace,
        kind: kind.into(),
        signature_docs,
    };
    let unit = emit_table(&records, &options);

    let dir = ensure_out_dir(out_dir)?;
    let path = write_unit(&dir, &unit)?;

    if json {
        let report =
            TableReport { records: records.len(), file: path.to_string_lossy().to_string() };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Generated address table:");
        println!("  Records: {}", records.len());
        println!("  File: {}", path.display());
    }

    Ok(())
}
