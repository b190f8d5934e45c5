use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use wrapgen_core::classmodel::build_model;
use wrapgen_core::emit::wrapper::{emit_wrappers, WrapperOptions};
use wrapgen_core::model::BuildStats;
use wrapgen_core::records::read_records;

use crate::{ensure_out_dir, write_unit};

/// Machine-readable result of a `wrapper` run.
#[derive(Debug, Serialize)]
struct WrapperReport {
    stats: BuildStats,
    classes_emitted: usize,
    files: Vec<String>,
}

/// Generate per-class wrapper units from the input CSV.
pub fn wrapper_command(
    input: &str,
    out_dir: &str,
    namespace: Option<String>,
    call_template: String,
    json: bool,
) -> Result<()> {
    let records = read_records(Path::new(input))
        .with_context(|| format!("Failed to read function records from {input}"))?;

    let model = build_model(&records);
    let options = WrapperOptions { namespace, call_template };
    let units = emit_wrappers(&model, &options);

    let dir = ensure_out_dir(out_dir)?;
    let mut files = Vec::with_capacity(units.len());
    for unit in &units {
        let path = write_unit(&dir, unit)?;
        files.push(path.to_string_lossy().to_string());
    }

    if json {
        let report =
            WrapperReport { stats: model.stats, classes_emitted: units.len(), files };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let stats = &model.stats;
        println!("Analyzed {} records:", stats.total);
        println!("  Signatures parsed: {} / {}", stats.parsed, stats.total);
        println!("  Skipped (unparseable): {}", stats.unparsed);
        println!("  Statics dropped (no matching class): {}", stats.dropped_static);
        println!("Generated {} class units in {}", units.len(), dir.display());
        for file in &files {
            println!("  - {file}");
        }
    }

    Ok(())
}
