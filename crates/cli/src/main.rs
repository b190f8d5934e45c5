use anyhow::Result;
use clap::{Parser, Subcommand};

use ghidra_wrapgen::commands::{gen_table_command, wrapper_command, TableKindArg};
use wrapgen_core::emit::wrapper::DEFAULT_CALL_TEMPLATE;

/// Ghidra CSV code-generation CLI.
///
/// This CLI is a thin wrapper around `wrapgen-core` (exposed in code as
/// `wrapgen_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "ghidra-wrapgen",
    version,
    about = "Generates address tables and native wrappers from Ghidra CSV exports",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one flat named-address table from a CSV export.
    ///
    /// Every row becomes one member named from the demangled function name
    /// and the address; no signature parsing is involved.
    GenTable {
        /// Path to the Ghidra CSV export.
        input: String,

        /// Name of the generated class or enum.
        class_name: String,

        /// Optional namespace for the generated declarations.
        #[arg(short = 'n', long)]
        namespace: Option<String>,

        /// Member style: const fields or enum values.
        #[arg(short = 't', long = "type", value_enum, default_value_t = TableKindArg::Const)]
        kind: TableKindArg,

        /// Do not attach each row's signature as an XML doc comment.
        #[arg(long, default_value_t = false)]
        no_signature_docs: bool,

        /// Directory for the generated file. Defaults to the current directory.
        #[arg(short = 'o', long, default_value = ".")]
        out_dir: String,

        /// Emit a JSON report instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Generate per-class wrapper source files from a CSV export.
    ///
    /// Signatures are parsed, functions are grouped into class buckets
    /// (first parameter literally named `this` marks an instance method),
    /// and each retained class is rendered as one source unit binding every
    /// method to its fixed address.
    Wrapper {
        /// Path to the Ghidra CSV export.
        input: String,

        /// Directory the generated units are written to (created if missing).
        out_dir: String,

        /// Optional namespace for the generated declarations.
        #[arg(short = 'n', long)]
        namespace: Option<String>,

        /// Method-body template. Placeholders: {address}, {delegate}, {args}.
        #[arg(long, default_value = DEFAULT_CALL_TEMPLATE)]
        call_template: String,

        /// Emit a JSON report instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenTable {
            input,
            class_name,
            namespace,
            kind,
            no_signature_docs,
            out_dir,
            json,
        } => gen_table_command(
            &input,
            &class_name,
            namespace,
            kind,
            !no_signature_docs,
            &out_dir,
            json,
        )?,
        Command::Wrapper { input, out_dir, namespace, call_template, json } => {
            wrapper_command(&input, &out_dir, namespace, call_template, json)?
        }
    }

    Ok(())
}
