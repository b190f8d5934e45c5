//! Per-class wrapper generation.
//!
//! For every retained class bucket this renders one C# unit containing, per
//! method, a delegate type bound to the method's signature and a public
//! method whose body invokes the native function at its fixed address
//! through a caller-supplied call template.

use crate::classmodel::ClassModel;
use crate::model::{ClassEntry, ClassFunctionEntry};
use crate::naming::{file_stem, sanitize};

use super::{map_type, GeneratedUnit, SOURCE_EXTENSION};

/// Default body template. Placeholders are part of the public contract:
/// `{address}` is the literal hex address, `{delegate}` the generated
/// delegate type name, `{args}` the comma-joined argument names in original
/// order.
pub const DEFAULT_CALL_TEMPLATE: &str =
    "return NativeCall.Invoke<{delegate}>({address})({args});";

/// Caller-facing knobs for wrapper emission.
#[derive(Debug, Clone)]
pub struct WrapperOptions {
    /// Optional namespace wrapped around every generated class.
    pub namespace: Option<String>,
    /// Call template interpolated into each method body.
    pub call_template: String,
}

impl Default for WrapperOptions {
    fn default() -> Self {
        Self { namespace: None, call_template: DEFAULT_CALL_TEMPLATE.to_string() }
    }
}

/// Decide whether a bucket becomes an emitted type.
///
/// Buckets whose sanitized name starts with an underscore or a lowercase
/// letter are grammar artifacts or primitive/builtin tokens (`int`, `bool`,
/// `undefined4`), never intended types.
fn is_emittable(sanitized_name: &str) -> bool {
    match sanitized_name.chars().next() {
        Some('_') => false,
        Some(c) => !c.is_lowercase(),
        None => false,
    }
}

/// Render every retained class bucket to a source unit.
///
/// Buckets that received no functions are skipped along with the filtered
/// names; everything else is rendered in bucket-token order.
pub fn emit_wrappers(model: &ClassModel, options: &WrapperOptions) -> Vec<GeneratedUnit> {
    model
        .classes
        .values()
        .filter(|entry| !entry.functions.is_empty())
        .filter(|entry| is_emittable(&sanitize(&entry.name)))
        .map(|entry| render_class(entry, options))
        .collect()
}

fn render_class(entry: &ClassEntry, options: &WrapperOptions) -> GeneratedUnit {
    let class_name = sanitize(&entry.name);
    let mut out = String::new();
    let indent = if options.namespace.is_some() { 1 } else { 0 };

    if let Some(ns) = &options.namespace {
        out.push_str(&format!("namespace {}\n{{\n", ns));
    }

    push_line(&mut out, indent, &format!("public class {}", class_name));
    push_line(&mut out, indent, "{");

    for (i, function) in entry.functions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_method(&mut out, indent + 1, function, &options.call_template);
    }

    push_line(&mut out, indent, "}");

    if options.namespace.is_some() {
        out.push_str("}\n");
    }

    GeneratedUnit {
        file_name: format!("{}{}", file_stem(&entry.name), SOURCE_EXTENSION),
        source: out,
    }
}

/// Emit the public method and its address-bound delegate.
///
/// The delegate name combines the sanitized method name with the lowercase
/// hex address, so two methods sharing a name but bound to different
/// addresses never collide.
fn render_method(out: &mut String, indent: usize, function: &ClassFunctionEntry, template: &str) {
    let method_name = sanitize(&function.name);
    let return_type = map_type(&sanitize(&function.return_type)).to_string();
    let delegate_name = format!("_{}_{:x}", method_name, function.address);

    let params: Vec<String> = function
        .params
        .iter()
        .map(|p| format!("{} {}", map_type(&sanitize(&p.ty)), sanitize(&p.name)))
        .collect();
    let param_list = params.join(", ");

    let arg_names: Vec<String> = function.params.iter().map(|p| sanitize(&p.name)).collect();

    let body = template
        .replace("{address}", &format!("0x{:x}", function.address))
        .replace("{delegate}", &delegate_name)
        .replace("{args}", &arg_names.join(", "));

    let modifier = if function.is_static { "static " } else { "" };

    push_line(
        out,
        indent,
        &format!("public {}{} {}({})", modifier, return_type, method_name, param_list),
    );
    push_line(out, indent, "{");
    push_line(out, indent + 1, &body);
    push_line(out, indent, "}");
    out.push('\n');
    push_line(
        out,
        indent,
        &format!("public delegate {} {}({});", return_type, delegate_name, param_list),
    );
}

fn push_line(out: &mut String, indent: usize, line: &str) {
    for _ in 0..indent {
        out.push_str("    ");
    }
    out.push_str(line);
    out.push('\n');
}
