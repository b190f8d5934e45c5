//! Class-model construction.
//!
//! Groups parsed functions into class buckets in a single pass over the
//! record stream. The resulting map is built once by this module and treated
//! as read-only by the emitters — one writer phase, then one reader phase.

use std::collections::BTreeMap;

use crate::model::{
    BuildStats, ClassEntry, ClassFunctionEntry, ClassFunctionParamEntry, FunctionRecord,
    ParsedSignature,
};
use crate::signature::parse_signature;

/// Name that marks a leading parameter as the implicit receiver. Detection is
/// entirely name-based; the parameter's type only decides which class owns
/// the method.
const RECEIVER_PARAM: &str = "this";

/// The full grouping of a run: raw-type-token buckets plus pass counters.
#[derive(Debug, Clone, Default)]
pub struct ClassModel {
    /// Buckets keyed by raw type token, iterated in token order so emission
    /// is deterministic.
    pub classes: BTreeMap<String, ClassEntry>,
    pub stats: BuildStats,
}

impl ClassModel {
    /// Convenience accessor for a bucket by raw token.
    pub fn class(&self, token: &str) -> Option<&ClassEntry> {
        self.classes.get(token)
    }
}

/// Build the class model from all records.
///
/// Per record: parse the signature (skip and count on failure), make sure
/// buckets exist for the return type and every parameter type, then attribute
/// the function:
///
/// - a first parameter literally named `this` makes it an instance method of
///   the class named by that parameter's type, recorded without the receiver;
/// - otherwise it is a static candidate attached to the bucket whose token
///   equals the record label — if no such bucket exists yet, it is dropped.
///   That drop is silent by design (intent of the source behavior is
///   unclear); the count is still reported so a run can see it happened.
///
/// Methods append in input-record order. No sorting, no dedup: two records
/// parsing to the same name and address yield two entries.
pub fn build_model(records: &[FunctionRecord]) -> ClassModel {
    let mut model = ClassModel::default();
    model.stats.total = records.len();

    for record in records {
        let Some(parsed) = parse_signature(&record.signature) else {
            model.stats.unparsed += 1;
            continue;
        };
        model.stats.parsed += 1;

        ensure_bucket(&mut model.classes, &parsed.return_type);
        for param in &parsed.params {
            ensure_bucket(&mut model.classes, &param.ty);
        }

        attribute_function(&mut model, record, &parsed);
    }

    model
}

fn ensure_bucket(classes: &mut BTreeMap<String, ClassEntry>, token: &str) {
    if !classes.contains_key(token) {
        classes.insert(token.to_string(), ClassEntry::new(token));
    }
}

fn attribute_function(model: &mut ClassModel, record: &FunctionRecord, parsed: &ParsedSignature) {
    let is_receiver_call =
        parsed.params.first().map(|p| p.name == RECEIVER_PARAM).unwrap_or(false);

    if is_receiver_call {
        let owner = parsed.params[0].ty.clone();
        let entry = function_entry(record, parsed, false, 1);
        model
            .classes
            .get_mut(&owner)
            .expect("receiver bucket was pre-created from the parameter types")
            .functions
            .push(entry);
    } else if let Some(bucket) = model.classes.get_mut(&record.label) {
        bucket.functions.push(function_entry(record, parsed, true, 0));
    } else {
        model.stats.dropped_static += 1;
    }
}

/// Build a `ClassFunctionEntry`, skipping the first `skip` parameters (1 for
/// instance methods, dropping the receiver) while preserving the order of the
/// rest.
fn function_entry(
    record: &FunctionRecord,
    parsed: &ParsedSignature,
    is_static: bool,
    skip: usize,
) -> ClassFunctionEntry {
    ClassFunctionEntry {
        is_static,
        return_type: parsed.return_type.clone(),
        return_is_pointer: parsed.return_is_pointer,
        name: parsed.function_name.clone(),
        address: record.address,
        params: parsed
            .params
            .iter()
            .skip(skip)
            .map(|p| ClassFunctionParamEntry {
                ty: p.ty.clone(),
                is_pointer: p.is_pointer,
                name: p.name.clone(),
            })
            .collect(),
    }
}
