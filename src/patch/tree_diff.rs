//! Structural diff between two JSON trees
//!
//! Objects are compared key by key and recursed into, so a change deep in a
//! tree produces a single operation at that depth. Arrays are compared by
//! index only; moves and reorders show up as replacements.
//!
//! Operations follow a pre-order walk of the new tree. Keys that only exist
//! in the old tree are removed after the other keys of their parent object.
//! Surplus array items are removed from the highest index down so each
//! pointer is still valid when its operation runs.

use crate::domain::ports::StructuralDiff;
use crate::error::{Error, Result};
use json_patch::{AddOperation, Patch, PatchOperation, RemoveOperation, ReplaceOperation};
use jsonptr::PointerBuf;
use serde_json::{Map, Value};

/// [`StructuralDiff`] over `serde_json` trees
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTreeDiff;

impl StructuralDiff for JsonTreeDiff {
    fn compute(&self, old: &Value, new: &Value) -> Result<Patch> {
        diff(old, new)
    }
}

/// Compute the operations turning `old` into `new`
pub fn diff(old: &Value, new: &Value) -> Result<Patch> {
    match (old, new) {
        (Value::Object(old), Value::Object(new)) => {
            let mut ops = Vec::new();
            diff_objects(&PointerBuf::default(), old, new, &mut ops);
            Ok(Patch(ops))
        }
        _ => Err(Error::IncomparableDocuments {
            reason: format!(
                "expected two objects, found {} and {}",
                kind(old),
                kind(new)
            ),
        }),
    }
}

fn child(path: &PointerBuf, token: &str) -> PointerBuf {
    let mut child = path.clone();
    child.push_back(token);
    child
}

fn diff_values(path: &PointerBuf, old: &Value, new: &Value, ops: &mut Vec<PatchOperation>) {
    match (old, new) {
        (Value::Object(old), Value::Object(new)) => diff_objects(path, old, new, ops),
        (Value::Array(old), Value::Array(new)) => diff_arrays(path, old, new, ops),
        _ if old != new => ops.push(PatchOperation::Replace(ReplaceOperation {
            path: path.clone(),
            value: new.clone(),
        })),
        _ => {}
    }
}

fn diff_objects(
    path: &PointerBuf,
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    ops: &mut Vec<PatchOperation>,
) {
    for (key, new_value) in new {
        let key_path = child(path, key);
        match old.get(key) {
            Some(old_value) => diff_values(&key_path, old_value, new_value, ops),
            None => ops.push(PatchOperation::Add(AddOperation {
                path: key_path,
                value: new_value.clone(),
            })),
        }
    }

    for key in old.keys().filter(|key| !new.contains_key(key.as_str())) {
        ops.push(PatchOperation::Remove(RemoveOperation {
            path: child(path, key),
        }));
    }
}

fn diff_arrays(path: &PointerBuf, old: &[Value], new: &[Value], ops: &mut Vec<PatchOperation>) {
    for (index, (old_item, new_item)) in old.iter().zip(new).enumerate() {
        diff_values(&child(path, &index.to_string()), old_item, new_item, ops);
    }

    for (index, item) in new.iter().enumerate().skip(old.len()) {
        ops.push(PatchOperation::Add(AddOperation {
            path: child(path, &index.to_string()),
            value: item.clone(),
        }));
    }

    for index in (new.len()..old.len()).rev() {
        ops.push(PatchOperation::Remove(RemoveOperation {
            path: child(path, &index.to_string()),
        }));
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
