//! Deep clone

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{EngineError, Result};
use crate::value::Value;

use super::MAX_DEPTH;

/// Produce a value with no substructure shared with the input.
///
/// Every sequence and mapping is rebuilt into fresh allocations, element
/// and key order preserved exactly; scalars are copied by value. Opaque
/// handles are host-owned and cannot be duplicated, so the clone shares
/// the handle itself.
///
/// Cycle policy: recursion is bounded at [`MAX_DEPTH`]; deeper nesting
/// (which in practice means a cyclic input graph) fails with
/// `CycleDepthExceeded` instead of exhausting the stack.
pub fn clone_deep(value: &Value) -> Result<Value> {
    clone_at(value, 0)
}

pub(crate) fn clone_at(value: &Value, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(EngineError::CycleDepthExceeded { limit: MAX_DEPTH });
    }

    Ok(match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(*n),
        Value::Text(s) => Value::Text(Arc::new(s.as_ref().clone())),

        Value::Seq(items) => {
            let mut fresh = Vec::with_capacity(items.len());
            for item in items.iter() {
                fresh.push(clone_at(item, depth + 1)?);
            }
            Value::Seq(Arc::new(fresh))
        }

        Value::Map(entries) => {
            let mut fresh = IndexMap::with_capacity(entries.len());
            for (k, v) in entries.iter() {
                fresh.insert(k.clone(), clone_at(v, depth + 1)?);
            }
            Value::Map(Arc::new(fresh))
        }

        Value::Opaque(o) => Value::Opaque(o.clone()),
    })
}
