//! Deep merge

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{EngineError, Result};
use crate::value::Value;

use super::clone::clone_at;
use super::MAX_DEPTH;

/// Merge one or more sources into `dst`, left to right, returning a new
/// value. Neither `dst` nor any source is altered.
///
/// At each path:
/// - mapping + mapping merges recursively; result keys follow `dst` order,
///   then src-only keys in src order
/// - sequence + sequence merges element-wise by index; the longer side's
///   tail survives
/// - any other pairing: src wins outright, nulls included (an explicit
///   null in src overwrites)
///
/// Shares the depth bound (and `CycleDepthExceeded` policy) with deep
/// clone.
pub fn merge(dst: &Value, sources: &[Value]) -> Result<Value> {
    let mut acc = clone_at(dst, 0)?;
    for src in sources {
        acc = merge_pair(&acc, src, 0)?;
    }
    Ok(acc)
}

fn merge_pair(dst: &Value, src: &Value, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(EngineError::CycleDepthExceeded { limit: MAX_DEPTH });
    }

    Ok(match (dst, src) {
        (Value::Map(d), Value::Map(s)) => {
            let mut merged = IndexMap::with_capacity(d.len().max(s.len()));
            for (k, dv) in d.iter() {
                let entry = match s.get(k) {
                    Some(sv) => merge_pair(dv, sv, depth + 1)?,
                    None => clone_at(dv, depth + 1)?,
                };
                merged.insert(k.clone(), entry);
            }
            for (k, sv) in s.iter() {
                if !d.contains_key(k) {
                    merged.insert(k.clone(), clone_at(sv, depth + 1)?);
                }
            }
            Value::Map(Arc::new(merged))
        }

        (Value::Seq(d), Value::Seq(s)) => {
            let mut merged = Vec::with_capacity(d.len().max(s.len()));
            for i in 0..d.len().max(s.len()) {
                merged.push(match (d.get(i), s.get(i)) {
                    (Some(dv), Some(sv)) => merge_pair(dv, sv, depth + 1)?,
                    (Some(dv), None) => clone_at(dv, depth + 1)?,
                    (None, Some(sv)) => clone_at(sv, depth + 1)?,
                    (None, None) => unreachable!(),
                });
            }
            Value::Seq(Arc::new(merged))
        }

        // Kinds differ or neither side is a container: src wins
        (_, src) => clone_at(src, depth + 1)?,
    })
}
