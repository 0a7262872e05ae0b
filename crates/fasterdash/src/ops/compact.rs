//! Falsy-element removal

use crate::value::Value;

/// Drop every falsy element (null, `false`, zero, NaN, empty text),
/// preserving the relative order of survivors.
pub fn compact(items: &[Value]) -> Vec<Value> {
    items.iter().filter(|v| !v.is_falsy()).cloned().collect()
}
