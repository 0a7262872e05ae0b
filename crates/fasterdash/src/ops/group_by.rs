//! Stable group-by partition

use indexmap::IndexMap;

use crate::error::Result;
use crate::selector::KeySelector;
use crate::value::Value;

/// Partition `items` into buckets keyed by the projected key's canonical
/// text form.
///
/// Buckets appear in first-seen order of distinct keys; within a bucket,
/// items keep their original relative order. A failing callback selector
/// aborts the call with no partial result.
pub fn group_by(items: &[Value], selector: &KeySelector) -> Result<IndexMap<String, Vec<Value>>> {
    let mut buckets: IndexMap<String, Vec<Value>> = IndexMap::new();
    for item in items {
        let key = canonical_key(&selector.project(item)?);
        buckets.entry(key).or_default().push(item.clone());
    }
    Ok(buckets)
}

/// Canonical stringification of a projected key, matching the host's
/// (JavaScript's) conventions: text as-is, integral numbers without a
/// fractional part, `NaN`/`Infinity` spelled out, booleans and null in
/// lowercase.
pub fn canonical_key(value: &Value) -> String {
    match value {
        Value::Text(s) => s.as_ref().clone(),
        Value::Number(n) => canonical_number(*n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn canonical_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == n.trunc() && n.abs() < 9.007_199_254_740_992e15 {
        // Integral and exactly representable: print without the ".0"
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
