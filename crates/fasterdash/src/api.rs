//! Host-facing operation surface
//!
//! Thin call-through layer the host wrapper binds to: every function
//! converts plain host data in, runs one engine operation, and converts
//! the result back out. Keys arrive as property-path strings or host
//! callbacks; directions arrive as the strings `"asc"` / `"desc"`.

use serde_json::Value as HostValue;

use crate::boundary::{from_host, to_host};
use crate::error::{EngineError, Result};
use crate::ops;
use crate::selector::{CallbackSelector, KeySelector, SortDirection};
use crate::value::Value;

pub use crate::runtime::initialize;

/// Host-facing selector: a property-path string or an opaque callback.
#[derive(Debug, Clone)]
pub enum Selector {
    /// A `"a.b[0].c"`-style path
    Path(String),
    /// A host callback mapping an item to its key
    Callback(CallbackSelector),
}

impl Selector {
    /// Wrap a host callback as a selector
    pub fn callback(
        name: impl Into<String>,
        func: impl Fn(&Value) -> std::result::Result<Value, String> + Send + Sync + 'static,
    ) -> Self {
        match KeySelector::callback(name, func) {
            KeySelector::Callback(cb) => Selector::Callback(cb),
            KeySelector::Path(_) => unreachable!(),
        }
    }

    fn compile(&self) -> Result<KeySelector> {
        match self {
            Selector::Path(raw) => KeySelector::path(raw),
            Selector::Callback(cb) => Ok(KeySelector::Callback(cb.clone())),
        }
    }
}

impl From<&str> for Selector {
    fn from(raw: &str) -> Self {
        Selector::Path(raw.to_string())
    }
}

/// Sort by one or more keys. Directions pair positionally with keys;
/// omitted trailing directions (or an entirely empty list) default to
/// `"asc"`.
pub fn order_by(items: &HostValue, keys: &[Selector], directions: &[&str]) -> Result<HostValue> {
    let items = as_items(items)?;
    let selectors = keys
        .iter()
        .map(Selector::compile)
        .collect::<Result<Vec<_>>>()?;
    let directions = directions
        .iter()
        .map(|d| d.parse::<SortDirection>())
        .collect::<Result<Vec<_>>>()?;
    to_host(&Value::seq(ops::order_by(&items, &selectors, &directions)?))
}

/// Remove falsy elements, preserving survivor order.
pub fn compact(items: &HostValue) -> Result<HostValue> {
    to_host(&Value::seq(ops::compact(&as_items(items)?)))
}

/// Remove duplicates, keeping first occurrences.
pub fn uniq(items: &HostValue) -> Result<HostValue> {
    to_host(&Value::seq(ops::uniq(&as_items(items)?)))
}

/// Flatten nested arrays to unbounded depth.
pub fn flatten_deep(items: &HostValue) -> Result<HostValue> {
    to_host(&Value::seq(ops::flatten_deep(&as_items(items)?)))
}

/// Partition items into `{ key: [items] }` buckets.
pub fn group_by(items: &HostValue, key: &Selector) -> Result<HostValue> {
    let grouped = ops::group_by(&as_items(items)?, &key.compile()?)?;
    let mut out = serde_json::Map::with_capacity(grouped.len());
    for (bucket, members) in grouped {
        out.insert(bucket, to_host(&Value::seq(members))?);
    }
    Ok(HostValue::Object(out))
}

/// Deep-copy a value; the result shares nothing with the input.
pub fn clone_deep(value: &HostValue) -> Result<HostValue> {
    to_host(&ops::clone_deep(&from_host(value)?)?)
}

/// Merge sources into `dst`, left to right, returning a new value.
pub fn merge(dst: &HostValue, sources: &[HostValue]) -> Result<HostValue> {
    let dst = from_host(dst)?;
    let sources = sources
        .iter()
        .map(from_host)
        .collect::<Result<Vec<_>>>()?;
    to_host(&ops::merge(&dst, &sources)?)
}

fn as_items(host: &HostValue) -> Result<Vec<Value>> {
    let value = from_host(host)?;
    match value.as_seq() {
        Some(items) => Ok(items.to_vec()),
        None => Err(EngineError::InvalidArgument(format!(
            "expected an array of items, got {}",
            value.kind().name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_order_by_single_key() {
        let users = json!([
            { "user": "fred",   "age": 48 },
            { "user": "barney", "age": 36 },
            { "user": "fred",   "age": 40 },
            { "user": "barney", "age": 34 }
        ]);
        let sorted = order_by(&users, &["user".into()], &["asc"]).unwrap();
        assert_eq!(
            sorted,
            json!([
                { "user": "barney", "age": 36 },
                { "user": "barney", "age": 34 },
                { "user": "fred",   "age": 48 },
                { "user": "fred",   "age": 40 }
            ])
        );
    }

    #[test]
    fn test_order_by_rejects_bad_direction() {
        let err = order_by(&json!([]), &["user".into()], &["sideways"]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn test_order_by_rejects_non_array() {
        let err = order_by(&json!({"a": 1}), &["a".into()], &[]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn test_compact_scenario() {
        let out = compact(&json!([0, 1, false, 2, "", 3])).unwrap();
        assert_eq!(out, json!([1, 2, 3]));
    }

    #[test]
    fn test_group_by_scenario() {
        let items = json!([
            { "type": "even", "v": 0 },
            { "type": "odd",  "v": 1 },
            { "type": "even", "v": 2 }
        ]);
        let grouped = group_by(&items, &"type".into()).unwrap();
        assert_eq!(
            grouped,
            json!({
                "even": [ { "type": "even", "v": 0 }, { "type": "even", "v": 2 } ],
                "odd":  [ { "type": "odd",  "v": 1 } ]
            })
        );
    }

    #[test]
    fn test_flatten_scenario() {
        let out = flatten_deep(&json!([1, [2, [3, [4]], 5]])).unwrap();
        assert_eq!(out, json!([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_uniq_scenario() {
        let out = uniq(&json!([2, 1, 2, 3, 1])).unwrap();
        assert_eq!(out, json!([2, 1, 3]));
    }

    #[test]
    fn test_clone_deep_round_trip() {
        let v = json!({ "a": [1, { "b": null }], "c": "text" });
        assert_eq!(clone_deep(&v).unwrap(), v);
    }

    #[test]
    fn test_merge_through_boundary() {
        let dst = json!({ "a": { "x": 1 }, "list": [1, 2] });
        let src = json!({ "a": { "y": 2 }, "list": [9] });
        let merged = merge(&dst, std::slice::from_ref(&src)).unwrap();
        assert_eq!(
            merged,
            json!({ "a": { "x": 1, "y": 2 }, "list": [9, 2] })
        );
    }
}
