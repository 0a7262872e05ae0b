//! Host boundary conversion
//!
//! Inputs and outputs cross the boundary as plain host-native
//! scalars/arrays/objects, represented on the Rust side as
//! `serde_json::Value`. The engine's internal [`Value`] never leaks out.
//! Conversion round-trips: structure and key/element ordering are
//! preserved both ways (`serde_json` is built with `preserve_order`).
//!
//! Conversion recurses with the host structure's nesting, which host-side
//! parsers already bound; the depth-heavy flatten workloads are built
//! engine-side as [`Value`] chains and never pass through here.

use indexmap::IndexMap;
use serde::ser::{Error as SerError, Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value as HostValue;

use crate::error::{EngineError, Result};
use crate::value::Value;

/// Convert a host value into the engine representation.
///
/// Total for plain host data (null, booleans, numbers, strings, arrays,
/// objects). A number outside double precision is rejected with
/// `UnsupportedValue`.
pub fn from_host(host: &HostValue) -> Result<Value> {
    Ok(match host {
        HostValue::Null => Value::Null,
        HostValue::Bool(b) => Value::Bool(*b),
        HostValue::Number(n) => Value::Number(host_to_double(n)?),
        HostValue::String(s) => Value::text(s.as_str()),
        HostValue::Array(items) => {
            let mut seq = Vec::with_capacity(items.len());
            for item in items {
                seq.push(from_host(item)?);
            }
            Value::seq(seq)
        }
        HostValue::Object(entries) => {
            let mut map = IndexMap::with_capacity(entries.len());
            for (k, v) in entries {
                map.insert(k.clone(), from_host(v)?);
            }
            Value::map(map)
        }
    })
}

/// Widen a host number to a double, rejecting integers the double
/// cannot hold exactly. `as_f64` alone would widen an i64/u64 lossily,
/// and a number that changes on the way in can never round-trip back
/// out. The round-trip check runs in 128 bits so the saturating
/// float-to-int cast near `u64::MAX` cannot mask a mismatch.
fn host_to_double(n: &serde_json::Number) -> Result<f64> {
    if let Some(u) = n.as_u64() {
        let d = u as f64;
        if d as u128 == u as u128 {
            return Ok(d);
        }
    } else if let Some(i) = n.as_i64() {
        let d = i as f64;
        if d as i128 == i as i128 {
            return Ok(d);
        }
    } else if let Some(d) = n.as_f64() {
        return Ok(d);
    }
    Err(EngineError::UnsupportedValue(format!(
        "number {} is not exactly representable as a double",
        n
    )))
}

/// Convert an engine value back into host representation.
///
/// Opaque handles cannot cross the boundary (`UnsupportedValue`).
/// Non-finite numbers become host null, since the wire format cannot
/// carry NaN or infinities. Integral numbers in the safe-integer range
/// cross as integers so that converting in and out reproduces the host's
/// original literal form.
pub fn to_host(value: &Value) -> Result<HostValue> {
    Ok(match value {
        Value::Null => HostValue::Null,
        Value::Bool(b) => HostValue::Bool(*b),
        Value::Number(n) => host_number(*n),
        Value::Text(s) => HostValue::String(s.as_ref().clone()),
        Value::Seq(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items.iter() {
                out.push(to_host(item)?);
            }
            HostValue::Array(out)
        }
        Value::Map(entries) => {
            let mut out = serde_json::Map::with_capacity(entries.len());
            for (k, v) in entries.iter() {
                out.insert(k.clone(), to_host(v)?);
            }
            HostValue::Object(out)
        }
        Value::Opaque(o) => {
            return Err(EngineError::UnsupportedValue(format!(
                "opaque handle {:?} cannot cross the host boundary",
                o
            )))
        }
    })
}

/// The host sees one number type; pick the representation that
/// round-trips. 2^53 is the largest integral magnitude a double holds
/// exactly.
fn host_number(n: f64) -> HostValue {
    const SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;
    if n.is_finite() && n == n.trunc() && n.abs() <= SAFE_INTEGER {
        if n.is_sign_negative() && n != 0.0 {
            HostValue::Number(serde_json::Number::from(n as i64))
        } else {
            HostValue::Number(serde_json::Number::from(n as u64))
        }
    } else {
        match serde_json::Number::from_f64(n) {
            Some(n) => HostValue::Number(n),
            None => HostValue::Null,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Opaque(o) => Err(S::Error::custom(format!("cannot serialize {:?}", o))),
        }
    }
}
