//! Hashable wrapper for Value to enable hash-set based deduplication

use std::hash::{Hash, Hasher};

use super::Value;

/// A wrapper for Value that implements Hash and Eq.
///
/// Every kind hashes, compound kinds recursively, so `uniq` stays
/// average-case linear on arbitrary inputs. The hash is canonicalized to
/// agree with `Value::compare` equality: NaN hashes to one bit pattern,
/// -0.0 hashes as 0.0.
#[derive(Debug, Clone)]
pub struct HashableValue(pub Value);

impl Hash for HashableValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(&self.0, state);
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    // Hash the kind tag first so cross-kind values land apart
    value.kind().hash(state);

    match value {
        Value::Null => {}
        Value::Bool(b) => b.hash(state),
        Value::Number(n) => canonical_bits(*n).hash(state),
        Value::Text(s) => s.hash(state),
        Value::Seq(items) => {
            items.len().hash(state);
            for item in items.iter() {
                hash_value(item, state);
            }
        }
        Value::Map(entries) => {
            entries.len().hash(state);
            for (k, v) in entries.iter() {
                k.hash(state);
                hash_value(v, state);
            }
        }
        Value::Opaque(o) => o.handle_addr().hash(state),
    }
}

/// Bit pattern with compare-equal numbers collapsed to one representative
fn canonical_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else if n == 0.0 {
        0.0f64.to_bits()
    } else {
        n.to_bits()
    }
}

impl PartialEq for HashableValue {
    fn eq(&self, other: &Self) -> bool {
        // Delegate to Value's PartialEq (compare-based)
        self.0 == other.0
    }
}

impl Eq for HashableValue {}
