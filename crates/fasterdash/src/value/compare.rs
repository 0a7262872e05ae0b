//! Total ordering over heterogeneous Values
//!
//! Multi-key sort, uniq, and grouping all need a deterministic answer for
//! any pair of values, so `compare` is total: it never fails, even across
//! kinds. Cross-kind pairs order by a fixed rank over the kind tags
//! (Null < Bool < Number < Text < Seq < Map < Opaque).

use std::cmp::Ordering;

use super::Value;

/// The kind tag of a Value, used for cross-kind ordering and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// Null
    Null,
    /// Boolean
    Bool,
    /// Number
    Number,
    /// Text
    Text,
    /// Sequence
    Seq,
    /// Mapping
    Map,
    /// Host-owned opaque handle
    Opaque,
}

impl Kind {
    /// Human-readable kind name
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::Text => "text",
            Kind::Seq => "sequence",
            Kind::Map => "mapping",
            Kind::Opaque => "opaque",
        }
    }
}

impl Value {
    /// The kind tag of this value
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::Text(_) => Kind::Text,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
            Value::Opaque(_) => Kind::Opaque,
        }
    }

    /// Total comparison between any two values.
    ///
    /// Within a kind: numbers compare numerically (NaN sorts after every
    /// other number and equals itself), text by code points, false before
    /// true, sequences and mappings lexicographically entry-by-entry then
    /// by length. Exactly one of Less/Equal/Greater holds for any pair.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => compare_numbers(*a, *b),
            (Value::Text(a), Value::Text(b)) => a.as_str().cmp(b.as_str()),

            (Value::Seq(a), Value::Seq(b)) => compare_seqs(a, b),

            (Value::Map(a), Value::Map(b)) => {
                for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
                    let keys = ka.as_str().cmp(kb.as_str());
                    if keys != Ordering::Equal {
                        return keys;
                    }
                    let vals = va.compare(vb);
                    if vals != Ordering::Equal {
                        return vals;
                    }
                }
                a.len().cmp(&b.len())
            }

            // Opaques order by handle identity; stable within a process run
            (Value::Opaque(a), Value::Opaque(b)) => {
                if a.same_handle(b) {
                    Ordering::Equal
                } else {
                    a.handle_addr().cmp(&b.handle_addr())
                }
            }

            // Cross-kind: fixed rank over the tags
            (a, b) => a.kind().cmp(&b.kind()),
        }
    }
}

/// Numeric comparison made total: NaN equals NaN and sorts after every
/// non-NaN number; -0.0 equals 0.0.
fn compare_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // partial_cmp only fails when at least one side is NaN
            (false, false) => unreachable!(),
        }
    })
}

fn compare_seqs(a: &[Value], b: &[Value]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        let ord = x.compare(y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(Value::Number(1.0).compare(&Value::Number(2.0)), Ordering::Less);
        assert_eq!(Value::Number(2.0).compare(&Value::Number(2.0)), Ordering::Equal);
        assert_eq!(Value::Number(-1.0).compare(&Value::Number(-2.0)), Ordering::Greater);
    }

    #[test]
    fn test_nan_is_totally_ordered() {
        let nan = Value::Number(f64::NAN);
        assert_eq!(nan.compare(&nan), Ordering::Equal);
        assert_eq!(nan.compare(&Value::Number(f64::INFINITY)), Ordering::Greater);
        assert_eq!(Value::Number(0.0).compare(&nan), Ordering::Less);
    }

    #[test]
    fn test_text_compares_by_code_points() {
        assert_eq!(Value::text("barney").compare(&Value::text("fred")), Ordering::Less);
        assert_eq!(Value::text("a").compare(&Value::text("a")), Ordering::Equal);
    }

    #[test]
    fn test_bool_false_before_true() {
        assert_eq!(Value::Bool(false).compare(&Value::Bool(true)), Ordering::Less);
    }

    #[test]
    fn test_cross_kind_rank() {
        // Null < Bool < Number < Text < Seq < Map
        assert_eq!(Value::Null.compare(&Value::Bool(false)), Ordering::Less);
        assert_eq!(Value::Bool(true).compare(&Value::Number(0.0)), Ordering::Less);
        assert_eq!(Value::Number(99.0).compare(&Value::text("")), Ordering::Less);
        assert_eq!(Value::text("z").compare(&Value::seq(vec![])), Ordering::Less);
        assert_eq!(
            Value::seq(vec![]).compare(&Value::map(indexmap::IndexMap::new())),
            Ordering::Less
        );
    }

    #[test]
    fn test_seq_lexicographic() {
        let a = Value::seq(vec![Value::from(1), Value::from(2)]);
        let b = Value::seq(vec![Value::from(1), Value::from(3)]);
        let c = Value::seq(vec![Value::from(1)]);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(c.compare(&a), Ordering::Less); // prefix sorts first
    }

    #[test]
    fn test_trichotomy_sample() {
        let values = vec![
            Value::Null,
            Value::Bool(true),
            Value::Number(1.5),
            Value::Number(f64::NAN),
            Value::text("x"),
            Value::seq(vec![Value::from(1)]),
            Value::map_from([("k", Value::from(1))]),
        ];
        for a in &values {
            for b in &values {
                let forward = a.compare(b);
                let backward = b.compare(a);
                assert_eq!(forward, backward.reverse());
            }
        }
    }
}
