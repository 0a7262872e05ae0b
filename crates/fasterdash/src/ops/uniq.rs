//! First-occurrence deduplication

use std::collections::HashSet;

use crate::value::{HashableValue, Value};

/// Remove duplicate elements, keeping the first occurrence of each.
///
/// "Duplicate" means the comparison model's notion of equal, so NaN
/// dedups against NaN and 0 against -0. Hash-set based: average-case
/// linear in the input length, never quadratic.
pub fn uniq(items: &[Value]) -> Vec<Value> {
    let mut seen: HashSet<HashableValue> = HashSet::with_capacity(items.len());
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(HashableValue(item.clone())) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(ns: &[i64]) -> Vec<Value> {
        ns.iter().map(|&n| Value::from(n)).collect()
    }

    #[test]
    fn test_first_occurrence_wins() {
        // [2, 1, 2, 3, 1] -> [2, 1, 3]
        assert_eq!(uniq(&numbers(&[2, 1, 2, 3, 1])), numbers(&[2, 1, 3]));
    }

    #[test]
    fn test_mixed_kinds_dedup_within_kind_only() {
        let items = vec![Value::from(1), Value::text("1"), Value::from(1)];
        assert_eq!(uniq(&items), vec![Value::from(1), Value::text("1")]);
    }

    #[test]
    fn test_compound_values_dedup_structurally() {
        let items = vec![
            Value::map_from([("a", Value::from(1))]),
            Value::map_from([("a", Value::from(1))]),
            Value::map_from([("a", Value::from(2))]),
        ];
        assert_eq!(uniq(&items).len(), 2);
    }

    #[test]
    fn test_nan_and_signed_zero_dedup() {
        let items = vec![
            Value::Number(f64::NAN),
            Value::Number(f64::NAN),
            Value::Number(0.0),
            Value::Number(-0.0),
        ];
        assert_eq!(uniq(&items).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(uniq(&[]).is_empty());
    }
}
