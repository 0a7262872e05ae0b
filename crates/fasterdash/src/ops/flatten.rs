//! Deep flatten

use crate::value::Value;

/// Recursively expand nested sequences to unbounded depth, depth-first
/// and left-to-right; non-sequence elements pass through unchanged.
///
/// Uses an explicit work stack rather than recursion: inputs are
/// routinely right-nested chains as long as the element count (the
/// benchmark shape is a 100,000-deep chain), which would overflow the
/// call stack.
pub fn flatten_deep(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    // (remaining slice to walk) frames; topmost is the innermost sequence
    let mut stack: Vec<&[Value]> = vec![items];

    while let Some(frame) = stack.pop() {
        let mut rest = frame;
        while let Some((head, tail)) = rest.split_first() {
            match head {
                Value::Seq(nested) => {
                    // Finish the tail after the nested sequence
                    if !tail.is_empty() {
                        stack.push(tail);
                    }
                    rest = nested.as_slice();
                }
                other => {
                    out.push(other.clone());
                    rest = tail;
                }
            }
        }
    }

    out
}
