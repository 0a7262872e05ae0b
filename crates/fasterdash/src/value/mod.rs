//! Value representation for data crossing the host boundary

mod compare;
mod display;
mod hashable;
mod impls;

pub use compare::Kind;
pub use hashable::HashableValue;

use std::any::Any;
use std::sync::Arc;

use indexmap::IndexMap;

/// The engine's internal representation of any datum it operates on.
///
/// Values are organized into two tiers:
/// - Inline scalars (no allocation)
/// - Heap-allocated compound kinds (Arc-wrapped, so `Clone` is cheap and
///   results can share unchanged substructure)
///
/// Host objects and arrays are converted to and from `Value` at the
/// boundary (`boundary` module); nothing outside the boundary ever sees
/// host-native data.
#[derive(Clone)]
pub enum Value {
    /// Absent / explicit null
    Null,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// Numbers are host numbers: IEEE-754 double precision
    Number(f64),

    /// Heap-allocated text
    Text(Arc<String>),

    /// Ordered sequence of values
    Seq(Arc<Vec<Value>>),

    /// Mapping with unique keys and preserved insertion order
    Map(Arc<IndexMap<String, Value>>),

    /// A host-owned handle the engine passes through untouched
    Opaque(OpaqueValue),
}

/// A host-owned value the engine cannot look inside.
///
/// Opaque values flow through operations unchanged; equality and ordering
/// are by handle identity. They cannot be converted back across the host
/// boundary (`UnsupportedValue`).
#[derive(Clone)]
pub struct OpaqueValue {
    /// Label for display/debugging
    pub name: String,

    /// The host handle itself
    pub handle: Arc<dyn Any + Send + Sync>,
}

impl OpaqueValue {
    /// Wrap a host handle
    pub fn new(name: impl Into<String>, handle: Arc<dyn Any + Send + Sync>) -> Self {
        Self {
            name: name.into(),
            handle,
        }
    }

    /// Identity comparison: two opaques are the same iff they wrap the
    /// same host handle
    pub fn same_handle(&self, other: &OpaqueValue) -> bool {
        Arc::ptr_eq(&self.handle, &other.handle)
    }

    pub(crate) fn handle_addr(&self) -> usize {
        Arc::as_ptr(&self.handle) as *const () as usize
    }
}

impl std::fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<opaque {}>", self.name)
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        // Compiler-generated drop glue recurses per nesting level, and the
        // flatten workloads carry chains as deep as their element count
        // (100k+). Drain uniquely-owned containers breadth-first instead;
        // shared Arcs just decrement and stop.
        fn drain_into(value: &mut Value, queue: &mut Vec<Value>) {
            match value {
                Value::Seq(items) => {
                    if let Some(items) = Arc::get_mut(items) {
                        queue.append(items);
                    }
                }
                Value::Map(entries) => {
                    if let Some(entries) = Arc::get_mut(entries) {
                        queue.extend(entries.drain(..).map(|(_, v)| v));
                    }
                }
                _ => {}
            }
        }

        if !matches!(self, Value::Seq(_) | Value::Map(_)) {
            return;
        }
        let mut queue: Vec<Value> = Vec::new();
        drain_into(self, &mut queue);
        while let Some(mut value) = queue.pop() {
            drain_into(&mut value, &mut queue);
            // `value` drops here with its containers already emptied
        }
    }
}
