//! The transformation operations
//!
//! Each operation is independent, pure, and all-or-nothing: inputs are
//! never mutated, results are freshly owned, and an error means no
//! partial output was produced.

pub mod clone;
pub mod compact;
pub mod flatten;
pub mod group_by;
pub mod merge;
pub mod order_by;
pub mod uniq;

pub use clone::clone_deep;
pub use compact::compact;
pub use flatten::flatten_deep;
pub use group_by::group_by;
pub use merge::merge;
pub use order_by::order_by;
pub use uniq::uniq;

/// Recursion-depth bound shared by deep clone and deep merge.
///
/// Values built at the host boundary are acyclic by construction, so this
/// bound only trips on pathological nesting; past it the operation fails
/// with `CycleDepthExceeded` rather than exhausting the stack.
pub const MAX_DEPTH: usize = 512;
