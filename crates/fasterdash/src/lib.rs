//! # fasterdash
//!
//! A collection-transformation engine: allocation-conscious
//! reimplementations of common array/object reshaping operations
//! (`order_by`, `compact`, `clone_deep`, `merge`, `group_by`,
//! `flatten_deep`, `uniq`) behind a narrow, stable call boundary.
//!
//! ## Architecture
//!
//! - **Value model**: every datum is a [`Value`] tagged union; all engine
//!   logic dispatches on the tag, never on host runtime types
//! - **Selectors**: keys are projected through [`KeySelector`] (a parsed
//!   path or an opaque host callback) once per item, never per comparison
//! - **Operations**: independent, pure, all-or-nothing ([`ops`])
//! - **Boundary**: plain host data converts in and out at [`boundary`];
//!   the internal representation never leaks ([`api`] is the host-facing
//!   surface)
//!
//! The engine holds no cross-call state apart from the worker pool that
//! [`initialize`] builds once, so concurrent calls are safe as long as
//! each call's inputs are left alone while it runs.
//!
//! ## Example
//!
//! ```
//! use fasterdash::{KeySelector, SortDirection, Value, ops};
//!
//! let users = vec![
//!     Value::map_from([("user", Value::text("fred")), ("age", Value::from(48))]),
//!     Value::map_from([("user", Value::text("barney")), ("age", Value::from(36))]),
//! ];
//! let sorted = ops::order_by(
//!     &users,
//!     &[KeySelector::path("user").unwrap()],
//!     &[SortDirection::Asc],
//! ).unwrap();
//! assert_eq!(sorted[0].as_map().unwrap()["user"], Value::text("barney"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod boundary;
pub mod error;
pub mod ops;
pub mod runtime;
pub mod selector;
pub mod value;

// Re-export main types
pub use error::{EngineError, Result};
pub use ops::{clone_deep, compact, flatten_deep, group_by, merge, order_by, uniq};
pub use runtime::initialize;
pub use selector::{CallbackSelector, KeyPath, KeySelector, PathSegment, SortDirection};
pub use value::{HashableValue, Kind, OpaqueValue, Value};

/// fasterdash version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
