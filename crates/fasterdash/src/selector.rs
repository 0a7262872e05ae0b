//! Key selectors: paths and host callbacks
//!
//! A selector derives a comparison/grouping key from a value. It is either
//! a parsed key path (`"a.b[0].c"`) or an opaque host callback. Both are
//! projected through [`KeySelector::project`], which is the single point
//! where a host callback can fail (`SelectorFailure`).

use std::str::FromStr;
use std::sync::Arc;

use crate::error::{EngineError, Result};
use crate::value::Value;

/// One step of a key path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Mapping-key access (`.name`)
    Key(String),
    /// Sequence-index access (`[3]`)
    Index(usize),
}

/// A property/index access chain used to project a sub-value out of a Value.
///
/// Accepts bare names (`"user"`), dotted paths (`"a.b.c"`), and bracket
/// indices (`"a[0].b"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<PathSegment>,
}

impl KeyPath {
    /// Parse a path from its text form.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(EngineError::InvalidArgument("empty key path".into()));
        }

        let mut segments = Vec::new();
        let mut rest = raw;

        while !rest.is_empty() {
            if let Some(stripped) = rest.strip_prefix('[') {
                let close = stripped.find(']').ok_or_else(|| {
                    EngineError::InvalidArgument(format!("unclosed '[' in key path {:?}", raw))
                })?;
                let index = stripped[..close].parse::<usize>().map_err(|_| {
                    EngineError::InvalidArgument(format!(
                        "non-numeric index {:?} in key path {:?}",
                        &stripped[..close],
                        raw
                    ))
                })?;
                segments.push(PathSegment::Index(index));
                rest = &stripped[close + 1..];
                rest = Self::strip_separator(rest, raw)?;
            } else {
                let end = rest
                    .find(|c| c == '.' || c == '[')
                    .unwrap_or(rest.len());
                if end == 0 {
                    return Err(EngineError::InvalidArgument(format!(
                        "empty segment in key path {:?}",
                        raw
                    )));
                }
                segments.push(PathSegment::Key(rest[..end].to_string()));
                rest = &rest[end..];
                rest = Self::strip_separator(rest, raw)?;
            }
        }

        Ok(Self { segments })
    }

    /// Consume a `.` separator between segments. A separator with nothing
    /// after it is malformed, same as a doubled one.
    fn strip_separator<'a>(rest: &'a str, raw: &str) -> Result<&'a str> {
        match rest.strip_prefix('.') {
            Some("") => Err(EngineError::InvalidArgument(format!(
                "trailing separator in key path {:?}",
                raw
            ))),
            Some(after) => Ok(after),
            None => Ok(rest),
        }
    }

    /// The parsed segments, in access order
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Resolve this path against a value.
    ///
    /// Returns `None` when any step is absent. Lenient at the seam between
    /// the two access forms: a `Key` whose text is numeric indexes into a
    /// sequence, and an `Index` looks up its decimal form in a mapping.
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        let mut current = value;
        for segment in &self.segments {
            current = match (segment, current) {
                (PathSegment::Key(k), Value::Map(m)) => m.get(k.as_str())?,
                (PathSegment::Key(k), Value::Seq(s)) => s.get(k.parse::<usize>().ok()?)?,
                (PathSegment::Index(i), Value::Seq(s)) => s.get(*i)?,
                (PathSegment::Index(i), Value::Map(m)) => m.get(i.to_string().as_str())?,
                _ => return None,
            };
        }
        Some(current)
    }
}

/// Type alias for host callback selector pointers
pub type SelectorFn = Arc<dyn Fn(&Value) -> std::result::Result<Value, String> + Send + Sync>;

/// A host-supplied callback selector.
#[derive(Clone)]
pub struct CallbackSelector {
    /// Callback name (for display/debugging)
    pub name: String,

    /// The actual callback
    pub func: SelectorFn,
}

impl std::fmt::Debug for CallbackSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CallbackSelector({})", self.name)
    }
}

/// A PathSelector or CallbackSelector used to derive a comparison key.
#[derive(Debug, Clone)]
pub enum KeySelector {
    /// Project through a parsed key path
    Path(KeyPath),
    /// Project through an opaque host callback
    Callback(CallbackSelector),
}

impl KeySelector {
    /// Build a path selector from its text form
    pub fn path(raw: &str) -> Result<Self> {
        Ok(KeySelector::Path(KeyPath::parse(raw)?))
    }

    /// Wrap a host callback as a selector
    pub fn callback(
        name: impl Into<String>,
        func: impl Fn(&Value) -> std::result::Result<Value, String> + Send + Sync + 'static,
    ) -> Self {
        KeySelector::Callback(CallbackSelector {
            name: name.into(),
            func: Arc::new(func),
        })
    }

    /// Project a key out of a value.
    ///
    /// An absent path is not an error: missing fields project to `Null`
    /// so they sort and group like explicit nulls. A failing callback is
    /// an error and aborts the whole operation.
    pub fn project(&self, value: &Value) -> Result<Value> {
        match self {
            KeySelector::Path(path) => Ok(path.resolve(value).cloned().unwrap_or(Value::Null)),
            KeySelector::Callback(cb) => (cb.func)(value).map_err(|message| {
                EngineError::SelectorFailure(format!("{}: {}", cb.name, message))
            }),
        }
    }
}

/// Per-key sort direction, paired positionally with each selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest key first (the default)
    #[default]
    Asc,
    /// Largest key first
    Desc,
}

impl FromStr for SortDirection {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(EngineError::InvalidArgument(format!(
                "unknown sort direction {:?} (expected \"asc\" or \"desc\")",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_name() {
        let path = KeyPath::parse("user").unwrap();
        assert_eq!(path.segments(), &[PathSegment::Key("user".into())]);
    }

    #[test]
    fn test_parse_dotted_and_bracket() {
        let path = KeyPath::parse("a.b[0].c").unwrap();
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("a".into()),
                PathSegment::Key("b".into()),
                PathSegment::Index(0),
                PathSegment::Key("c".into()),
            ]
        );
    }

    #[test]
    fn test_parse_leading_bracket() {
        let path = KeyPath::parse("[2].name").unwrap();
        assert_eq!(
            path.segments(),
            &[PathSegment::Index(2), PathSegment::Key("name".into())]
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(KeyPath::parse("").is_err());
        assert!(KeyPath::parse("a..b").is_err());
        assert!(KeyPath::parse("a[x]").is_err());
        assert!(KeyPath::parse("a[1").is_err());
        assert!(KeyPath::parse("a.").is_err());
        assert!(KeyPath::parse("a[0].").is_err());
    }

    #[test]
    fn test_resolve_nested() {
        let v = Value::map_from([(
            "a",
            Value::map_from([("b", Value::seq(vec![Value::map_from([("c", Value::from(7))])]))]),
        )]);
        let path = KeyPath::parse("a.b[0].c").unwrap();
        assert_eq!(path.resolve(&v), Some(&Value::from(7)));
    }

    #[test]
    fn test_resolve_numeric_key_on_seq() {
        let v = Value::seq(vec![Value::text("x"), Value::text("y")]);
        let path = KeyPath::parse("1").unwrap();
        assert_eq!(path.resolve(&v), Some(&Value::text("y")));
    }

    #[test]
    fn test_missing_path_projects_null() {
        let sel = KeySelector::path("nope.deep").unwrap();
        let v = Value::map_from([("user", Value::text("fred"))]);
        assert_eq!(sel.project(&v).unwrap(), Value::Null);
    }

    #[test]
    fn test_callback_projection() {
        let sel = KeySelector::callback("age", |v| {
            v.as_map()
                .and_then(|m| m.get("age"))
                .cloned()
                .ok_or_else(|| "no age field".to_string())
        });
        let v = Value::map_from([("age", Value::from(48))]);
        assert_eq!(sel.project(&v).unwrap(), Value::from(48));

        let err = sel.project(&Value::Null).unwrap_err();
        assert!(matches!(err, EngineError::SelectorFailure(_)));
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("up".parse::<SortDirection>().is_err());
    }
}
