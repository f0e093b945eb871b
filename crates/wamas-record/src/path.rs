//! Dotted-path resolution over value trees

use crate::value::Value;
use crate::{Error, Result};
use std::fmt;

/// A parsed dotted path such as `DespatchAdvice.cac:DespatchLine.0.cbc:ID`.
///
/// Segments are kept verbatim; whether a segment acts as a map key or a
/// list index is decided by the container it is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Parse a dotted path. Empty paths and empty segments are rejected.
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(Error::invalid_path(path, "path is empty"));
        }
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(Error::invalid_path(path, "empty segment"));
        }
        Ok(Self { segments })
    }

    /// The path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolve the path against a root value. `None` means the path leads
    /// nowhere; callers map that to [`Value::Missing`] or a default.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        resolve_segments(root, &self.segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Resolve a run of path segments against a value. Maps are entered by
/// key, lists by numeric index; anything else ends the walk.
pub fn resolve_segments<'a>(value: &'a Value, segments: &[String]) -> Option<&'a Value> {
    let mut current = value;
    for segment in segments {
        current = match current {
            Value::Map(map) => map.get(segment)?,
            Value::List(items) => {
                let index: usize = segment.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}

/// Parse and resolve in one step, for paths that arrive as table data.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Result<Option<&'a Value>> {
    Ok(Path::parse(path)?.resolve(root))
}
