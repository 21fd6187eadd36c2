//! Path addressing for locations in nested structures.
//!
//! This module provides [`Path`] and [`PathSegment`] for naming a location
//! inside a tree of named fields and array elements. Paths render to a
//! single string such as `/user/phones[0]`, and that rendering is the
//! identity of a path: two paths are equal exactly when they render alike.

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The character separating field segments in a rendered path.
pub const SEPARATOR: char = '/';

/// A segment of a [`Path`].
///
/// Paths are built from segments that represent either field access or array indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named field (e.g., `user`, `email`)
    Field(String),
    /// An array element (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// Errors raised when building or parsing a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The field name contains the separator or an index bracket.
    #[error("invalid field name '{0}': must not contain '/', '[' or ']'")]
    InvalidFieldName(String),

    /// The field name is empty.
    #[error("field names must not be empty")]
    EmptyFieldName,

    /// An index marker does not hold a non-negative integer.
    #[error("invalid index '{0}': must be a non-negative integer")]
    InvalidIndex(String),

    /// The input does not follow the path grammar.
    #[error("malformed path '{path}': {reason}")]
    Malformed { path: String, reason: &'static str },
}

/// Receives the components of a path in root-to-leaf order.
///
/// See [`Path::visit`]. Returning `false` from either method stops the walk.
pub trait ComponentVisitor {
    /// Called for each field segment.
    fn visit_field(&mut self, name: &str) -> bool;

    /// Called for each index marker.
    fn visit_index(&mut self, index: usize) -> bool;
}

impl<F, I> ComponentVisitor for (F, I)
where
    F: FnMut(&str) -> bool,
    I: FnMut(usize) -> bool,
{
    fn visit_field(&mut self, name: &str) -> bool {
        (self.0)(name)
    }

    fn visit_index(&mut self, index: usize) -> bool {
        (self.1)(index)
    }
}

/// An immutable location in a nested structure.
///
/// Absolute paths start at the root `/`. Field segments are joined by the
/// separator and index markers attach directly to the preceding segment, so
/// the second phone of user `bob` is `/bob/phones[1]`. Paths that do not
/// start with the separator are relative and resolve against whatever node
/// they are applied to.
///
/// # Example
///
/// ```rust
/// use validates::Path;
///
/// let path = Path::root()
///     .down_field("users")
///     .down_index(0)
///     .down_field("email");
///
/// assert_eq!(path.to_string(), "/users[0]/email");
/// assert_eq!(path.up().up(), Path::root().down_field("users"));
/// ```
#[derive(Clone)]
pub struct Path {
    absolute: bool,
    segments: Vec<PathSegment>,
    rendered: String,
}

impl Path {
    /// Creates the root path (`/`).
    pub fn root() -> Self {
        Self::from_segments(true, Vec::new())
    }

    /// Creates the empty relative path (renders as the empty string).
    pub fn relative() -> Self {
        Self::from_segments(false, Vec::new())
    }

    /// Parses a rendered path such as `/user/phones[0]` or `items[2]/name`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validates::Path;
    ///
    /// let path = Path::parse("/tags[0]").unwrap();
    /// assert_eq!(path, Path::root().down_field("tags").down_index(0));
    ///
    /// assert!(Path::parse("/tags[-1]").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, PathError> {
        let (absolute, body) = match input.strip_prefix(SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let mut segments = Vec::new();
        if !body.is_empty() {
            for (position, part) in body.split(SEPARATOR).enumerate() {
                parse_part(input, part, position == 0, &mut segments)?;
            }
        }
        Ok(Self::from_segments(absolute, segments))
    }

    /// Returns true if this is the root path.
    pub fn is_root(&self) -> bool {
        self.absolute && self.segments.is_empty()
    }

    /// Returns true if the path starts at the root.
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Returns a new path with a field segment appended.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or contains `/`, `[` or `]`. A name like
    /// that is a bug in the caller, not bad input; use
    /// [`try_down_field`](Self::try_down_field) for names that come from data.
    pub fn down_field(&self, name: &str) -> Self {
        match self.try_down_field(name) {
            Ok(path) => path,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns a new path with a field segment appended, or an error if the
    /// name is not a valid field name.
    pub fn try_down_field(&self, name: &str) -> Result<Self, PathError> {
        check_field_name(name)?;
        Ok(self.push(PathSegment::Field(name.to_string())))
    }

    /// Returns a new path addressing element `index` of the array at this path.
    pub fn down_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Returns the parent location.
    ///
    /// On an array element only the trailing index marker is removed. The
    /// root (and the empty relative path) is its own parent.
    pub fn up(&self) -> Self {
        if self.segments.is_empty() {
            return self.clone();
        }
        let segments = self.segments[..self.segments.len() - 1].to_vec();
        Self::from_segments(self.absolute, segments)
    }

    /// Returns true if the path addresses an array element.
    pub fn is_array_element(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Index(_)))
    }

    /// Returns the trailing index, or `None` if this is not an array element.
    pub fn index(&self) -> Option<usize> {
        match self.segments.last() {
            Some(PathSegment::Index(index)) => Some(*index),
            _ => None,
        }
    }

    /// Returns the trailing field name, or `None` at the root or on an array element.
    pub fn field_name(&self) -> Option<&str> {
        match self.segments.last() {
            Some(PathSegment::Field(name)) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Returns how nested the location is.
    ///
    /// The root and a field directly below it both have depth 0. Every
    /// further field and every index marker adds one, so `/a[0][1][2]` has
    /// depth 3.
    pub fn depth(&self) -> usize {
        let (fields, indices) =
            self.segments
                .iter()
                .fold((0usize, 0usize), |(fields, indices), segment| match segment {
                    PathSegment::Field(_) => (fields + 1, indices),
                    PathSegment::Index(_) => (fields, indices + 1),
                });
        fields.saturating_sub(1) + indices
    }

    /// Walks the components from root to leaf with a pair of callbacks.
    ///
    /// `on_field` is called for each field segment and `on_index` for each
    /// index marker. Returns false as soon as a callback returns false, true
    /// if the walk completes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validates::Path;
    ///
    /// let path = Path::root().down_field("a").down_index(1).down_index(4);
    /// let mut fields = Vec::new();
    /// let mut indices = Vec::new();
    ///
    /// let completed = path.each_component(
    ///     |name| {
    ///         fields.push(name.to_string());
    ///         true
    ///     },
    ///     |index| {
    ///         indices.push(index);
    ///         true
    ///     },
    /// );
    ///
    /// assert!(completed);
    /// assert_eq!(fields, vec!["a"]);
    /// assert_eq!(indices, vec![1, 4]);
    /// ```
    pub fn each_component<F, I>(&self, on_field: F, on_index: I) -> bool
    where
        F: FnMut(&str) -> bool,
        I: FnMut(usize) -> bool,
    {
        self.visit(&mut (on_field, on_index))
    }

    /// Walks the components from root to leaf with a [`ComponentVisitor`].
    ///
    /// Use this form when both callbacks need the same mutable state.
    pub fn visit<V: ComponentVisitor + ?Sized>(&self, visitor: &mut V) -> bool {
        self.segments.iter().all(|segment| match segment {
            PathSegment::Field(name) => visitor.visit_field(name),
            PathSegment::Index(index) => visitor.visit_index(*index),
        })
    }

    /// Returns true if both paths address the same location.
    pub fn is_equal(&self, other: &Path) -> bool {
        self.rendered == other.rendered
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the last segment, or None for the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the rendered form of the path.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    pub(crate) fn push(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self::from_segments(self.absolute, segments)
    }

    pub(crate) fn from_segments(absolute: bool, segments: Vec<PathSegment>) -> Self {
        let rendered = render(absolute, &segments);
        Self {
            absolute,
            segments,
            rendered,
        }
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::root()
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rendered.hash(state);
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.rendered).finish()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

fn render(absolute: bool, segments: &[PathSegment]) -> String {
    let mut out = String::new();
    if absolute {
        out.push(SEPARATOR);
    }
    for (i, segment) in segments.iter().enumerate() {
        match segment {
            PathSegment::Field(name) => {
                if i > 0 {
                    out.push(SEPARATOR);
                }
                out.push_str(name);
            }
            PathSegment::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}

fn check_field_name(name: &str) -> Result<(), PathError> {
    if name.is_empty() {
        return Err(PathError::EmptyFieldName);
    }
    if name.contains([SEPARATOR, '[', ']']) {
        return Err(PathError::InvalidFieldName(name.to_string()));
    }
    Ok(())
}

// Parses one separator-delimited part: an optional field name followed by
// any number of index markers. Only the first part may omit the name, and
// only when an index follows (`/[0]`, `[0]/name`).
fn parse_part(
    input: &str,
    part: &str,
    first: bool,
    segments: &mut Vec<PathSegment>,
) -> Result<(), PathError> {
    let (name, mut rest) = match part.find('[') {
        Some(at) => part.split_at(at),
        None => (part, ""),
    };

    if name.is_empty() {
        if !first || rest.is_empty() {
            return Err(PathError::EmptyFieldName);
        }
    } else {
        check_field_name(name)?;
        segments.push(PathSegment::Field(name.to_string()));
    }

    while !rest.is_empty() {
        let inner = rest.strip_prefix('[').ok_or_else(|| PathError::Malformed {
            path: input.to_string(),
            reason: "text after an index marker",
        })?;
        let close = inner.find(']').ok_or_else(|| PathError::Malformed {
            path: input.to_string(),
            reason: "unterminated index marker",
        })?;
        let digits = &inner[..close];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PathError::InvalidIndex(digits.to_string()));
        }
        let index = digits
            .parse::<usize>()
            .map_err(|_| PathError::InvalidIndex(digits.to_string()))?;
        segments.push(PathSegment::Index(index));
        rest = &inner[close + 1..];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path() {
        let path = Path::root();
        assert!(path.is_root());
        assert!(path.is_absolute());
        assert_eq!(path.to_string(), "/");
        assert_eq!(path.depth(), 0);
        assert_eq!(path.field_name(), None);
        assert_eq!(path.index(), None);
    }

    #[test]
    fn test_down_field_at_root_has_single_separator() {
        let path = Path::root().down_field("puppy");
        assert_eq!(path.to_string(), "/puppy");
        assert_eq!(path.field_name(), Some("puppy"));
    }

    #[test]
    fn test_down_index_attaches_to_segment() {
        let path = Path::root()
            .down_field("bob")
            .down_field("phones")
            .down_index(0);
        assert_eq!(path.to_string(), "/bob/phones[0]");
        assert!(path.is_array_element());
        assert_eq!(path.index(), Some(0));
        assert_eq!(path.field_name(), None);
    }

    #[test]
    fn test_up() {
        let cases = [
            (Path::root(), Path::root()),
            (Path::root().down_field("puppy"), Path::root()),
            (
                Path::root().down_field("puppy").down_field("puppy"),
                Path::root().down_field("puppy"),
            ),
            (
                Path::root().down_field("puppy").down_index(0),
                Path::root().down_field("puppy"),
            ),
            (
                Path::root().down_field("puppy").down_index(1).down_index(2),
                Path::root().down_field("puppy").down_index(1),
            ),
            (Path::root().down_index(3), Path::root()),
        ];

        for (path, expected) in cases {
            assert_eq!(path.up(), expected, "up of {path}");
        }
    }

    #[test]
    fn test_depth() {
        let cases = [
            (Path::root(), 0),
            (Path::root().down_field("puppy"), 0),
            (Path::root().down_field("puppy").down_field("puppy"), 1),
            (
                Path::root()
                    .down_field("puppy")
                    .down_field("puppy")
                    .down_field("puppy"),
                2,
            ),
            (Path::root().down_field("puppy").down_index(0), 1),
            (
                Path::root().down_field("puppy").down_index(1).down_index(2),
                2,
            ),
            (Path::root().down_index(0), 1),
        ];

        for (path, expected) in cases {
            assert_eq!(path.depth(), expected, "depth of {path}");
        }
    }

    #[test]
    fn test_each_component_stops_early() {
        let path = Path::root()
            .down_field("a")
            .down_index(1)
            .down_field("b");
        let mut seen = Vec::new();

        let completed = path.each_component(
            |name| {
                seen.push(name.to_string());
                name != "a"
            },
            |_| panic!("walk should have stopped at the first field"),
        );

        assert!(!completed);
        assert_eq!(seen, vec!["a"]);
    }

    #[test]
    fn test_invalid_field_names() {
        let root = Path::root();
        assert_eq!(
            root.try_down_field("a/b"),
            Err(PathError::InvalidFieldName("a/b".to_string()))
        );
        assert!(matches!(
            root.try_down_field("a[0]"),
            Err(PathError::InvalidFieldName(_))
        ));
        assert!(matches!(
            root.try_down_field("a]"),
            Err(PathError::InvalidFieldName(_))
        ));
        assert_eq!(root.try_down_field(""), Err(PathError::EmptyFieldName));
    }

    #[test]
    #[should_panic(expected = "invalid field name")]
    fn test_down_field_panics_on_separator() {
        let _ = Path::root().down_field("user/name");
    }

    #[test]
    fn test_relative_paths() {
        let path = Path::relative().down_field("a").down_index(2).down_field("b");
        assert!(!path.is_absolute());
        assert_eq!(path.to_string(), "a[2]/b");
        assert_eq!(path.depth(), 2);

        let empty = path.up().up().up();
        assert_eq!(empty.to_string(), "");
        assert!(!empty.is_root());
        assert_eq!(empty.up(), empty);
    }

    #[test]
    fn test_parse_accepts_rendered_forms() {
        for input in ["/", "/a", "/a/b", "/a[0][1]/b", "/[0]", "", "a", "[3]/x"] {
            let path = Path::parse(input).unwrap();
            assert_eq!(path.as_str(), input);
        }
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(Path::parse("//a"), Err(PathError::EmptyFieldName));
        assert_eq!(Path::parse("/a/"), Err(PathError::EmptyFieldName));
        assert_eq!(Path::parse("/a/[0]"), Err(PathError::EmptyFieldName));
        assert_eq!(
            Path::parse("/a[-1]"),
            Err(PathError::InvalidIndex("-1".to_string()))
        );
        assert_eq!(
            Path::parse("/a[]"),
            Err(PathError::InvalidIndex(String::new()))
        );
        assert!(matches!(
            Path::parse("/a[0"),
            Err(PathError::Malformed { .. })
        ));
        assert!(matches!(
            Path::parse("/a[0]x"),
            Err(PathError::Malformed { .. })
        ));
        assert!(matches!(
            Path::parse("/a]"),
            Err(PathError::InvalidFieldName(_))
        ));
    }

    #[test]
    fn test_equality_is_by_rendering() {
        let path1 = Path::root().down_field("a").down_index(0);
        let path2: Path = "/a[0]".parse().unwrap();
        let path3 = Path::root().down_field("a").down_index(1);

        assert!(path1.is_equal(&path2));
        assert_eq!(path1, path2);
        assert_ne!(path1, path3);
        assert_ne!(Path::root(), Path::relative());
    }

    #[test]
    fn test_debug_shows_rendering() {
        let path = Path::root().down_field("test").down_index(0);
        assert_eq!(format!("{:?}", path), "Path(\"/test[0]\")");
    }
}
