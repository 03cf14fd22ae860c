//! Scene Paths
//!
//! [`ScenePath`] is a hierarchical identifier addressing a prim in the scene
//! graph, e.g. `/World/Props/Chair`. Paths are either absolute (leading `/`)
//! or relative (`Props/Chair`). The empty path is neither.
//!
//! Path text is interned, so a `ScenePath` is a `Copy` handle with O(1)
//! equality and hashing. Ordering is element-wise:
//!
//! - relative paths sort before absolute paths,
//! - within the same kind, elements compare lexicographically one by one,
//! - a path sorts before every path it is a prefix of (`/A` < `/A/B` < `/B`).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::errors::{PathError, Result};
use crate::interner::{self, Symbol};

const SEPARATOR: char = '/';
const ROOT_TEXT: &str = "/";

/// An interned scene graph path.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScenePath {
    text: Symbol,
}

impl ScenePath {
    /// Parses and validates path text.
    ///
    /// Every element must be an identifier (`[A-Za-z_][A-Za-z0-9_]*`).
    /// `""` yields the empty path and `"/"` the absolute root.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() || text == ROOT_TEXT {
            return Ok(Self::from_normalized(text));
        }

        let body = text.strip_prefix(SEPARATOR).unwrap_or(text);
        if body.ends_with(SEPARATOR) {
            return Err(PathError::TrailingSeparator {
                path: text.to_string(),
            });
        }

        for element in body.split(SEPARATOR) {
            if element.is_empty() {
                return Err(PathError::EmptyElement {
                    path: text.to_string(),
                });
            }
            if !is_valid_identifier(element) {
                return Err(PathError::InvalidElement {
                    path: text.to_string(),
                    element: element.to_string(),
                });
            }
        }

        Ok(Self::from_normalized(text))
    }

    #[inline]
    fn from_normalized(text: &str) -> Self {
        Self {
            text: interner::intern(text),
        }
    }

    /// The absolute root path `/`.
    #[inline]
    #[must_use]
    pub fn absolute_root() -> Self {
        Self::from_normalized(ROOT_TEXT)
    }

    /// The empty path.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::from_normalized("")
    }

    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        interner::resolve(self.text)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.as_str().is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_absolute(self) -> bool {
        self.as_str().starts_with(SEPARATOR)
    }

    #[inline]
    #[must_use]
    pub fn is_absolute_root(self) -> bool {
        self.as_str() == ROOT_TEXT
    }

    /// Iterates the path elements from the top down.
    pub fn elements(self) -> impl Iterator<Item = &'static str> {
        self.as_str()
            .split(SEPARATOR)
            .filter(|element| !element.is_empty())
    }

    #[must_use]
    pub fn element_count(self) -> usize {
        self.elements().count()
    }

    /// Last element, or `""` for the root and the empty path.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.elements().last().unwrap_or("")
    }

    /// Parent path.
    ///
    /// `None` for the empty path, the absolute root and single-element
    /// relative paths.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        if self.is_empty() || self.is_absolute_root() {
            return None;
        }
        let text = self.as_str();
        match text.rfind(SEPARATOR) {
            Some(0) => Some(Self::absolute_root()),
            Some(idx) => Some(Self::from_normalized(&text[..idx])),
            None => None,
        }
    }

    /// Returns this path extended by one child element.
    pub fn append_child(self, name: &str) -> Result<Self> {
        let text = self.as_str();
        let joined = if text.is_empty() {
            name.to_string()
        } else if self.is_absolute_root() {
            format!("{SEPARATOR}{name}")
        } else {
            format!("{text}{SEPARATOR}{name}")
        };

        if !is_valid_identifier(name) {
            return Err(PathError::InvalidElement {
                path: joined,
                element: name.to_string(),
            });
        }
        Ok(Self::from_normalized(&joined))
    }

    /// True if `prefix` is this path or one of its ancestors.
    ///
    /// The empty path is never a prefix.
    #[must_use]
    pub fn has_prefix(self, prefix: Self) -> bool {
        if prefix.is_empty() || self.is_absolute() != prefix.is_absolute() {
            return false;
        }
        let mut mine = self.elements();
        prefix.elements().all(|element| mine.next() == Some(element))
    }
}

fn is_valid_identifier(element: &str) -> bool {
    let mut chars = element.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl Default for ScenePath {
    fn default() -> Self {
        Self::empty()
    }
}

impl Ord for ScenePath {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.text == other.text {
            return Ordering::Equal;
        }
        self.is_absolute()
            .cmp(&other.is_absolute())
            .then_with(|| self.elements().cmp(other.elements()))
    }
}

impl PartialOrd for ScenePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for ScenePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ScenePath {
    type Error = PathError;

    fn try_from(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl fmt::Display for ScenePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ScenePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScenePath(<{}>)", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(text: &str) -> ScenePath {
        ScenePath::parse(text).unwrap()
    }

    #[test]
    fn test_parse_kinds() {
        assert!(path("/").is_absolute_root());
        assert!(path("/World/Mesh").is_absolute());
        assert!(!path("World/Mesh").is_absolute());
        assert!(path("").is_empty());
        assert!(!ScenePath::empty().is_absolute());
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert!(matches!(
            ScenePath::parse("/World//Mesh"),
            Err(PathError::EmptyElement { .. })
        ));
        assert!(matches!(
            ScenePath::parse("/World/"),
            Err(PathError::TrailingSeparator { .. })
        ));
        assert!(matches!(
            ScenePath::parse("/World/9lives"),
            Err(PathError::InvalidElement { element, .. }) if element == "9lives"
        ));
        assert!(matches!(
            ScenePath::parse("//"),
            Err(PathError::TrailingSeparator { .. })
        ));
    }

    #[test]
    fn test_equality_and_copy_semantics() {
        let a = path("/World/Chair");
        let b = a;
        assert_eq!(a, b);
        assert_eq!(a, path("/World/Chair"));
        assert_ne!(a, path("World/Chair"));
    }

    #[test]
    fn test_ordering_is_element_wise() {
        let mut paths = vec![
            path("/B"),
            path("/A/B"),
            path("/"),
            path("/A"),
            path("/A_b"),
            path("rel"),
        ];
        paths.sort();
        let sorted: Vec<_> = paths.iter().map(|p| p.as_str()).collect();
        assert_eq!(sorted, ["rel", "/", "/A", "/A/B", "/A_b", "/B"]);
    }

    #[test]
    fn test_parent_and_name() {
        assert_eq!(path("/World/Chair").parent(), Some(path("/World")));
        assert_eq!(path("/World").parent(), Some(ScenePath::absolute_root()));
        assert_eq!(path("/").parent(), None);
        assert_eq!(path("Chair").parent(), None);
        assert_eq!(path("/World/Chair").name(), "Chair");
        assert_eq!(path("/").name(), "");
    }

    #[test]
    fn test_append_child() {
        let root = ScenePath::absolute_root();
        let world = root.append_child("World").unwrap();
        assert_eq!(world, path("/World"));
        assert_eq!(world.append_child("Chair").unwrap(), path("/World/Chair"));
        assert_eq!(ScenePath::empty().append_child("Rel").unwrap(), path("Rel"));
        assert!(world.append_child("bad name").is_err());
    }

    #[test]
    fn test_has_prefix() {
        let chair = path("/World/Chair");
        assert!(chair.has_prefix(ScenePath::absolute_root()));
        assert!(chair.has_prefix(path("/World")));
        assert!(chair.has_prefix(chair));
        assert!(!chair.has_prefix(path("/Wor")));
        assert!(!chair.has_prefix(path("World")));
        assert!(!chair.has_prefix(ScenePath::empty()));
    }

    #[test]
    fn test_display() {
        assert_eq!(path("/World/Chair").to_string(), "/World/Chair");
        assert_eq!(format!("{:?}", path("/World")), "ScenePath(</World>)");
    }
}
