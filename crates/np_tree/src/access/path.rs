//! Provide `path` interface for path accessing.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::{self, Vec};
use core::{fmt, slice};

use fastvec::FastVec;

use crate::access::PathIndex;

// -----------------------------------------------------------------------------
// Path

/// An ordered list of [`PathIndex`], root to leaf.
///
/// The empty path addresses the node itself. Order matters and repeated
/// steps are kept.
///
/// # Syntax
///
/// [`Path::parse_dotted`] splits a string on `.` and turns **every** token
/// into a [`PathIndex::Key`], numeric tokens included. Empty tokens are
/// skipped, so `""` is the empty path and `"a..b"` reads as `"a.b"`.
///
/// Indices and keys can be mixed with the [`path!`](crate::path) macro.
///
/// # Examples
///
/// ```
/// use np_tree::{Path, PathIndex, path};
///
/// let dotted = Path::parse_dotted("user.tags.0");
/// assert_eq!(dotted.len(), 3);
/// assert_eq!(dotted.as_slice()[2], PathIndex::Key("0".into()));
///
/// let mixed = path!["user", "tags", 0];
/// assert_eq!(mixed.as_slice()[2], PathIndex::Index(0));
/// assert_eq!(mixed.to_string(), ".user.tags[0]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path<'a>(Box<[PathIndex<'a>]>);

impl<'a> Path<'a> {
    /// Creates the empty path.
    #[inline]
    pub fn empty() -> Self {
        Self(Box::default())
    }

    /// Parses a dotted path; every non-empty token becomes a key.
    ///
    /// Keys borrow from `path`.
    pub fn parse_dotted(path: &'a str) -> Self {
        let mut vec: FastVec<PathIndex<'a>, 8> = FastVec::new();
        let data = vec.get();

        for token in path.split('.').filter(|token| !token.is_empty()) {
            data.push(PathIndex::Key(Cow::Borrowed(token)));
        }

        Self(vec.into_boxed_slice())
    }

    /// Returns the number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this path addresses the node itself.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the steps as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[PathIndex<'a>] {
        &self.0
    }

    /// Returns an iterator over the steps.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, PathIndex<'a>> {
        self.0.iter()
    }

    /// Converts this into an "owned" value.
    pub fn into_owned(self) -> Path<'static> {
        self.into_iter().map(PathIndex::into_owned).collect()
    }

    /// Concat two `Path`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use np_tree::{Path, path};
    /// let a = Path::parse_dotted("one.two");
    /// let b = path![3];
    /// assert_eq!(a.concat(b), path!["one", "two", 3]);
    /// ```
    pub fn concat(self, other: Path<'a>) -> Self {
        let mut vec: FastVec<PathIndex<'a>, 12> = FastVec::new();
        let data = vec.get();
        for index in self.0.into_vec().into_iter().chain(other.0.into_vec()) {
            data.push(index);
        }
        Self(vec.into_boxed_slice())
    }
}

impl<'a> From<Vec<PathIndex<'a>>> for Path<'a> {
    #[inline]
    fn from(value: Vec<PathIndex<'a>>) -> Self {
        Self(value.into_boxed_slice())
    }
}

impl<'a> From<Box<[PathIndex<'a>]>> for Path<'a> {
    #[inline]
    fn from(value: Box<[PathIndex<'a>]>) -> Self {
        Self(value)
    }
}

impl<'a> FromIterator<PathIndex<'a>> for Path<'a> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = PathIndex<'a>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for Path<'a> {
    type Item = PathIndex<'a>;
    type IntoIter = vec::IntoIter<PathIndex<'a>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'p, 'a> IntoIterator for &'p Path<'a> {
    type Item = &'p PathIndex<'a>;
    type IntoIter = slice::Iter<'p, PathIndex<'a>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for it in &self.0 {
            fmt::Display::fmt(it, f)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// IntoPath

/// An interface where the type implementing
/// this trait can be considered as a "Path" for path access.
///
/// - `&str` / `String`: a dotted path, see [`Path::parse_dotted`].
/// - `usize`: a single [`PathIndex::Index`].
/// - [`PathIndex`]: a single step.
/// - [`Path`], slices, arrays and `Vec`s of [`PathIndex`]: the steps as given.
pub trait IntoPath<'a> {
    /// Converts `self` into a [`Path`].
    fn into_path(self) -> Path<'a>;
}

impl<'a> IntoPath<'a> for Path<'a> {
    #[inline]
    fn into_path(self) -> Path<'a> {
        self
    }
}

impl<'a> IntoPath<'a> for &Path<'a> {
    #[inline]
    fn into_path(self) -> Path<'a> {
        self.clone()
    }
}

impl<'a> IntoPath<'a> for &'a str {
    #[inline]
    fn into_path(self) -> Path<'a> {
        Path::parse_dotted(self)
    }
}

impl<'a> IntoPath<'a> for &'a String {
    #[inline]
    fn into_path(self) -> Path<'a> {
        Path::parse_dotted(self)
    }
}

impl IntoPath<'static> for String {
    #[inline]
    fn into_path(self) -> Path<'static> {
        Path::parse_dotted(&self).into_owned()
    }
}

impl<'a> IntoPath<'a> for usize {
    #[inline]
    fn into_path(self) -> Path<'a> {
        Path(Box::new([PathIndex::Index(self)]))
    }
}

impl<'a> IntoPath<'a> for PathIndex<'a> {
    #[inline]
    fn into_path(self) -> Path<'a> {
        Path(Box::new([self]))
    }
}

impl<'a> IntoPath<'a> for &[PathIndex<'a>] {
    #[inline]
    fn into_path(self) -> Path<'a> {
        Path(self.into())
    }
}

impl<'a, const N: usize> IntoPath<'a> for [PathIndex<'a>; N] {
    #[inline]
    fn into_path(self) -> Path<'a> {
        Path(Box::new(self))
    }
}

impl<'a> IntoPath<'a> for Vec<PathIndex<'a>> {
    #[inline]
    fn into_path(self) -> Path<'a> {
        Path::from(self)
    }
}

// -----------------------------------------------------------------------------
// Tests
