//! Provide path-based access to nested structured data.
//!
//! A [`Path`] is an ordered list of [`PathIndex`] steps. Each step either
//! picks a position in a sequence ([`PathIndex::Index`]) or a key in a
//! mapping ([`PathIndex::Key`]). A key applied to a sequence is broadcast
//! to every element.
//!
//! There are two layers:
//!
//! - [`PathIndex`]: a single step, with `get`, `set` and their checked
//!   `try_*` versions.
//! - [`PathAccess`]: multi-step reads and writes, implemented for every
//!   [`Structure`](crate::Structure). Paths are given through [`IntoPath`].
//!
//! Plain reads and writes never fail: a read of something absent returns
//! `None`, a write that cannot apply leaves the node unchanged. The `try_*`
//! variants report an [`AccessError`] instead.
//!
//! # Syntax
//!
//! A `&str` or `String` path is split on `.`; every token is a key, even
//! a numeric one. Use [`path!`](crate::path) or a list of [`PathIndex`]
//! to address sequence positions.
//!
//! - `"user.name"`: key `user`, then key `name`
//! - `path!["tags", 0]`: key `tags`, then index `0`
//!
//! # Examples
//!
//! ```
//! use np_tree::{PathAccess, path};
//! use serde_json::json;
//!
//! let rows = json!([
//!     { "name": "a", "tags": [1, 2] },
//!     { "name": "b", "tags": [3] },
//! ]);
//!
//! // broadcast a key over the sequence
//! let names = rows.get_path("name").unwrap();
//! assert_eq!(*names, json!(["a", "b"]));
//!
//! // then index into the projection
//! let first = rows.get_path(path!["tags", 0]).unwrap();
//! assert_eq!(*first, json!([1, 2]));
//!
//! // one missing element fails the whole broadcast
//! assert!(rows.try_get_path("missing").is_err());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod path;
mod path_access;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::{AccessError, AccessErrorKind, PathIndex};
pub use path::{IntoPath, Path};
pub use path_access::{PathAccess, check_resolve_set, resolve_get, resolve_set, try_resolve_get};
