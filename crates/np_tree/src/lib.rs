#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    np_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
        #[cfg(feature = "json")] => json,
        #[cfg(feature = "serde")] => serde,
        #[cfg(feature = "hashbrown")] => hashbrown,
    }
}

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod access;
pub mod impls;
pub mod structure;

crate::cfg::serde! {
    pub mod serde;
}

#[cfg(test)]
pub(crate) mod test_utils;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use access::{AccessError, AccessErrorKind, IntoPath, Path, PathAccess, PathIndex};
pub use structure::{Mapping, Structure, StructureKind};

/// Everything needed to read and write values by path.
pub mod prelude {
    pub use crate::access::{IntoPath, Path, PathAccess, PathIndex};
    pub use crate::path;
    pub use crate::structure::{Mapping, Structure};
}

// -----------------------------------------------------------------------------
// Macros

/// Builds a [`Path`] from a mixed list of indices and keys.
///
/// Every element goes through [`PathIndex::from`]: integers become
/// [`PathIndex::Index`], strings become a single [`PathIndex::Key`]
/// (no splitting on `.`).
///
/// # Examples
///
/// ```
/// use np_tree::{path, PathIndex};
///
/// let p = path![0, "name"];
/// assert_eq!(p.as_slice(), &[PathIndex::Index(0), PathIndex::Key("name".into())]);
///
/// // keys are taken verbatim
/// assert_eq!(path!["a.b"].len(), 1);
/// assert!(path![].is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::access::Path::empty()
    };
    ($($index:expr),+ $(,)?) => {
        <$crate::access::Path as ::core::iter::FromIterator<_>>::from_iter([
            $($crate::access::PathIndex::from($index)),+
        ])
    };
}
