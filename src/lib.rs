#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use np_cfg as cfg;
pub use np_tree as tree;

pub use np_tree::path;

/// Everything needed to read and write values by path.
pub mod prelude {
    pub use np_tree::prelude::*;
}
