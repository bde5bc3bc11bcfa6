//! Entry trees for lexacon.
//!
//! Dictionaries are built from nested entry trees. This crate defines the
//! tree value type, the deep merge used to combine fragments, and the
//! delimited path lookup used to resolve keys.

mod callable;
mod entry;
mod merge;
mod path;

pub use callable::Callable;
pub use entry::{is_non_empty_string, Entry, EntryMap};
pub use merge::{deep_merge, merge_all};
pub use path::{get_deep, DEFAULT_SEPARATOR};

/// Invalid arguments to tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("lookup root is a {0}, not a map")]
    NotAMap(&'static str),

    #[error("lookup path must be a non-empty string")]
    EmptyPath,

    #[error("path separator must be a non-empty string")]
    EmptySeparator,
}
