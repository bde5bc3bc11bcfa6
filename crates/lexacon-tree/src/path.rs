//! Delimited path lookup through entry trees.

use crate::{Entry, TreeError};

/// Separator used when a path does not name its own.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Resolve `path` through `root`, one `separator`-delimited segment at a time.
///
/// Empty segments are ignored, so `"a..b"` and `".a.b."` both walk `a` then
/// `b`. Maps descend by key and lists by decimal index; a missing child ends
/// the walk with `Ok(None)`. When a leaf is reached before the path is used
/// up, the remaining segments are ignored and the leaf is returned.
///
/// Fails if `root` is not a map or if `path` or `separator` is empty.
pub fn get_deep<'a>(
    root: &'a Entry,
    path: &str,
    separator: &str,
) -> Result<Option<&'a Entry>, TreeError> {
    if !root.is_map() {
        return Err(TreeError::NotAMap(root.kind()));
    }
    if path.is_empty() {
        return Err(TreeError::EmptyPath);
    }
    if separator.is_empty() {
        return Err(TreeError::EmptySeparator);
    }

    let mut current = root;
    for segment in path.split(separator).filter(|s| !s.is_empty()) {
        let next = match current {
            Entry::Map(map) => map.get(segment),
            Entry::List(items) => parse_index(segment).and_then(|i| items.get(i)),
            _ => break,
        };
        match next {
            Some(entry) => current = entry,
            None => return Ok(None),
        }
    }

    Ok(Some(current))
}

/// Canonical decimal index: digits only, no leading zero unless it is `0`.
fn parse_index(segment: &str) -> Option<usize> {
    let canonical = segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}
