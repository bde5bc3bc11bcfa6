//! Entry tree merge logic
//!
//! - Maps: deep-merge by key
//! - Lists: REPLACE (last wins)
//! - Text, callables, scalars: override (last wins)

use crate::{Entry, EntryMap};

/// Deep merge two entries.
///
/// Merge semantics:
/// - Map x Map: merge key by key (recursive)
/// - Any other pairing: overlay wins outright, so a map can replace a
///   scalar and a scalar can replace a map
/// - Null: override (null can replace any value)
pub fn deep_merge(base: Entry, overlay: Entry) -> Entry {
    match (base, overlay) {
        (Entry::Map(mut base_map), Entry::Map(overlay_map)) => {
            merge_into(&mut base_map, overlay_map);
            Entry::Map(base_map)
        }

        (_, overlay) => overlay,
    }
}

fn merge_into(base: &mut EntryMap, overlay: EntryMap) {
    for (key, overlay_value) in overlay {
        let merged = match base.remove(&key) {
            Some(base_value) => deep_merge(base_value, overlay_value),
            None => overlay_value,
        };
        base.insert(key, merged);
    }
}

/// Merge entry fragments in order (first is base, last has highest precedence).
///
/// Items that are not maps contribute no keys. The result is always a map.
pub fn merge_all<I>(items: I) -> EntryMap
where
    I: IntoIterator<Item = Entry>,
{
    items.into_iter().fold(EntryMap::new(), |mut output, item| {
        if let Entry::Map(map) = item {
            merge_into(&mut output, map);
        }
        output
    })
}
