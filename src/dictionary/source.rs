//! Dictionary sources and the flatten step.

use lexacon_tree::{Entry, EntryMap};

use super::Dictionary;

/// One input to [`Dictionary::new`].
///
/// A source is an entry fragment, an existing dictionary (whose entries are
/// merged in its place), or a nested list of further sources.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Entries(Entry),
    Dictionary(Dictionary),
    List(Vec<Source>),
}

impl Source {
    /// True only for sources built by [`Dictionary::new`].
    pub fn is_dictionary(&self) -> bool {
        matches!(self, Source::Dictionary(_))
    }

    /// Short description used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Source::Entries(entry) => entry.kind(),
            Source::Dictionary(_) => "dictionary",
            Source::List(_) => "source list",
        }
    }
}

/// Expand nested source lists depth-first, preserving order.
///
/// The output never contains [`Source::List`].
pub fn flatten_sources<I, S>(sources: I) -> Vec<Source>
where
    I: IntoIterator<Item = S>,
    S: Into<Source>,
{
    let mut flat = Vec::new();
    for source in sources {
        push_flat(&mut flat, source.into());
    }
    flat
}

fn push_flat(flat: &mut Vec<Source>, source: Source) {
    match source {
        Source::List(items) => {
            for item in items {
                push_flat(flat, item);
            }
        }
        other => flat.push(other),
    }
}

impl From<Entry> for Source {
    fn from(value: Entry) -> Self {
        Source::Entries(value)
    }
}

impl From<EntryMap> for Source {
    fn from(value: EntryMap) -> Self {
        Source::Entries(Entry::Map(value))
    }
}

impl From<serde_json::Value> for Source {
    fn from(value: serde_json::Value) -> Self {
        Source::Entries(Entry::from(value))
    }
}

impl From<Dictionary> for Source {
    fn from(value: Dictionary) -> Self {
        Source::Dictionary(value)
    }
}

impl From<&Dictionary> for Source {
    fn from(value: &Dictionary) -> Self {
        Source::Dictionary(value.clone())
    }
}

impl<S: Into<Source>> From<Vec<S>> for Source {
    fn from(value: Vec<S>) -> Self {
        Source::List(value.into_iter().map(Into::into).collect())
    }
}
