// ABOUTME: Saved locations keyed by a short name.
// ABOUTME: Iteration is always sorted by key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Path fragment marking a hidden directory or file
const HIDDEN_MARKER: &str = "/.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bookmarks {
    entries: BTreeMap<String, PathBuf>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a bookmark, returning the path it replaced
    pub fn insert(&mut self, key: impl Into<String>, path: impl Into<PathBuf>) -> Option<PathBuf> {
        self.entries.insert(key.into(), path.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<PathBuf> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Path> {
        self.entries.get(key).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All bookmarks, sorted by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> + Clone + '_ {
        self.entries.iter().map(|(k, p)| (k.as_str(), p.as_path()))
    }

    /// Sorted bookmarks, skipping hidden paths unless `show_hidden` is set.
    /// The iterator can be cloned to walk the listing again.
    pub fn visible(&self, show_hidden: bool) -> impl Iterator<Item = (&str, &Path)> + Clone + '_ {
        self.iter()
            .filter(move |(_, path)| show_hidden || !is_hidden(path))
    }
}

fn is_hidden(path: &Path) -> bool {
    path.to_string_lossy().contains(HIDDEN_MARKER)
}

impl<K: Into<String>, P: Into<PathBuf>> FromIterator<(K, P)> for Bookmarks {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, p)| (k.into(), p.into()))
                .collect(),
        }
    }
}
