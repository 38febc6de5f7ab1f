// src/domain/bookmark.rs
use serde::{Deserialize, Deserializer, Serialize};

/// Bookmarked employee ids.
///
/// Membership is what matters for lookups, but insertion order is kept so
/// the ids display in the order they were bookmarked. Ids are not checked
/// against any employee list: a bookmark may outlive the record it points at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BookmarkSet {
    ids: Vec<i64>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Returns the new membership.
    pub fn toggle(&mut self, id: i64) -> bool {
        if let Some(pos) = self.ids.iter().position(|&b| b == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<i64> for BookmarkSet {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        let mut ids = Vec::new();
        for id in iter {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids }
    }
}

impl<'de> Deserialize<'de> for BookmarkSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<i64>::deserialize(deserializer)?;
        Ok(ids.into_iter().collect())
    }
}
