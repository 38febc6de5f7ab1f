// src/application/bookmark_store.rs
use crate::constants::BOOKMARKS_STORAGE_KEY;
use crate::domain::{BookmarkSet, DomainError};
use tracing::{debug, info, instrument};

/// String key/value persistence with the shape of browser local storage.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, DomainError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), DomainError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, DomainError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        (**self).set_item(key, value)
    }
}

/// Bookmarked employee ids, mirrored to storage after every change.
///
/// One store instance is created by the caller and handed to every view
/// that reads or toggles bookmarks.
#[derive(Debug)]
pub struct BookmarkStore<S: KeyValueStorage> {
    storage: S,
    bookmarks: BookmarkSet,
}

impl<S: KeyValueStorage> BookmarkStore<S> {
    /// Restore the persisted set. Missing, unreadable or malformed data
    /// yields an empty set and is not reported.
    pub fn open(storage: S) -> Self {
        let bookmarks = match storage.get_item(BOOKMARKS_STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<BookmarkSet>(&raw).unwrap_or_else(|e| {
                debug!(error = %e, "Ignoring malformed bookmarks");
                BookmarkSet::new()
            }),
            Ok(None) => BookmarkSet::new(),
            Err(e) => {
                debug!(error = %e, "Ignoring unreadable bookmarks");
                BookmarkSet::new()
            }
        };
        debug!(count = bookmarks.len(), "Opened bookmark store");
        Self { storage, bookmarks }
    }

    /// Flip membership of `id` and persist the whole set.
    /// Returns whether `id` is bookmarked afterwards.
    ///
    /// The in-memory set only changes once the write succeeded.
    #[instrument(level = "debug", skip(self))]
    pub fn toggle(&mut self, id: i64) -> Result<bool, DomainError> {
        let mut next = self.bookmarks.clone();
        let bookmarked = next.toggle(id);
        self.persist(&next)?;
        self.bookmarks = next;
        info!(employee_id = id, bookmarked, "Toggled bookmark");
        Ok(bookmarked)
    }

    pub fn is_bookmarked(&self, id: i64) -> bool {
        self.bookmarks.contains(id)
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self, bookmarks: &BookmarkSet) -> Result<(), DomainError> {
        let encoded = serde_json::to_string(bookmarks)
            .map_err(|e| DomainError::Storage(format!("Failed to encode bookmarks: {}", e)))?;
        self.storage.set_item(BOOKMARKS_STORAGE_KEY, &encoded)
    }
}
