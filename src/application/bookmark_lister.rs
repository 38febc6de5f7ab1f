// src/application/bookmark_lister.rs
use crate::application::{EmployeeDirectory, EmployeeSource};
use crate::domain::{BookmarkSet, DomainError, Employee};
use tracing::debug;

pub struct BookmarkLister<'a, S: EmployeeSource> {
    directory: &'a mut EmployeeDirectory<S>,
}

impl<'a, S: EmployeeSource> BookmarkLister<'a, S> {
    pub fn new(directory: &'a mut EmployeeDirectory<S>) -> Self {
        Self { directory }
    }

    /// Employees of the current list that are bookmarked, in list order.
    ///
    /// Bookmarks pointing at ids this session did not fetch are skipped.
    pub fn list_bookmarked(&mut self, bookmarks: &BookmarkSet) -> Result<Vec<Employee>, DomainError> {
        let employees = self.directory.employees()?;
        let bookmarked: Vec<Employee> = employees
            .iter()
            .filter(|e| bookmarks.contains(e.id))
            .cloned()
            .collect();

        let stale = bookmarks.len().saturating_sub(bookmarked.len());
        if stale > 0 {
            debug!(stale, "Bookmarks reference employees not in the current list");
        }
        Ok(bookmarked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{raw_user_fixture, MockEmployeeSource};

    #[test]
    fn given_bookmark_absent_from_list_when_listing_then_omits_it() {
        // Arrange
        let source = MockEmployeeSource::builder()
            .with_user(raw_user_fixture(1, "Emily", "Johnson"))
            .with_user(raw_user_fixture(2, "Michael", "Williams"))
            .with_user(raw_user_fixture(3, "Sophia", "Brown"))
            .build();
        let mut directory = EmployeeDirectory::new(source);
        let mut lister = BookmarkLister::new(&mut directory);
        let bookmarks: BookmarkSet = [7, 3, 1].into_iter().collect();

        // Act
        let result = lister.list_bookmarked(&bookmarks).expect("Listing should succeed");

        // Assert
        let ids: Vec<i64> = result.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn given_no_bookmarks_when_listing_then_returns_empty() {
        let source = MockEmployeeSource::builder()
            .with_user(raw_user_fixture(1, "Emily", "Johnson"))
            .build();
        let mut directory = EmployeeDirectory::new(source);
        let mut lister = BookmarkLister::new(&mut directory);

        let result = lister.list_bookmarked(&BookmarkSet::new()).unwrap();

        assert!(result.is_empty());
    }
}
