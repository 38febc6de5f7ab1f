// src/application/mod.rs
pub mod bookmark_lister;
pub mod bookmark_store;
pub mod employee_directory;
pub mod employee_lister;
pub mod employee_source;
pub mod employee_viewer;

pub use bookmark_lister::BookmarkLister;
pub use bookmark_store::{BookmarkStore, KeyValueStorage};
pub use employee_directory::{EmployeeDirectory, LoadState};
pub use employee_lister::{DashboardView, EmployeeLister};
pub use employee_source::{EmployeeSource, RawUser};
pub use employee_viewer::EmployeeViewer;
