// src/domain/mod.rs
pub mod bookmark;
pub mod employee;
pub mod error;
pub mod filter;
pub mod profile;
pub mod route;

pub use bookmark::BookmarkSet;
pub use employee::{Address, Department, Employee, Rating, RatingTone};
pub use error::DomainError;
pub use filter::FilterCriteria;
pub use profile::DetailTab;
pub use route::Route;
