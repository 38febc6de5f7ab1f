// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Employee not found: {0}")]
    EmployeeNotFound(i64),
    #[error("Fetch failed: {0}")]
    FetchFailed(String),
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(i64),
    #[error("Unknown department: {0}")]
    UnknownDepartment(String),
    #[error("Unknown tab: {0}")]
    UnknownTab(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
