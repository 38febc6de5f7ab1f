// src/application/employee_directory.rs
use crate::application::employee_source::{into_employees, EmployeeSource};
use crate::domain::{DomainError, Employee};
use rand::Rng;
use tracing::{debug, info, warn};

/// Message shown for any fetch failure, network or parse alike.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch employees";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Employee>),
    Failed(String),
}

/// The employee list for one view.
///
/// Issues a single request the first time it is loaded and keeps the settled
/// result. There is no retry: a failed directory stays failed.
pub struct EmployeeDirectory<S: EmployeeSource> {
    source: S,
    state: LoadState,
}

impl<S: EmployeeSource> EmployeeDirectory<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: LoadState::Loading,
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn load(&mut self) -> &LoadState {
        self.load_with(&mut rand::thread_rng())
    }

    /// Settle the directory using `rng` for ratings. No-op once settled.
    pub fn load_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &LoadState {
        if !self.is_loading() {
            debug!("Employee directory already settled");
            return &self.state;
        }

        self.state = match self.source.fetch_users() {
            Ok(users) => {
                let employees = into_employees(users, rng);
                info!(count = employees.len(), "Loaded employees");
                LoadState::Loaded(employees)
            }
            Err(e) => {
                warn!(error = %e, "Employee fetch failed");
                LoadState::Failed(FETCH_ERROR_MESSAGE.to_string())
            }
        };
        &self.state
    }

    /// Loaded employees, loading first if needed.
    pub fn employees(&mut self) -> Result<&[Employee], DomainError> {
        self.load();
        match &self.state {
            LoadState::Loaded(employees) => Ok(employees),
            LoadState::Failed(message) => Err(DomainError::FetchFailed(message.clone())),
            LoadState::Loading => Err(DomainError::FetchFailed(FETCH_ERROR_MESSAGE.to_string())),
        }
    }

    /// User-facing message of a failed load.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn find(&mut self, id: i64) -> Result<Option<&Employee>, DomainError> {
        Ok(self.employees()?.iter().find(|e| e.id == id))
    }
}
