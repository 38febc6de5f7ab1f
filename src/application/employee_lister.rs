// src/application/employee_lister.rs
use crate::application::{EmployeeDirectory, EmployeeSource};
use crate::domain::filter::departments_present;
use crate::domain::{Department, DomainError, Employee, FilterCriteria};
use serde::Serialize;

/// What the dashboard shows for one set of criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub criteria: FilterCriteria,
    /// Departments present in the full list, for the department selector.
    pub departments: Vec<Department>,
    /// Employees matching `criteria`, in list order.
    pub employees: Vec<Employee>,
    /// The full list the criteria were applied to.
    pub roster: Vec<Employee>,
    pub total: usize,
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

pub struct EmployeeLister<'a, S: EmployeeSource> {
    directory: &'a mut EmployeeDirectory<S>,
}

impl<'a, S: EmployeeSource> EmployeeLister<'a, S> {
    pub fn new(directory: &'a mut EmployeeDirectory<S>) -> Self {
        Self { directory }
    }

    /// Filter the directory by `criteria`. Re-derived on every call.
    pub fn list_employees(&mut self, criteria: &FilterCriteria) -> Result<DashboardView, DomainError> {
        let employees = self.directory.employees()?;
        Ok(DashboardView {
            criteria: criteria.clone(),
            departments: departments_present(employees),
            employees: criteria.apply(employees),
            roster: employees.to_vec(),
            total: employees.len(),
        })
    }
}
