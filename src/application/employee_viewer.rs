// src/application/employee_viewer.rs
use crate::application::{EmployeeDirectory, EmployeeSource};
use crate::domain::{DomainError, Employee};

pub struct EmployeeViewer<'a, S: EmployeeSource> {
    directory: &'a mut EmployeeDirectory<S>,
}

impl<'a, S: EmployeeSource> EmployeeViewer<'a, S> {
    pub fn new(directory: &'a mut EmployeeDirectory<S>) -> Self {
        Self { directory }
    }

    pub fn view_employee(&mut self, employee_id: i64) -> Result<Employee, DomainError> {
        self.directory
            .find(employee_id)?
            .cloned()
            .ok_or(DomainError::EmployeeNotFound(employee_id))
    }
}
