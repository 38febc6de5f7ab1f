// src/domain/filter.rs
use crate::domain::{Department, Employee, Rating};
use serde::Serialize;

/// Dashboard search and filter selection. Transient, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub search: String,
    pub department: Option<Department>,
    pub min_rating: Option<Rating>,
}

impl FilterCriteria {
    pub fn new(
        search: impl Into<String>,
        department: Option<Department>,
        min_rating: Option<Rating>,
    ) -> Self {
        Self {
            search: search.into(),
            department,
            min_rating,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.department.is_none() && self.min_rating.is_none()
    }

    /// All three predicates must hold. Search is a case-insensitive substring
    /// match against first name, last name, email or department label.
    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_search(employee)
            && self.department.map_or(true, |d| employee.department == d)
            && self.min_rating.map_or(true, |r| employee.rating >= r)
    }

    fn matches_search(&self, employee: &Employee) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [
            employee.first_name.as_str(),
            employee.last_name.as_str(),
            employee.email.as_str(),
            employee.department.label(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Order-preserving subsequence of `employees` that matches.
    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        employees
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}

/// Distinct departments in first-seen order.
pub fn departments_present(employees: &[Employee]) -> Vec<Department> {
    let mut seen = Vec::new();
    for employee in employees {
        if !seen.contains(&employee.department) {
            seen.push(employee.department);
        }
    }
    seen
}
