// src/application/employee_source.rs
use crate::domain::{Address, Department, DomainError, Employee, Rating};
use rand::Rng;
use serde::Deserialize;

/// One element of the upstream `users` array.
///
/// Only the fields the directory shows are read. Missing fields fall back to
/// empty values instead of rejecting the record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub image: String,
    pub address: RawAddress,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawAddress {
    pub city: String,
    pub state: String,
}

/// Envelope returned by the users endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersPage {
    pub users: Vec<RawUser>,
}

pub trait EmployeeSource {
    /// Fetch the raw user records. Called at most once per directory.
    fn fetch_users(&mut self) -> Result<Vec<RawUser>, DomainError>;
}

impl<S: EmployeeSource + ?Sized> EmployeeSource for Box<S> {
    fn fetch_users(&mut self) -> Result<Vec<RawUser>, DomainError> {
        (**self).fetch_users()
    }
}

/// Turn raw records into employees.
///
/// Department follows list position; rating is drawn from `rng`, so two
/// calls over the same input differ only in ratings.
pub fn into_employees<R: Rng + ?Sized>(users: Vec<RawUser>, rng: &mut R) -> Vec<Employee> {
    users
        .into_iter()
        .enumerate()
        .map(|(index, user)| Employee {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            age: user.age,
            address: Address {
                city: user.address.city,
                state: user.address.state,
            },
            image: user.image,
            department: Department::for_index(index),
            rating: Rating::random(rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PAYLOAD: &str = r#"{
        "users": [
            {
                "id": 1,
                "firstName": "Emily",
                "lastName": "Johnson",
                "maidenName": "Smith",
                "age": 28,
                "email": "emily.johnson@x.dummyjson.com",
                "image": "https://dummyjson.com/icon/emilys/128",
                "address": {"address": "626 Main Street", "city": "Phoenix", "state": "Mississippi"}
            },
            {
                "id": 2,
                "firstName": "Michael",
                "lastName": "Williams",
                "age": 35,
                "email": "michael.williams@x.dummyjson.com",
                "image": "https://dummyjson.com/icon/michaelw/128",
                "address": {"city": "Houston", "state": "Alabama"}
            }
        ],
        "total": 208,
        "skip": 0,
        "limit": 2
    }"#;

    #[test]
    fn given_upstream_payload_when_parsing_then_reads_users_and_ignores_extras() {
        let page: UsersPage = serde_json::from_str(PAYLOAD).unwrap();

        assert_eq!(page.users.len(), 2);
        assert_eq!(page.users[0].first_name, "Emily");
        assert_eq!(page.users[1].address.city, "Houston");
    }

    #[test]
    fn given_record_missing_fields_when_parsing_then_uses_empty_values() {
        let page: UsersPage = serde_json::from_str(r#"{"users": [{"id": 9}]}"#).unwrap();

        let user = &page.users[0];
        assert_eq!(user.id, 9);
        assert_eq!(user.first_name, "");
        assert_eq!(user.address, RawAddress::default());
    }

    #[test]
    fn given_users_when_mapping_then_assigns_department_by_position() {
        let page: UsersPage = serde_json::from_str(PAYLOAD).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let employees = into_employees(page.users, &mut rng);

        assert_eq!(employees[0].department, Department::Engineering);
        assert_eq!(employees[1].department, Department::Marketing);
        assert_eq!(employees[0].address.to_string(), "Phoenix, Mississippi");
        assert_eq!(employees[1].email, "michael.williams@x.dummyjson.com");
    }

    #[test]
    fn given_same_users_when_mapping_twice_then_only_ratings_may_differ() {
        let page: UsersPage = serde_json::from_str(PAYLOAD).unwrap();

        let first = into_employees(page.users.clone(), &mut StdRng::seed_from_u64(1));
        let second = into_employees(page.users, &mut StdRng::seed_from_u64(2));

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(
                Employee { rating: b.rating, ..a.clone() },
                b.clone(),
            );
        }
    }
}
