// src/util/testing.rs

use anyhow::Result;
use std::cell::Cell;
use std::env;
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::employee_source::{RawAddress, RawUser};
use crate::application::EmployeeSource;
use crate::domain::{Address, Department, DomainError, Employee, Rating};

/// Shared mock source for testing use cases that depend on EmployeeSource
///
/// Serves a fixed list of users (or a fixed failure) and counts how many
/// times it was asked.
///
/// # Examples
///
/// ```
/// use hrview::util::testing::{raw_user_fixture, MockEmployeeSource};
///
/// let mock = MockEmployeeSource::builder()
///     .with_user(raw_user_fixture(1, "Emily", "Johnson"))
///     .build();
/// let calls = mock.call_counter();
/// assert_eq!(calls.get(), 0);
/// ```
pub struct MockEmployeeSource {
    users: Vec<RawUser>,
    failure: Option<String>,
    calls: Rc<Cell<usize>>,
}

impl MockEmployeeSource {
    pub fn builder() -> MockEmployeeSourceBuilder {
        MockEmployeeSourceBuilder::new()
    }

    /// Shared handle to the number of `fetch_users` calls so far.
    pub fn call_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl EmployeeSource for MockEmployeeSource {
    fn fetch_users(&mut self) -> Result<Vec<RawUser>, DomainError> {
        self.calls.set(self.calls.get() + 1);
        match &self.failure {
            Some(reason) => Err(DomainError::FetchFailed(reason.clone())),
            None => Ok(self.users.clone()),
        }
    }
}

/// Builder for MockEmployeeSource
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockEmployeeSourceBuilder {
    users: Vec<RawUser>,
    failure: Option<String>,
}

impl MockEmployeeSourceBuilder {
    pub fn new() -> Self {
        Self {
            users: vec![],
            failure: None,
        }
    }

    /// Append a user to the served list
    pub fn with_user(mut self, user: RawUser) -> Self {
        self.users.push(user);
        self
    }

    /// Make every fetch fail with `reason`
    pub fn with_failure(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    pub fn build(self) -> MockEmployeeSource {
        MockEmployeeSource {
            users: self.users,
            failure: self.failure,
            calls: Rc::new(Cell::new(0)),
        }
    }
}

impl Default for MockEmployeeSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn email_for(first: &str, last: &str) -> String {
    format!("{}.{}@x.dummyjson.com", first.to_lowercase(), last.to_lowercase())
}

/// Raw upstream record with derived email and placeholder address.
pub fn raw_user_fixture(id: i64, first: &str, last: &str) -> RawUser {
    RawUser {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email_for(first, last),
        age: 30,
        image: format!("https://dummyjson.com/icon/user{id}/128"),
        address: RawAddress {
            city: "Phoenix".to_string(),
            state: "Arizona".to_string(),
        },
    }
}

/// Employee with a fixed department and rating.
///
/// # Panics
/// If `rating` is outside `1..=5`.
pub fn employee_fixture(
    id: i64,
    first: &str,
    last: &str,
    department: Department,
    rating: i64,
) -> Employee {
    Employee {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email_for(first, last),
        age: 30,
        address: Address {
            city: "Phoenix".to_string(),
            state: "Arizona".to_string(),
        },
        image: format!("https://dummyjson.com/icon/user{id}/128"),
        department,
        rating: Rating::new(rating).expect("fixture rating must be 1..=5"),
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "hyper_util", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
