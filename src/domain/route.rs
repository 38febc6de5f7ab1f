// src/domain/route.rs
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static EMPLOYEE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/employee/([^/]+)$").expect("valid employee path regex"));

/// Navigable views, addressed by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    EmployeeDetail(i64),
    /// Detail path whose segment is not an employee id. Never matches anyone.
    UnknownEmployee(String),
    Bookmarks,
    Analytics,
    NotFound(String),
}

impl Route {
    /// Navbar entries, in display order.
    pub const NAV: [(Route, &'static str); 3] = [
        (Route::Dashboard, "Dashboard"),
        (Route::Bookmarks, "Bookmarks"),
        (Route::Analytics, "Analytics"),
    ];

    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        match normalized {
            "/" => Route::Dashboard,
            "/bookmarks" => Route::Bookmarks,
            "/analytics" => Route::Analytics,
            other => match EMPLOYEE_PATH.captures(other).and_then(|caps| caps.get(1)) {
                Some(segment) => segment
                    .as_str()
                    .parse::<i64>()
                    .map(Route::EmployeeDetail)
                    .unwrap_or_else(|_| Route::UnknownEmployee(segment.as_str().to_string())),
                None => Route::NotFound(trimmed.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::EmployeeDetail(id) => format!("/employee/{id}"),
            Route::UnknownEmployee(segment) => format!("/employee/{segment}"),
            Route::Bookmarks => "/bookmarks".to_string(),
            Route::Analytics => "/analytics".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
