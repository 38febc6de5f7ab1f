mod helpers;

use helpers::{failing_directory, staff_directory, staff_source_without};
use hrview::application::{BookmarkStore, EmployeeDirectory};
use hrview::cli::args::{Command, OutputFormat};
use hrview::domain::{DetailTab, Employee};
use hrview::infrastructure::MemoryStorage;
use hrview::ports::Site;
use hrview::{execute, Output};

fn store() -> BookmarkStore<MemoryStorage> {
    BookmarkStore::open(MemoryStorage::new())
}

fn site_of(output: Output) -> Site {
    match output {
        Output::Site(site) => site,
        Output::Stdout(text) => panic!("Expected a site, got stdout: {text}"),
    }
}

fn html_of(output: Output) -> String {
    let site = site_of(output);
    site.entry_page()
        .unwrap_or_else(|| panic!("Entry page {} was not rendered", site.entry))
        .html
        .clone()
}

fn stdout_of(output: Output) -> String {
    match output {
        Output::Stdout(text) => text,
        Output::Site(site) => panic!("Expected stdout, got site opening {}", site.entry),
    }
}

fn visible_cards(html: &str) -> usize {
    html.matches(r#"class="card" data-employee-id"#).count()
}

fn hidden_cards(html: &str) -> usize {
    html.matches(r#"class="card" hidden"#).count()
}

fn list(search: &str, format: OutputFormat) -> Command {
    Command::List {
        search: search.to_string(),
        department: None,
        min_rating: None,
        format,
    }
}

fn open(path: &str) -> Command {
    Command::Open {
        path: path.to_string(),
    }
}

#[test]
fn given_no_filters_when_listing_as_page_then_shows_all_twenty() {
    // Act
    let output = execute(list("", OutputFormat::default()), staff_directory(), &mut store()).unwrap();

    // Assert
    let html = html_of(output);
    assert!(html.contains("Showing 20 of 20 employees"));
    assert_eq!(visible_cards(&html), 20);
    assert_eq!(hidden_cards(&html), 0);
    assert!(html.contains(r#"id="no-matches" hidden>"#));
}

#[test]
fn given_twenty_records_and_unmatched_search_when_listing_then_shows_no_matches_state() {
    let output = execute(list("xyzzy", OutputFormat::default()), staff_directory(), &mut store()).unwrap();

    let html = html_of(output);
    assert!(html.contains("Showing 0 of 20 employees"));
    assert!(html.contains(r#"id="no-matches">No employees found matching your criteria"#));
    assert_eq!(visible_cards(&html), 0);
    assert_eq!(hidden_cards(&html), 20);
}

#[test]
fn given_dashboard_site_when_following_links_then_every_target_is_rendered() {
    // Arrange
    let href = regex::Regex::new(r#"href="([^"]+)""#).unwrap();

    // Act
    let site = site_of(execute(list("", OutputFormat::default()), staff_directory(), &mut store()).unwrap());

    // Assert
    assert_eq!(site.entry, "index.html");
    for page in &site.pages {
        for caps in href.captures_iter(&page.html) {
            let target = &caps[1];
            assert!(!target.starts_with('/'), "{} links to absolute {target}", page.file_name);
            assert!(site.page(target).is_some(), "{} links to missing {target}", page.file_name);
        }
    }
    assert!(site.page("employee-20-feedback.html").is_some());
}

#[test]
fn given_search_when_listing_as_json_then_prints_matching_employees() {
    let format = OutputFormat { json: true, text: false };

    let output = execute(list("johnson", format), staff_directory(), &mut store()).unwrap();

    let employees: Vec<Employee> = serde_json::from_str(&stdout_of(output)).unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].first_name, "Emily");
}

#[test]
fn given_fetch_failure_when_listing_as_page_then_renders_generic_error() {
    let output = execute(list("", OutputFormat::default()), failing_directory(), &mut store()).unwrap();

    let html = html_of(output);
    assert!(html.contains("Failed to fetch employees"));
    assert!(!html.contains("connection refused"));
}

#[test]
fn given_fetch_failure_when_listing_as_text_then_returns_error() {
    let format = OutputFormat { json: false, text: true };

    let result = execute(list("", format), failing_directory(), &mut store());

    let err = result.expect_err("Should fail");
    assert_eq!(err.to_string(), "Failed to fetch employees");
}

#[test]
fn given_unknown_employee_path_when_opening_then_renders_not_found_state() {
    let output = execute(open("/employee/999"), staff_directory(), &mut store()).unwrap();

    let html = html_of(output);
    assert!(html.contains("Employee Not Found"));
    assert!(html.contains(r#"<a href="index.html">Return to Dashboard</a>"#));
}

#[test]
fn given_non_numeric_employee_path_when_opening_then_renders_employee_not_found() {
    let output = execute(open("/employee/abc"), staff_directory(), &mut store()).unwrap();

    let html = html_of(output);
    assert!(html.contains("Employee Not Found"));
    assert!(!html.contains("404"));
}

#[test]
fn given_unmatched_path_when_opening_then_renders_404_page() {
    let output = execute(open("/settings"), failing_directory(), &mut store()).unwrap();

    let html = html_of(output);
    assert!(html.contains("404"));
    assert!(html.contains("/settings"));
}

#[test]
fn given_analytics_path_when_opening_with_failed_fetch_then_still_renders_placeholder() {
    let output = execute(open("/analytics"), failing_directory(), &mut store()).unwrap();

    assert!(html_of(output).contains("Analytics"));
}

#[test]
fn given_known_employee_when_viewing_projects_tab_then_opens_projects_page() {
    let command = Command::View {
        employee_id: 4,
        tab: DetailTab::Projects,
        json: false,
    };

    let site = site_of(execute(command, staff_directory(), &mut store()).unwrap());

    assert_eq!(site.entry, "employee-4-projects.html");
    let html = &site.entry_page().unwrap().html;
    assert!(html.contains("James Davis"));
    assert!(html.contains("Website Redesign"));
    assert!(html.contains(r#"data-tab="projects""#));
}

#[test]
fn given_unknown_employee_when_viewing_as_json_then_returns_error() {
    let command = Command::View {
        employee_id: 999,
        tab: DetailTab::Overview,
        json: true,
    };

    let result = execute(command, staff_directory(), &mut store());

    assert!(result.is_err());
}

#[test]
fn given_known_employee_when_toggling_bookmark_then_persists_and_reports() {
    // Arrange
    let mut bookmarks = store();

    // Act
    let first = execute(Command::Bookmark { employee_id: 3 }, staff_directory(), &mut bookmarks).unwrap();
    let second = execute(Command::Bookmark { employee_id: 3 }, staff_directory(), &mut bookmarks).unwrap();

    // Assert
    assert_eq!(stdout_of(first), "Bookmarked employee 3");
    assert_eq!(stdout_of(second), "Removed bookmark for employee 3");
    assert!(!bookmarks.is_bookmarked(3));
}

#[test]
fn given_unknown_employee_when_bookmarking_then_refuses() {
    let mut bookmarks = store();

    let result = execute(Command::Bookmark { employee_id: 999 }, staff_directory(), &mut bookmarks);

    assert!(result.is_err());
    assert!(bookmarks.bookmarks().is_empty());
}

#[test]
fn given_stale_bookmark_when_toggling_then_removes_without_fetching() {
    let mut bookmarks = store();
    bookmarks.toggle(7).unwrap();

    let output = execute(Command::Bookmark { employee_id: 7 }, failing_directory(), &mut bookmarks).unwrap();

    assert_eq!(stdout_of(output), "Removed bookmark for employee 7");
}

#[test]
fn given_stale_bookmark_when_showing_bookmarks_then_lists_only_current_employees() {
    // Arrange
    let mut bookmarks = store();
    bookmarks.toggle(7).unwrap();
    bookmarks.toggle(1).unwrap();
    let directory = EmployeeDirectory::new(staff_source_without(&[7]));

    // Act
    let output = execute(
        Command::Bookmarks {
            format: OutputFormat::default(),
        },
        directory,
        &mut bookmarks,
    )
    .unwrap();

    // Assert
    let html = html_of(output);
    assert!(html.contains("1 bookmarked employee<"));
    assert!(html.contains("Emily Johnson"));
    assert!(!html.contains("Alexander Jones"));
}

#[test]
fn given_no_bookmarks_when_showing_bookmarks_then_renders_empty_state() {
    let output = execute(
        Command::Bookmarks {
            format: OutputFormat::default(),
        },
        staff_directory(),
        &mut store(),
    )
    .unwrap();

    assert!(html_of(output).contains("No Bookmarked Employees"));
}
