// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::application::employee_directory::FETCH_ERROR_MESSAGE;
use crate::cli::args::{Args, Command, OutputFormat};
use anyhow::{bail, Result};
use application::{
    BookmarkLister, BookmarkStore, EmployeeDirectory, EmployeeLister, EmployeeSource,
    EmployeeViewer, KeyValueStorage,
};
use domain::{DetailTab, DomainError, FilterCriteria, Route};
use infrastructure::{Config, DummyJsonSource, FileStorage, MemoryStorage, PageRenderer};
use ports::{Site, SiteBuilder, SiteData, TextPresenter};
use tracing::{debug, info};

/// Result of one command: linked pages for the browser or text for stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Site(Site),
    Stdout(String),
}

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting hrview with arguments");

    let config = Config::load_or_default(args.config.as_deref())?;

    // Initialize infrastructure
    let storage: Box<dyn KeyValueStorage> = if args.ephemeral {
        debug!("Using in-memory bookmark storage");
        Box::new(MemoryStorage::new())
    } else {
        let path = config.storage.resolve_path()?;
        debug!(?path, "Using file bookmark storage");
        Box::new(FileStorage::new(path))
    };
    let mut bookmarks = BookmarkStore::open(storage);
    let source = DummyJsonSource::new(&config.api)?;
    let directory = EmployeeDirectory::new(source);

    // Execute use case
    match execute(args.command, directory, &mut bookmarks)? {
        Output::Site(site) => {
            let path = PageRenderer::new().show(&site)?;
            info!(?path, "Opened page in browser");
        }
        Output::Stdout(text) => println!("{text}"),
    }
    Ok(())
}

/// Run one command against a directory and bookmark store.
///
/// Fetch failures and unknown employees become error pages when the output
/// is HTML; JSON and text output report them as errors instead.
pub fn execute<S, K>(
    command: Command,
    directory: EmployeeDirectory<S>,
    bookmarks: &mut BookmarkStore<K>,
) -> Result<Output>
where
    S: EmployeeSource,
    K: KeyValueStorage,
{
    match command {
        Command::List {
            search,
            department,
            min_rating,
            format,
        } => {
            let criteria = FilterCriteria::new(search, department, min_rating);
            if format.is_page() {
                show_site(directory, bookmarks, &criteria, &Route::Dashboard, DetailTab::default())
            } else {
                print_dashboard(directory, bookmarks, &criteria, format)
            }
        }
        Command::View {
            employee_id,
            tab,
            json: true,
        } => {
            debug!(%tab, "Tab is ignored for JSON output");
            print_employee(directory, employee_id)
        }
        Command::View {
            employee_id, tab, ..
        } => show_site(
            directory,
            bookmarks,
            &FilterCriteria::default(),
            &Route::EmployeeDetail(employee_id),
            tab,
        ),
        Command::Bookmark { employee_id } => toggle_bookmark(directory, bookmarks, employee_id),
        Command::Bookmarks { format } if format.is_page() => show_site(
            directory,
            bookmarks,
            &FilterCriteria::default(),
            &Route::Bookmarks,
            DetailTab::default(),
        ),
        Command::Bookmarks { format } => print_bookmarks(directory, bookmarks, format),
        Command::Open { path } => {
            let route = Route::parse(&path);
            info!(%route, "Navigating");
            show_site(
                directory,
                bookmarks,
                &FilterCriteria::default(),
                &route,
                DetailTab::default(),
            )
        }
    }
}

/// Render every page once, opening on `entry`.
fn show_site<S: EmployeeSource, K: KeyValueStorage>(
    mut directory: EmployeeDirectory<S>,
    bookmarks: &BookmarkStore<K>,
    criteria: &FilterCriteria,
    entry: &Route,
    tab: DetailTab,
) -> Result<Output> {
    let builder = SiteBuilder::new(bookmarks.bookmarks());
    let mut rng = rand::thread_rng();

    let dashboard = EmployeeLister::new(&mut directory).list_employees(criteria);
    let loaded = match dashboard {
        Ok(view) => BookmarkLister::new(&mut directory)
            .list_bookmarked(bookmarks.bookmarks())
            .map(|bookmarked| (view, bookmarked)),
        Err(e) => Err(e),
    };

    let site = match loaded {
        Ok((view, bookmarked)) => {
            info!(shown = view.employees.len(), total = view.total, "Filtered employees");
            let data = SiteData::Loaded {
                dashboard: &view,
                bookmarked: &bookmarked,
            };
            builder.build(data, entry, tab, &mut rng)
        }
        Err(DomainError::FetchFailed(_)) => {
            let message = directory.error().unwrap_or(FETCH_ERROR_MESSAGE);
            builder.build(SiteData::Failed(message), entry, tab, &mut rng)
        }
        Err(e) => return Err(e.into()),
    };
    Ok(Output::Site(site))
}

fn print_dashboard<S: EmployeeSource, K: KeyValueStorage>(
    mut directory: EmployeeDirectory<S>,
    bookmarks: &BookmarkStore<K>,
    criteria: &FilterCriteria,
    format: OutputFormat,
) -> Result<Output> {
    let view = match EmployeeLister::new(&mut directory).list_employees(criteria) {
        Ok(view) => view,
        Err(DomainError::FetchFailed(_)) => bail!(FETCH_ERROR_MESSAGE),
        Err(e) => return Err(e.into()),
    };
    info!(shown = view.employees.len(), total = view.total, "Filtered employees");

    if format.json {
        Ok(Output::Stdout(serde_json::to_string_pretty(&view.employees)?))
    } else {
        let text = TextPresenter::new();
        Ok(Output::Stdout(format!(
            "{}\n{}",
            text.render_summary(view.employees.len(), view.total),
            text.render_table(&view.employees, bookmarks.bookmarks())
        )))
    }
}

fn print_employee<S: EmployeeSource>(
    mut directory: EmployeeDirectory<S>,
    employee_id: i64,
) -> Result<Output> {
    match EmployeeViewer::new(&mut directory).view_employee(employee_id) {
        Ok(employee) => Ok(Output::Stdout(serde_json::to_string_pretty(&employee)?)),
        Err(DomainError::FetchFailed(_)) => bail!(FETCH_ERROR_MESSAGE),
        Err(e) => Err(e.into()),
    }
}

fn print_bookmarks<S: EmployeeSource, K: KeyValueStorage>(
    mut directory: EmployeeDirectory<S>,
    bookmarks: &BookmarkStore<K>,
    format: OutputFormat,
) -> Result<Output> {
    let employees = match BookmarkLister::new(&mut directory).list_bookmarked(bookmarks.bookmarks()) {
        Ok(employees) => employees,
        Err(DomainError::FetchFailed(_)) => bail!(FETCH_ERROR_MESSAGE),
        Err(e) => return Err(e.into()),
    };

    if format.json {
        Ok(Output::Stdout(serde_json::to_string_pretty(&employees)?))
    } else {
        Ok(Output::Stdout(
            TextPresenter::new().render_table(&employees, bookmarks.bookmarks()),
        ))
    }
}

/// Toggle a bookmark. Only ids present in the current list can be added;
/// removing always succeeds so stale bookmarks can be cleared.
fn toggle_bookmark<S: EmployeeSource, K: KeyValueStorage>(
    mut directory: EmployeeDirectory<S>,
    bookmarks: &mut BookmarkStore<K>,
    employee_id: i64,
) -> Result<Output> {
    if !bookmarks.is_bookmarked(employee_id) && directory.find(employee_id)?.is_none() {
        return Err(DomainError::EmployeeNotFound(employee_id).into());
    }

    let message = if bookmarks.toggle(employee_id)? {
        format!("Bookmarked employee {employee_id}")
    } else {
        format!("Removed bookmark for employee {employee_id}")
    };
    Ok(Output::Stdout(message))
}
