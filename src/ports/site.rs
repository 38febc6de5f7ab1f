// src/ports/site.rs
use crate::application::DashboardView;
use crate::domain::profile::performance_history;
use crate::domain::{BookmarkSet, DetailTab, Employee, Route};
use crate::ports::HtmlPresenter;
use rand::Rng;
use tracing::{debug, instrument};

/// File a route is written to. Pages link to each other by these names.
pub fn page_file(route: &Route) -> String {
    match route {
        Route::Dashboard => "index.html".to_string(),
        Route::EmployeeDetail(id) => format!("employee-{id}.html"),
        Route::UnknownEmployee(_) => "employee-not-found.html".to_string(),
        Route::Bookmarks => "bookmarks.html".to_string(),
        Route::Analytics => "analytics.html".to_string(),
        Route::NotFound(_) => "not-found.html".to_string(),
    }
}

/// File of one detail tab. The overview is the employee's route file.
pub fn tab_file(employee_id: i64, tab: DetailTab) -> String {
    match tab {
        DetailTab::Overview => page_file(&Route::EmployeeDetail(employee_id)),
        other => format!("employee-{employee_id}-{}.html", other.id()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub file_name: String,
    pub html: String,
}

impl Page {
    pub fn new(file_name: impl Into<String>, html: String) -> Self {
        Self {
            file_name: file_name.into(),
            html,
        }
    }
}

/// Linked pages written side by side, plus the one to open first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Site {
    pub entry: String,
    pub pages: Vec<Page>,
}

impl Site {
    pub fn page(&self, file_name: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.file_name == file_name)
    }

    pub fn entry_page(&self) -> Option<&Page> {
        self.page(&self.entry)
    }

    fn insert(&mut self, page: Page) {
        match self.pages.iter_mut().find(|p| p.file_name == page.file_name) {
            Some(existing) => *existing = page,
            None => self.pages.push(page),
        }
    }
}

/// What the pages are rendered from.
#[derive(Debug, Clone, Copy)]
pub enum SiteData<'a> {
    Loaded {
        dashboard: &'a DashboardView,
        bookmarked: &'a [Employee],
    },
    Failed(&'a str),
}

/// Renders every page reachable from the navbar, the cards and the tabs.
pub struct SiteBuilder<'a> {
    presenter: HtmlPresenter,
    bookmarks: &'a BookmarkSet,
}

impl<'a> SiteBuilder<'a> {
    pub fn new(bookmarks: &'a BookmarkSet) -> Self {
        Self {
            presenter: HtmlPresenter::new(),
            bookmarks,
        }
    }

    /// Build the site and point its entry at `entry`.
    ///
    /// Detail pages draw one performance history per employee from `rng`.
    #[instrument(level = "debug", skip(self, data, rng))]
    pub fn build<R: Rng + ?Sized>(
        &self,
        data: SiteData<'_>,
        entry: &Route,
        tab: DetailTab,
        rng: &mut R,
    ) -> Site {
        let mut site = Site::default();
        site.insert(Page::new(
            page_file(&Route::Analytics),
            self.presenter.render_analytics(),
        ));

        match data {
            SiteData::Loaded {
                dashboard,
                bookmarked,
            } => {
                site.insert(Page::new(
                    page_file(&Route::Dashboard),
                    self.presenter.render_dashboard(dashboard, self.bookmarks),
                ));
                site.insert(Page::new(
                    page_file(&Route::Bookmarks),
                    self.presenter.render_bookmarks(bookmarked, self.bookmarks),
                ));
                for employee in &dashboard.roster {
                    let history = performance_history(rng);
                    let bookmarked = self.bookmarks.contains(employee.id);
                    for page_tab in DetailTab::ALL {
                        site.insert(Page::new(
                            tab_file(employee.id, page_tab),
                            self.presenter
                                .render_detail(employee, page_tab, bookmarked, &history),
                        ));
                    }
                }
            }
            SiteData::Failed(message) => {
                for route in [Route::Dashboard, Route::Bookmarks] {
                    site.insert(Page::new(
                        page_file(&route),
                        self.presenter.render_error(message, Some(&route)),
                    ));
                }
            }
        }

        site.entry = match entry {
            Route::EmployeeDetail(id) => {
                let file_name = tab_file(*id, tab);
                if site.page(&file_name).is_none() {
                    let html = match data {
                        SiteData::Failed(message) => self.presenter.render_error(message, Some(entry)),
                        SiteData::Loaded { .. } => self.presenter.render_employee_not_found(id),
                    };
                    site.insert(Page::new(file_name.clone(), html));
                }
                file_name
            }
            Route::UnknownEmployee(segment) => {
                let html = match data {
                    SiteData::Failed(message) => self.presenter.render_error(message, Some(entry)),
                    SiteData::Loaded { .. } => self.presenter.render_employee_not_found(segment),
                };
                site.insert(Page::new(page_file(entry), html));
                page_file(entry)
            }
            Route::NotFound(path) => {
                site.insert(Page::new(
                    page_file(entry),
                    self.presenter.render_not_found(path),
                ));
                page_file(entry)
            }
            Route::Dashboard | Route::Bookmarks | Route::Analytics => page_file(entry),
        };

        debug!(pages = site.pages.len(), entry = %site.entry, "Built site");
        site
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::departments_present;
    use crate::domain::{Department, FilterCriteria};
    use crate::util::testing::employee_fixture;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;
    use rstest::rstest;

    fn dashboard() -> DashboardView {
        let roster = vec![
            employee_fixture(1, "Emily", "Johnson", Department::Engineering, 5),
            employee_fixture(2, "Michael", "Williams", Department::Marketing, 3),
        ];
        DashboardView {
            criteria: FilterCriteria::default(),
            departments: departments_present(&roster),
            employees: roster.clone(),
            total: roster.len(),
            roster,
        }
    }

    fn build(entry: &Route, tab: DetailTab) -> Site {
        let view = dashboard();
        let bookmarks = BookmarkSet::new();
        let data = SiteData::Loaded {
            dashboard: &view,
            bookmarked: &[],
        };
        SiteBuilder::new(&bookmarks).build(data, entry, tab, &mut StdRng::seed_from_u64(1))
    }

    #[rstest]
    #[case(Route::Dashboard, "index.html")]
    #[case(Route::EmployeeDetail(7), "employee-7.html")]
    #[case(Route::Bookmarks, "bookmarks.html")]
    #[case(Route::Analytics, "analytics.html")]
    #[case(Route::UnknownEmployee("abc".to_string()), "employee-not-found.html")]
    #[case(Route::NotFound("/x".to_string()), "not-found.html")]
    fn given_route_when_naming_page_then_uses_flat_file(#[case] route: Route, #[case] expected: &str) {
        assert_eq!(page_file(&route), expected);
    }

    #[test]
    fn given_loaded_site_when_following_every_link_then_target_page_exists() {
        // Arrange
        let site = build(&Route::Dashboard, DetailTab::Overview);
        let href = Regex::new(r#"href="([^"]+)""#).unwrap();

        // Act
        let targets: Vec<String> = site
            .pages
            .iter()
            .flat_map(|page| href.captures_iter(&page.html).map(|c| c[1].to_string()).collect::<Vec<_>>())
            .collect();

        // Assert
        assert!(!targets.is_empty());
        for target in targets {
            assert!(site.page(&target).is_some(), "Dangling link to {target}");
        }
    }

    #[test]
    fn given_loaded_site_when_building_then_writes_each_tab_of_each_employee() {
        let site = build(&Route::Dashboard, DetailTab::Overview);

        for file in ["employee-1.html", "employee-1-projects.html", "employee-2-feedback.html"] {
            assert!(site.page(file).is_some(), "Missing {file}");
        }
        assert_eq!(site.entry, "index.html");
    }

    #[test]
    fn given_unknown_numeric_id_when_building_then_entry_is_employee_not_found() {
        let site = build(&Route::EmployeeDetail(999), DetailTab::Overview);

        let entry = site.entry_page().expect("Entry page should exist");
        assert_eq!(entry.file_name, "employee-999.html");
        assert!(entry.html.contains("Employee Not Found"));
    }

    #[test]
    fn given_non_numeric_employee_segment_when_building_then_entry_is_employee_not_found() {
        let site = build(&Route::UnknownEmployee("abc".to_string()), DetailTab::Overview);

        let entry = site.entry_page().expect("Entry page should exist");
        assert!(entry.html.contains("Employee Not Found"));
        assert!(!entry.html.contains("404"));
    }

    #[test]
    fn given_failed_fetch_when_building_then_data_pages_show_error_and_analytics_stays() {
        let bookmarks = BookmarkSet::new();

        let site = SiteBuilder::new(&bookmarks).build(
            SiteData::Failed("Failed to fetch employees"),
            &Route::EmployeeDetail(3),
            DetailTab::Projects,
            &mut StdRng::seed_from_u64(1),
        );

        assert_eq!(site.entry, "employee-3-projects.html");
        for file in ["index.html", "bookmarks.html", "employee-3-projects.html"] {
            let page = site.page(file).expect("Page should exist");
            assert!(page.html.contains("Failed to fetch employees"), "{file}");
        }
        assert!(site.page("analytics.html").is_some());
    }
}
