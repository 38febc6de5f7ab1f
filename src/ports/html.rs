// src/ports/html.rs
use crate::application::DashboardView;
use crate::domain::profile::{sample_feedback, sample_projects, ProjectStatus, QuarterRating};
use crate::domain::{BookmarkSet, DetailTab, Employee, Rating, RatingTone, Route};
use crate::ports::site::{page_file, tab_file};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::{self, Write};
use tracing::instrument;

const STYLE: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.5;
            margin: 0;
            background-color: #f9fafb;
            color: #111827;
        }
        a { color: #2563eb; text-decoration: none; }
        .navbar {
            display: flex;
            justify-content: space-between;
            align-items: center;
            background: white;
            border-bottom: 1px solid #e5e7eb;
            padding: 0 2rem;
            height: 4rem;
        }
        .brand { font-size: 1.25rem; font-weight: 700; }
        .nav-link { margin-left: 1.5rem; padding: 0.5rem 0.75rem; border-radius: 6px; color: #4b5563; }
        .nav-link.active { color: #2563eb; background: #eff6ff; }
        .container { max-width: 1100px; margin: 2rem auto; padding: 0 1rem; }
        .subtitle { color: #4b5563; }
        .filters { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
        .filters input, .filters select { padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 6px; }
        .summary { font-size: 0.875rem; color: #4b5563; margin-bottom: 1rem; }
        .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1.5rem; }
        .card {
            background: white;
            border-radius: 12px;
            border: 1px solid #e5e7eb;
            padding: 1.5rem;
            box-shadow: 0 1px 2px rgba(0,0,0,0.05);
        }
        .card-header { display: flex; justify-content: space-between; align-items: flex-start; }
        .avatar { width: 48px; height: 48px; border-radius: 50%; object-fit: cover; margin-right: 0.75rem; }
        .avatar.large { width: 96px; height: 96px; margin-right: 1.5rem; }
        .identity { display: flex; align-items: center; }
        .muted { font-size: 0.875rem; color: #4b5563; }
        .row { display: flex; justify-content: space-between; align-items: center; margin-top: 0.75rem; }
        .badge { padding: 0.25rem 0.5rem; border-radius: 999px; font-size: 0.75rem; font-weight: 500; }
        .tone-good { color: #16a34a; background: #dcfce7; }
        .tone-fair { color: #ca8a04; background: #fef9c3; }
        .tone-poor { color: #dc2626; background: #fee2e2; }
        .stars { color: #facc15; letter-spacing: 1px; }
        .bookmark { font-size: 1.1rem; color: #9ca3af; }
        .bookmark.on { color: #2563eb; }
        .actions { margin-top: 1rem; padding-top: 1rem; border-top: 1px solid #f3f4f6; }
        .button { display: block; text-align: center; background: #2563eb; color: white; padding: 0.5rem 1rem; border-radius: 8px; }
        .empty { text-align: center; padding: 3rem 0; color: #6b7280; }
        .tabs { border-bottom: 1px solid #e5e7eb; margin: 2rem 0 1.5rem; }
        .tab { display: inline-block; padding: 0.5rem 0.25rem; margin-right: 2rem; color: #6b7280; border-bottom: 2px solid transparent; }
        .tab.active { color: #2563eb; border-bottom-color: #3b82f6; }
        .columns { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
        .panel { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
        .progress { background: #e5e7eb; border-radius: 999px; height: 8px; }
        .progress-bar { background: #2563eb; border-radius: 999px; height: 8px; }
        .status-completed { color: #166534; background: #dcfce7; }
        .status-in-progress { color: #1e40af; background: #dbeafe; }
        .status-planning { color: #854d0e; background: #fef9c3; }
        .active-badge { color: #166534; background: #dcfce7; }
        .error { color: #dc2626; font-size: 1.125rem; text-align: center; padding: 3rem 0; }
"#;

/// Re-applies the dashboard filters in the page as the form changes.
const FILTER_SCRIPT: &str = r#"    <script>
        (function () {
            const form = document.getElementById('filters');
            const summary = document.getElementById('summary');
            const empty = document.getElementById('no-matches');
            const cards = document.querySelectorAll('.card[data-employee-id]');

            function applyFilters() {
                const search = form.elements.search.value.toLowerCase();
                const department = form.elements.department.value;
                const minRating = Number(form.elements.rating.value || 0);
                let shown = 0;
                cards.forEach(function (card) {
                    const d = card.dataset;
                    const match = [d.first, d.last, d.email, d.department]
                            .some(function (field) { return field.toLowerCase().includes(search); })
                        && (department === '' || d.department === department)
                        && Number(d.rating) >= minRating;
                    card.hidden = !match;
                    if (match) { shown += 1; }
                });
                summary.textContent = 'Showing ' + shown + ' of ' + summary.dataset.total + ' employees';
                empty.hidden = shown > 0;
            }

            form.addEventListener('input', applyFilters);
            form.addEventListener('change', applyFilters);
            form.addEventListener('submit', function (event) { event.preventDefault(); });
        })();
    </script>
"#;

/// Renders each view as a standalone HTML document.
#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn page(&self, title: &str, active: Option<&Route>, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
{navbar}
    <main class="container">
{body}
    </main>
</body>
</html>"#,
            title = text(title),
            style = STYLE,
            navbar = self.navbar(active),
            body = body,
        )
    }

    fn navbar(&self, active: Option<&Route>) -> String {
        let links: String = Route::NAV
            .iter()
            .map(|(route, label)| {
                let class = if active == Some(route) {
                    "nav-link active"
                } else {
                    "nav-link"
                };
                format!(r#"<a class="{class}" href="{}">{label}</a>"#, page_file(route))
            })
            .collect();

        format!(
            r#"    <nav class="navbar">
        <span class="brand">HR Dashboard</span>
        <div>{links}</div>
    </nav>"#
        )
    }

    fn tone_class(rating: Rating) -> &'static str {
        match rating.tone() {
            RatingTone::Good => "tone-good",
            RatingTone::Fair => "tone-fair",
            RatingTone::Poor => "tone-poor",
        }
    }

    fn stars(rating: Rating) -> String {
        format!(
            r#"<span class="stars">{}</span> <span class="muted">({}/{})</span>"#,
            rating.stars(),
            rating.value(),
            Rating::MAX
        )
    }

    #[instrument(level = "trace", skip(self, employee), fields(id = employee.id))]
    fn card(&self, employee: &Employee, bookmarked: bool, visible: bool) -> String {
        let name = employee.full_name();
        let (marker_class, marker) = if bookmarked {
            ("bookmark on", "&#9733; Bookmarked")
        } else {
            ("bookmark", "&#9734; Bookmark")
        };

        format!(
            r#"        <div class="card"{hidden} data-employee-id="{id}" data-first="{first}" data-last="{last}" data-email="{email_attr}" data-department="{department}" data-rating="{rating}">
            <div class="card-header">
                <div class="identity">
                    <img class="avatar" src="{image}" alt="{alt}">
                    <div>
                        <h3>{name}</h3>
                        <div class="muted">{email}</div>
                    </div>
                </div>
                <span class="{marker_class}">{marker}</span>
            </div>
            <div class="row">
                <span class="muted">{location}</span>
                <span class="muted">Age: {age}</span>
            </div>
            <div class="row">
                <span class="badge {tone}">{department}</span>
                <span>{stars}</span>
            </div>
            <div class="actions">
                <a class="button" href="{href}">View Details</a>
            </div>
        </div>
"#,
            id = employee.id,
            hidden = if visible { "" } else { " hidden" },
            first = attr(&employee.first_name),
            last = attr(&employee.last_name),
            email_attr = attr(&employee.email),
            rating = employee.rating.value(),
            image = attr(&employee.image),
            alt = attr(&name),
            name = text(&name),
            email = text(&employee.email),
            location = text(&employee.address.to_string()),
            age = employee.age,
            tone = Self::tone_class(employee.rating),
            department = employee.department,
            stars = Self::stars(employee.rating),
            href = page_file(&Route::EmployeeDetail(employee.id)),
        )
    }

    fn cards(
        &self,
        employees: &[Employee],
        bookmarks: &BookmarkSet,
        visible: impl Fn(&Employee) -> bool,
    ) -> String {
        let cards: String = employees
            .iter()
            .map(|e| self.card(e, bookmarks.contains(e.id), visible(e)))
            .collect();
        format!("    <div class=\"grid\">\n{cards}    </div>\n")
    }

    fn filters(&self, view: &DashboardView) -> String {
        let mut departments = String::from(r#"<option value="">All Departments</option>"#);
        for department in &view.departments {
            let selected = if view.criteria.department == Some(*department) {
                " selected"
            } else {
                ""
            };
            let _ = write!(departments, r#"<option value="{department}"{selected}>{department}</option>"#);
        }

        let mut ratings = String::from(r#"<option value="">All Ratings</option>"#);
        for value in (Rating::MIN..=Rating::MAX).rev() {
            let selected = if view.criteria.min_rating.map(|r| r.value()) == Some(value) {
                " selected"
            } else {
                ""
            };
            let _ = write!(ratings, r#"<option value="{value}"{selected}>{value}+ Stars</option>"#);
        }

        format!(
            r#"    <form class="filters" id="filters">
        <input type="search" name="search" placeholder="Search by name, email, or department..." value="{search}">
        <select name="department">{departments}</select>
        <select name="rating">{ratings}</select>
    </form>
"#,
            search = attr(&view.criteria.search),
        )
    }

    /// The whole roster is rendered; cards failing the criteria start hidden
    /// so the in-page filters can bring them back.
    pub fn render_dashboard(&self, view: &DashboardView, bookmarks: &BookmarkSet) -> String {
        let empty_hidden = if view.is_empty() { "" } else { " hidden" };
        let body = format!(
            r#"    <h1>Employee Dashboard</h1>
    <p class="subtitle">Manage and track employee performance</p>
{filters}    <p class="summary" id="summary" data-total="{total}">Showing {shown} of {total} employees</p>
    <div class="empty" id="no-matches"{empty_hidden}>No employees found matching your criteria</div>
{cards}{script}"#,
            filters = self.filters(view),
            shown = view.employees.len(),
            total = view.total,
            cards = self.cards(&view.roster, bookmarks, |e| view.criteria.matches(e)),
            script = FILTER_SCRIPT,
        );
        self.page("Employee Dashboard", Some(&Route::Dashboard), &body)
    }

    pub fn render_bookmarks(&self, employees: &[Employee], bookmarks: &BookmarkSet) -> String {
        let listing = if employees.is_empty() {
            r#"    <div class="empty">
        <h3>No Bookmarked Employees</h3>
        <p>Start bookmarking employees from the dashboard to see them here.</p>
    </div>
"#
            .to_string()
        } else {
            let count = employees.len();
            let plural = if count == 1 { "" } else { "s" };
            format!(
                "    <p class=\"summary\">{count} bookmarked employee{plural}</p>\n{}",
                self.cards(employees, bookmarks, |_| true)
            )
        };

        let body = format!(
            r#"    <h1>Bookmarked Employees</h1>
    <p class="subtitle">Your saved employee profiles for quick access</p>
{listing}"#
        );
        self.page("Bookmarked Employees", Some(&Route::Bookmarks), &body)
    }

    pub fn render_detail(
        &self,
        employee: &Employee,
        tab: DetailTab,
        bookmarked: bool,
        history: &[QuarterRating],
    ) -> String {
        let name = employee.full_name();
        let tabs: String = DetailTab::ALL
            .iter()
            .map(|t| {
                let class = if *t == tab { "tab active" } else { "tab" };
                format!(
                    r#"<a class="{class}" href="{href}">{label}</a>"#,
                    href = tab_file(employee.id, *t),
                    label = t.label()
                )
            })
            .collect();

        let content = match tab {
            DetailTab::Overview => self.overview(employee, history),
            DetailTab::Projects => self.projects(),
            DetailTab::Feedback => self.feedback(),
        };

        let bookmark = if bookmarked {
            r#" <span class="bookmark on">&#9733; Bookmarked</span>"#
        } else {
            ""
        };

        let body = format!(
            r#"    <a href="{home}">&larr; Back to Dashboard</a>
    <div class="card">
        <div class="identity">
            <img class="avatar large" src="{image}" alt="{alt}">
            <div>
                <h1>{name}</h1>
                <p class="subtitle">{department}</p>
                <div>{stars} <span class="badge active-badge">Active</span>{bookmark}</div>
            </div>
        </div>
        <nav class="tabs">{tabs}</nav>
        <section data-tab="{tab_id}">
{content}        </section>
    </div>
"#,
            image = attr(&employee.image),
            alt = attr(&name),
            name = text(&name),
            department = employee.department,
            stars = Self::stars(employee.rating),
            tab_id = tab.id(),
            home = page_file(&Route::Dashboard),
        );
        self.page(&name, Some(&Route::EmployeeDetail(employee.id)), &body)
    }

    fn overview(&self, employee: &Employee, history: &[QuarterRating]) -> String {
        let quarters: String = history
            .iter()
            .map(|q| {
                format!(
                    r#"                    <div class="row"><span class="muted">{}</span><span class="stars">{}</span></div>
"#,
                    q.quarter,
                    q.rating.stars()
                )
            })
            .collect();

        format!(
            r#"            <div class="columns">
                <div>
                    <h3>Contact Information</h3>
                    <p>{email}</p>
                    <p>{location}</p>
                    <p>Age: {age}</p>
                </div>
                <div>
                    <h3>Performance History</h3>
{quarters}                </div>
            </div>
"#,
            email = text(&employee.email),
            location = text(&employee.address.to_string()),
            age = employee.age,
        )
    }

    fn projects(&self) -> String {
        let mut out = String::from("            <h3>Current Projects</h3>\n");
        for project in sample_projects() {
            let status_class = match project.status {
                ProjectStatus::Completed => "status-completed",
                ProjectStatus::InProgress => "status-in-progress",
                ProjectStatus::Planning => "status-planning",
            };
            let _ = write!(
                out,
                r#"            <div class="panel">
                <div class="row"><strong>{name}</strong><span class="badge {status_class}">{status}</span></div>
                <div class="progress"><div class="progress-bar" style="width: {completion}%"></div></div>
                <p class="muted">{completion}% complete</p>
            </div>
"#,
                name = project.name,
                status = project.status.label(),
                completion = project.completion,
            );
        }
        out
    }

    fn feedback(&self) -> String {
        let mut out = String::from("            <h3>Recent Feedback</h3>\n");
        for item in sample_feedback() {
            let _ = write!(
                out,
                r#"            <div class="panel">
                <div class="row"><strong>Performance Review</strong><span class="muted">{date}</span></div>
                <p>{text}</p>
            </div>
"#,
                date = item.date,
                text = item.text,
            );
        }
        out
    }

    pub fn render_analytics(&self) -> String {
        let body = r#"    <h1>Analytics</h1>
    <p class="subtitle">Analytics dashboard coming soon.</p>
"#;
        self.page("Analytics", Some(&Route::Analytics), body)
    }

    pub fn render_not_found(&self, path: &str) -> String {
        let body = format!(
            r#"    <div class="empty">
        <h1>404</h1>
        <p>Oops! Page not found: <code>{}</code></p>
        <a href="{home}">Return to Home</a>
    </div>
"#,
            text(path),
            home = page_file(&Route::Dashboard),
        );
        self.page("Page Not Found", None, &body)
    }

    pub fn render_employee_not_found(&self, employee_id: impl fmt::Display) -> String {
        let body = format!(
            r#"    <div class="empty" data-employee-id="{id}">
        <h2>Employee Not Found</h2>
        <a href="{home}">Return to Dashboard</a>
    </div>
"#,
            id = attr(&employee_id.to_string()),
            home = page_file(&Route::Dashboard),
        );
        self.page("Employee Not Found", None, &body)
    }

    pub fn render_error(&self, message: &str, active: Option<&Route>) -> String {
        let body = format!("    <p class=\"error\">{}</p>\n", text(message));
        self.page("Error", active, &body)
    }
}
