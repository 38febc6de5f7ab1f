// src/ports/text.rs
use crate::domain::{BookmarkSet, Employee};

/// Plain-text table for terminals and pipes.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_table(&self, employees: &[Employee], bookmarks: &BookmarkSet) -> String {
        let mut out = format!(
            "{:>4}  {:<1}  {:<24}  {:<12}  {:<5}  {}\n",
            "ID", "*", "NAME", "DEPARTMENT", "RATE", "EMAIL"
        );
        for e in employees {
            let marker = if bookmarks.contains(e.id) { "*" } else { " " };
            out.push_str(&format!(
                "{:>4}  {:<1}  {:<24}  {:<12}  {:<5}  {}\n",
                e.id,
                marker,
                truncate(&e.full_name(), 24),
                e.department.label(),
                e.rating.stars(),
                e.email
            ));
        }
        out
    }

    /// "Showing N of M employees", or the no-match message.
    pub fn render_summary(&self, shown: usize, total: usize) -> String {
        if shown == 0 {
            "No employees found matching your criteria".to_string()
        } else {
            format!("Showing {shown} of {total} employees")
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
