// src/domain/profile.rs
//
// Detail-page sections. Projects and feedback are fixed sample data; the
// performance history is re-drawn on every render.
use crate::domain::{DomainError, Rating};
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailTab {
    #[default]
    Overview,
    Projects,
    Feedback,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Overview, DetailTab::Projects, DetailTab::Feedback];

    pub fn id(&self) -> &'static str {
        match self {
            DetailTab::Overview => "overview",
            DetailTab::Projects => "projects",
            DetailTab::Feedback => "feedback",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Projects => "Projects",
            DetailTab::Feedback => "Feedback",
        }
    }
}

impl FromStr for DetailTab {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownTab(s.to_string()))
    }
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub status: ProjectStatus,
    /// Percent, 0..=100.
    pub completion: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub date: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterRating {
    pub quarter: String,
    pub rating: Rating,
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            name: "Q4 Marketing Campaign",
            status: ProjectStatus::InProgress,
            completion: 75,
        },
        Project {
            name: "Website Redesign",
            status: ProjectStatus::Completed,
            completion: 100,
        },
        Project {
            name: "Employee Training Program",
            status: ProjectStatus::Planning,
            completion: 25,
        },
    ]
}

pub fn sample_feedback() -> Vec<Feedback> {
    vec![
        Feedback {
            date: "2024-01-15",
            text: "Excellent work on the recent project delivery. Shows strong leadership skills.",
        },
        Feedback {
            date: "2024-01-01",
            text: "Great collaboration with the team. Always willing to help others.",
        },
        Feedback {
            date: "2023-12-15",
            text: "Consistently meets deadlines and produces high-quality work.",
        },
    ]
}

/// Four quarters, newest first, each rated 4 or 5.
pub fn performance_history<R: Rng + ?Sized>(rng: &mut R) -> Vec<QuarterRating> {
    (0..4u8)
        .map(|i| QuarterRating {
            quarter: format!("Q{} 2023", 4 - i),
            rating: Rating::random_at_least(rng, 4),
        })
        .collect()
}
