// src/cli/args.rs
use crate::domain::{Department, DetailTab, Rating};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Keep bookmarks in memory only for this run
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// How a view is emitted.
#[derive(ClapArgs, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[group(multiple = false)]
pub struct OutputFormat {
    /// Print JSON instead of opening in browser
    #[arg(long)]
    pub json: bool,

    /// Print a plain-text table instead of opening in browser
    #[arg(long)]
    pub text: bool,
}

impl OutputFormat {
    /// Neither `--json` nor `--text`: render pages for the browser.
    pub fn is_page(&self) -> bool {
        !self.json && !self.text
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the employee dashboard with optional filters
    List {
        /// Case-insensitive search over name, email and department
        #[arg(short, long, value_name = "SEARCH", default_value = "")]
        search: String,

        /// Only show this department
        #[arg(short, long, value_name = "DEPARTMENT", value_parser = parse_department)]
        department: Option<Department>,

        /// Only show ratings at or above this value (1-5)
        #[arg(short = 'r', long = "min-rating", value_name = "RATING", value_parser = parse_rating)]
        min_rating: Option<Rating>,

        #[command(flatten)]
        format: OutputFormat,
    },

    /// View one employee in the browser
    View {
        /// Employee ID to view
        #[arg(value_name = "EMPLOYEE_ID")]
        employee_id: i64,

        /// Detail tab: overview, projects or feedback
        #[arg(short, long, value_name = "TAB", default_value = "overview", value_parser = parse_tab)]
        tab: DetailTab,

        /// Output employee as JSON instead of opening in browser
        #[arg(long)]
        json: bool,
    },

    /// Toggle the bookmark for an employee
    Bookmark {
        /// Employee ID to bookmark or unbookmark
        #[arg(value_name = "EMPLOYEE_ID")]
        employee_id: i64,
    },

    /// Show bookmarked employees
    Bookmarks {
        #[command(flatten)]
        format: OutputFormat,
    },

    /// Open a view by path, e.g. `/`, `/employee/7`, `/bookmarks`
    Open {
        #[arg(value_name = "PATH")]
        path: String,
    },
}

fn parse_department(s: &str) -> Result<Department, String> {
    s.parse().map_err(|e: crate::domain::DomainError| e.to_string())
}

fn parse_rating(s: &str) -> Result<Rating, String> {
    s.parse().map_err(|e: crate::domain::DomainError| e.to_string())
}

fn parse_tab(s: &str) -> Result<DetailTab, String> {
    s.parse().map_err(|e: crate::domain::DomainError| e.to_string())
}
