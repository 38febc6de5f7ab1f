// src/domain/employee.rs
use crate::domain::DomainError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub address: Address,
    pub image: String,
    pub department: Department,
    pub rating: Rating,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub state: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}

/// Department label, assigned by list position rather than by any real
/// organizational attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Operations,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Finance,
        Department::Operations,
    ];

    /// Round-robin assignment: the `index`-th fetched record gets `ALL[index % 6]`.
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownDepartment(s.to_string()))
    }
}

/// Integer score in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

/// Color band a rating is displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTone {
    Good,
    Fair,
    Poor,
}

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::InvalidRating(value))
        }
    }

    /// Uniform draw from `1..=5`. Not stable across fetches.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random_at_least(rng, Self::MIN)
    }

    /// Uniform draw from `floor..=5`, with `floor` clamped into range.
    pub fn random_at_least<R: Rng + ?Sized>(rng: &mut R, floor: u8) -> Self {
        let floor = floor.clamp(Self::MIN, Self::MAX);
        Self(rng.gen_range(floor..=Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn tone(&self) -> RatingTone {
        match self.0 {
            4.. => RatingTone::Good,
            3 => RatingTone::Fair,
            _ => RatingTone::Poor,
        }
    }

    /// Five glyphs, filled up to the rating.
    pub fn stars(&self) -> String {
        (0..Self::MAX)
            .map(|i| if i < self.0 { '★' } else { '☆' })
            .collect()
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

impl FromStr for Rating {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidRating(0))?;
        Self::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}
