use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub code: String,
    pub name: String,
}

/// Course lifecycle status. Transitions are unrestricted: the backend accepts
/// any status from any status, and display state is re-derived from whatever
/// the current value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Draft,
    Inactive,
    Active,
    Complete,
}

impl CourseStatus {
    /// Fixed precedence used by the status sort key; lower sorts first.
    pub fn sort_rank(self) -> u8 {
        match self {
            CourseStatus::Active => 0,
            CourseStatus::Inactive => 1,
            CourseStatus::Draft => 2,
            CourseStatus::Complete => 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: String,
    pub serial: i64,
    pub text: String,
    pub source: String,
    pub is_complete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub id: String,
    pub serial: i64,
    pub text: String,
    pub date: Option<NaiveDate>,
    pub is_complete: bool,
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub department: Department,
    pub serial: i64,
    pub name: String,
    pub description: Option<String>,
    pub book: Option<String>,
    pub prompt: Option<String>,
    pub status: CourseStatus,
    pub weeks: Vec<Week>,
}

/// Listing projection of a course; `department` holds the department code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursePreview {
    pub id: String,
    pub department: String,
    pub serial: i64,
    pub name: String,
    pub status: CourseStatus,
}

impl CoursePreview {
    /// Display code, e.g. "CS-101".
    pub fn code(&self) -> String {
        format!("{}-{}", self.department, self.serial)
    }
}

/// A course joined with the weeks that fall inside a queried schedule window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub course: CoursePreview,
    pub weeks: Vec<Week>,
}
