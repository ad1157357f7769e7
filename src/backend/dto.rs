use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{CourseContentDraft, CourseDraft, CourseStatus, DepartmentDraft};

/// Argument envelopes for the backend's command interface. Names follow the
/// command contract (camelCase), not this crate's conventions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseArgs {
    pub course_id: String,
}

#[derive(Debug, Serialize)]
pub struct ScheduleArgs {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStatusArgs {
    pub course_id: String,
    pub status: CourseStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekStatusArgs {
    pub week_id: String,
    pub status: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetStatusArgs {
    pub target_id: String,
    pub status: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseArgs {
    pub course_id: String,
    pub draft: CourseContentDraft,
}

#[derive(Debug, Serialize)]
pub struct CreateCoursesArgs {
    pub courses: Vec<CourseDraft>,
    pub departments: Vec<DepartmentDraft>,
}
