//! Course progress aggregation for the listing view.

use serde::Serialize;

use crate::models::{Course, CourseStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

/// Counts weeks by their stored completion flag. A course marked complete
/// reports full progress regardless of individual flags; the underlying data
/// is not rewritten.
pub fn progress(course: &Course) -> Progress {
    let total = course.weeks.len();
    let completed = course.weeks.iter().filter(|w| w.is_complete).count();
    from_counts(completed, total, course.status)
}

pub fn from_counts(completed: usize, total: usize, status: CourseStatus) -> Progress {
    if status == CourseStatus::Complete {
        return Progress {
            completed: total,
            total,
            percent: 100,
        };
    }

    let percent = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    };

    Progress {
        completed,
        total,
        percent,
    }
}
