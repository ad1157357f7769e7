//! Multi-key ordering for the course listing.

use std::cmp::Ordering;

use crate::models::CoursePreview;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Code,
    Name,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRule {
    pub key: SortKey,
    pub reverse: bool,
}

impl Default for SortRule {
    fn default() -> Self {
        SortRule {
            key: SortKey::Status,
            reverse: false,
        }
    }
}

impl SortRule {
    /// Header-click transition: the same key toggles direction, a different
    /// key takes over ascending.
    pub fn select(self, key: SortKey) -> SortRule {
        if self.key == key {
            SortRule {
                key,
                reverse: !self.reverse,
            }
        } else {
            SortRule {
                key,
                reverse: false,
            }
        }
    }
}

fn compare(a: &CoursePreview, b: &CoursePreview, rule: SortRule) -> Ordering {
    let ordering = match rule.key {
        SortKey::Code => a.code().cmp(&b.code()),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Status => a.status.sort_rank().cmp(&b.status.sort_rank()),
    };

    if rule.reverse {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Stable sort: equal items keep their input order under either direction.
pub fn sort_courses(courses: &mut [CoursePreview], rule: SortRule) {
    courses.sort_by(|a, b| compare(a, b, rule));
}

pub fn sorted_courses(mut courses: Vec<CoursePreview>, rule: SortRule) -> Vec<CoursePreview> {
    sort_courses(&mut courses, rule);
    courses
}
