use serde::{Deserialize, Serialize};

use crate::models::Course;

/// Draft shapes exchanged with the generation service. Field names are part
/// of the contract; callers must serialize them exactly as declared here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentDraft {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDraft {
    pub department: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub book: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetDraft {
    pub serial: i64,
    pub text: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekDraft {
    pub serial: i64,
    pub text: String,
    pub targets: Vec<TargetDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseContentDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub book: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub weeks: Vec<WeekDraft>,
}

/// Response shape of the course-list planning call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursePlanDraft {
    pub departments: Vec<DepartmentDraft>,
    pub courses: Vec<CourseDraft>,
}

impl From<&Course> for CourseContentDraft {
    /// Projects a course back into its draft form: serials and texts only,
    /// no ids and no completion flags.
    fn from(course: &Course) -> Self {
        CourseContentDraft {
            name: course.name.clone(),
            description: course.description.clone(),
            book: course.book.clone(),
            prompt: None,
            weeks: course
                .weeks
                .iter()
                .map(|week| WeekDraft {
                    serial: week.serial,
                    text: week.text.clone(),
                    targets: week
                        .targets
                        .iter()
                        .map(|target| TargetDraft {
                            serial: target.serial,
                            text: target.text.clone(),
                            source: target.source.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
