pub mod course;
pub mod draft;

pub use course::{Course, CoursePreview, CourseStatus, Department, ScheduleEntry, Target, Week};
pub use draft::{
    CourseContentDraft, CourseDraft, CoursePlanDraft, DepartmentDraft, TargetDraft, WeekDraft,
};
