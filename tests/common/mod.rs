// Shared fixtures; not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use mnemona::backend::BackendClient;
use mnemona::error::AppError;
use mnemona::generation::GenerationService;
use mnemona::models::{
    Course, CourseContentDraft, CourseDraft, CoursePreview, CourseStatus, Department,
    DepartmentDraft, ScheduleEntry, Target, Week,
};
use uuid::Uuid;

/// In-memory stand-in for the persistence backend. Records every mutation
/// and can be told to reject completion flips.
#[derive(Default)]
pub struct MockBackend {
    pub course: Mutex<Option<Course>>,
    pub schedule: Mutex<Vec<ScheduleEntry>>,
    pub departments: Mutex<Vec<DepartmentDraft>>,
    pub fail_toggles: AtomicBool,
    pub week_calls: Mutex<Vec<(String, bool)>>,
    pub target_calls: Mutex<Vec<(String, bool)>>,
    pub status_calls: Mutex<Vec<(String, CourseStatus)>>,
    pub updated_drafts: Mutex<Vec<(String, CourseContentDraft)>>,
    pub created_plans: Mutex<Vec<(Vec<CourseDraft>, Vec<DepartmentDraft>)>>,
}

impl MockBackend {
    pub fn with_course(course: Course) -> Self {
        let backend = MockBackend::default();
        *backend.course.lock().unwrap() = Some(course);
        backend
    }

    pub fn with_schedule(entries: Vec<ScheduleEntry>) -> Self {
        let backend = MockBackend::default();
        *backend.schedule.lock().unwrap() = entries;
        backend
    }
}

#[async_trait]
impl BackendClient for MockBackend {
    async fn get_course(&self, course_id: &str) -> Result<Course, AppError> {
        self.course
            .lock()
            .unwrap()
            .clone()
            .filter(|c| c.id == course_id)
            .ok_or_else(|| AppError::Backend(format!("Unknown course: {}", course_id)))
    }

    async fn get_courses(&self) -> Result<Vec<CoursePreview>, AppError> {
        Ok(Vec::new())
    }

    async fn get_departments(&self) -> Result<Vec<DepartmentDraft>, AppError> {
        Ok(self.departments.lock().unwrap().clone())
    }

    async fn get_schedule(&self, _week_start: NaiveDate) -> Result<Vec<ScheduleEntry>, AppError> {
        Ok(self.schedule.lock().unwrap().clone())
    }

    async fn update_course_status(
        &self,
        course_id: &str,
        status: CourseStatus,
    ) -> Result<(), AppError> {
        self.status_calls
            .lock()
            .unwrap()
            .push((course_id.to_string(), status));

        // The backend is authoritative; the refetch must observe the change.
        if let Some(course) = self.course.lock().unwrap().as_mut() {
            if course.id == course_id {
                course.status = status;
            }
        }
        Ok(())
    }

    async fn change_week_status(&self, week_id: &str, completed: bool) -> Result<(), AppError> {
        if self.fail_toggles.load(Ordering::SeqCst) {
            return Err(AppError::Backend("connection reset".to_string()));
        }
        self.week_calls
            .lock()
            .unwrap()
            .push((week_id.to_string(), completed));
        Ok(())
    }

    async fn change_target_status(&self, target_id: &str, completed: bool) -> Result<(), AppError> {
        if self.fail_toggles.load(Ordering::SeqCst) {
            return Err(AppError::Backend("connection reset".to_string()));
        }
        self.target_calls
            .lock()
            .unwrap()
            .push((target_id.to_string(), completed));
        Ok(())
    }

    async fn update_course(
        &self,
        course_id: &str,
        draft: &CourseContentDraft,
    ) -> Result<(), AppError> {
        self.updated_drafts
            .lock()
            .unwrap()
            .push((course_id.to_string(), draft.clone()));
        Ok(())
    }

    async fn create_courses(
        &self,
        courses: &[CourseDraft],
        departments: &[DepartmentDraft],
    ) -> Result<(), AppError> {
        self.created_plans
            .lock()
            .unwrap()
            .push((courses.to_vec(), departments.to_vec()));
        Ok(())
    }
}

/// Generation service returning a canned response.
pub struct CannedGeneration {
    pub response: String,
}

#[async_trait]
impl GenerationService for CannedGeneration {
    async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Ok(self.response.clone())
    }
}

pub fn make_target(serial: i64, is_complete: bool) -> Target {
    Target {
        id: Uuid::new_v4().to_string(),
        serial,
        text: format!("Target {}", serial),
        source: "Ch. 1, pp. 1-10".to_string(),
        is_complete,
    }
}

pub fn make_week(serial: i64, date: Option<NaiveDate>, is_complete: bool) -> Week {
    Week {
        id: Uuid::new_v4().to_string(),
        serial,
        text: format!("Week {}", serial),
        date,
        is_complete,
        targets: vec![make_target(1, is_complete)],
    }
}

pub fn make_course(status: CourseStatus, weeks: Vec<Week>) -> Course {
    Course {
        id: Uuid::new_v4().to_string(),
        department: Department {
            id: Uuid::new_v4().to_string(),
            code: "CS".to_string(),
            name: "Computer Science".to_string(),
        },
        serial: 101,
        name: "Operating Systems".to_string(),
        description: Some("Processes, memory, file systems.".to_string()),
        book: Some("Operating System Concepts, 10th ed.".to_string()),
        prompt: Some("Cover scheduling in depth.".to_string()),
        status,
        weeks,
    }
}

pub fn make_entry(dept: &str, serial: i64, weeks: Vec<Week>) -> ScheduleEntry {
    ScheduleEntry {
        course: CoursePreview {
            id: Uuid::new_v4().to_string(),
            department: dept.to_string(),
            serial,
            name: format!("{}-{}", dept, serial),
            status: CourseStatus::Active,
        },
        weeks,
    }
}
