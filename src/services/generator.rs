use std::sync::Arc;

use tracing::info;

use crate::backend::BackendClient;
use crate::error::AppError;
use crate::generation::{self, GenerationService};
use crate::models::{Course, CourseContentDraft, CourseDraft, CoursePlanDraft, DepartmentDraft};

/// Drives the generation service and feeds accepted drafts to the backend.
/// A response that fails to parse leaves all existing state untouched.
pub struct CourseGenerator {
    service: Arc<dyn GenerationService>,
    backend: Arc<dyn BackendClient>,
}

impl CourseGenerator {
    pub fn new(service: Arc<dyn GenerationService>, backend: Arc<dyn BackendClient>) -> Self {
        Self { service, backend }
    }

    /// Reworks one course's weeks and targets from a user prompt, persists
    /// the draft, and refetches the authoritative course.
    pub async fn enhance_course(&self, course: &Course, prompt: &str) -> Result<Course, AppError> {
        let content = CourseContentDraft::from(course);
        let full_prompt = generation::course_content_prompt(prompt, &content)?;

        let text = self.service.generate(&full_prompt).await?;
        let draft: CourseContentDraft = generation::parse_generated(&text)?;

        info!(
            "Generated content for {}: {} weeks",
            course.id,
            draft.weeks.len()
        );

        self.backend.update_course(&course.id, &draft).await?;
        self.backend.get_course(&course.id).await
    }

    /// Drafts a course list against the known departments. Nothing is
    /// persisted; the caller reviews the plan and calls `save_plan`.
    pub async fn plan_courses(
        &self,
        prompt: &str,
        courses: &[CourseDraft],
    ) -> Result<CoursePlanDraft, AppError> {
        let departments = self.backend.get_departments().await?;
        self.plan_courses_with(prompt, &departments, courses).await
    }

    /// `plan_courses` with an explicit department list, for iterating on a
    /// plan that already introduced new departments.
    pub async fn plan_courses_with(
        &self,
        prompt: &str,
        departments: &[DepartmentDraft],
        courses: &[CourseDraft],
    ) -> Result<CoursePlanDraft, AppError> {
        let full_prompt = generation::course_plan_prompt(prompt, departments, courses)?;

        let text = self.service.generate(&full_prompt).await?;
        let plan: CoursePlanDraft = generation::parse_generated(&text)?;

        info!(
            "Generated plan: {} departments, {} courses",
            plan.departments.len(),
            plan.courses.len()
        );

        Ok(plan)
    }

    pub async fn save_plan(&self, plan: &CoursePlanDraft) -> Result<(), AppError> {
        self.backend
            .create_courses(&plan.courses, &plan.departments)
            .await
    }
}
