pub mod dto;

use std::env;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;
use crate::models::{
    Course, CourseContentDraft, CourseDraft, CoursePreview, CourseStatus, DepartmentDraft,
    ScheduleEntry,
};

#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let base_url = env::var("MNEMONA_BACKEND_URL")
            .map_err(|_| AppError::Config("MNEMONA_BACKEND_URL is not set".to_string()))?;

        Ok(Self { base_url })
    }
}

/// The persistence backend's command interface. All course, week and target
/// state lives behind it; this crate only derives display state from the
/// snapshots it returns.
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn get_course(&self, course_id: &str) -> Result<Course, AppError>;
    async fn get_courses(&self) -> Result<Vec<CoursePreview>, AppError>;
    async fn get_departments(&self) -> Result<Vec<DepartmentDraft>, AppError>;
    async fn get_schedule(&self, week_start: NaiveDate) -> Result<Vec<ScheduleEntry>, AppError>;
    async fn update_course_status(
        &self,
        course_id: &str,
        status: CourseStatus,
    ) -> Result<(), AppError>;
    async fn change_week_status(&self, week_id: &str, completed: bool) -> Result<(), AppError>;
    async fn change_target_status(&self, target_id: &str, completed: bool) -> Result<(), AppError>;
    async fn update_course(
        &self,
        course_id: &str,
        draft: &CourseContentDraft,
    ) -> Result<(), AppError>;
    async fn create_courses(
        &self,
        courses: &[CourseDraft],
        departments: &[DepartmentDraft],
    ) -> Result<(), AppError>;
}

pub struct HttpBackendClient {
    client: Client,
    config: BackendConfig,
}

impl HttpBackendClient {
    pub fn new(config: BackendConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Backend(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    async fn invoke<A, R>(&self, command: &str, args: &A) -> Result<R, AppError>
    where
        A: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}/commands/{}", self.config.base_url, command);

        let response = self
            .client
            .post(&url)
            .json(args)
            .send()
            .await
            .map_err(|e| AppError::Backend(format!("{} request failed: {}", command, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Backend(format!(
                "{} rejected ({}): {}",
                command, status, body
            )));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| AppError::Backend(format!("Failed to parse {} response: {}", command, e)))
    }

    /// Mutations answer success or failure only; any response body is ignored.
    async fn invoke_unit<A>(&self, command: &str, args: &A) -> Result<(), AppError>
    where
        A: Serialize + Sync,
    {
        let url = format!("{}/commands/{}", self.config.base_url, command);

        let response = self
            .client
            .post(&url)
            .json(args)
            .send()
            .await
            .map_err(|e| AppError::Backend(format!("{} request failed: {}", command, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Backend(format!(
                "{} rejected ({}): {}",
                command, status, body
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn get_course(&self, course_id: &str) -> Result<Course, AppError> {
        self.invoke(
            "get_course",
            &dto::CourseArgs {
                course_id: course_id.to_string(),
            },
        )
        .await
    }

    async fn get_courses(&self) -> Result<Vec<CoursePreview>, AppError> {
        self.invoke("get_courses", &serde_json::json!({})).await
    }

    async fn get_departments(&self) -> Result<Vec<DepartmentDraft>, AppError> {
        self.invoke("get_departments", &serde_json::json!({})).await
    }

    async fn get_schedule(&self, week_start: NaiveDate) -> Result<Vec<ScheduleEntry>, AppError> {
        self.invoke("get_schedule", &dto::ScheduleArgs { date: week_start })
            .await
    }

    async fn update_course_status(
        &self,
        course_id: &str,
        status: CourseStatus,
    ) -> Result<(), AppError> {
        self.invoke_unit(
            "update_course_status",
            &dto::CourseStatusArgs {
                course_id: course_id.to_string(),
                status,
            },
        )
        .await
    }

    async fn change_week_status(&self, week_id: &str, completed: bool) -> Result<(), AppError> {
        self.invoke_unit(
            "change_week_status",
            &dto::WeekStatusArgs {
                week_id: week_id.to_string(),
                status: completed,
            },
        )
        .await
    }

    async fn change_target_status(&self, target_id: &str, completed: bool) -> Result<(), AppError> {
        self.invoke_unit(
            "change_target_status",
            &dto::TargetStatusArgs {
                target_id: target_id.to_string(),
                status: completed,
            },
        )
        .await
    }

    async fn update_course(
        &self,
        course_id: &str,
        draft: &CourseContentDraft,
    ) -> Result<(), AppError> {
        self.invoke_unit(
            "update_course",
            &dto::UpdateCourseArgs {
                course_id: course_id.to_string(),
                draft: draft.clone(),
            },
        )
        .await
    }

    async fn create_courses(
        &self,
        courses: &[CourseDraft],
        departments: &[DepartmentDraft],
    ) -> Result<(), AppError> {
        self.invoke_unit(
            "create_courses",
            &dto::CreateCoursesArgs {
                courses: courses.to_vec(),
                departments: departments.to_vec(),
            },
        )
        .await
    }
}

/// Answers every query with nothing and every mutation with success.
pub struct NoopBackendClient;

#[async_trait]
impl BackendClient for NoopBackendClient {
    async fn get_course(&self, course_id: &str) -> Result<Course, AppError> {
        Err(AppError::Backend(format!("Unknown course: {}", course_id)))
    }

    async fn get_courses(&self) -> Result<Vec<CoursePreview>, AppError> {
        Ok(Vec::new())
    }

    async fn get_departments(&self) -> Result<Vec<DepartmentDraft>, AppError> {
        Ok(Vec::new())
    }

    async fn get_schedule(&self, _week_start: NaiveDate) -> Result<Vec<ScheduleEntry>, AppError> {
        Ok(Vec::new())
    }

    async fn update_course_status(
        &self,
        _course_id: &str,
        _status: CourseStatus,
    ) -> Result<(), AppError> {
        Ok(())
    }

    async fn change_week_status(&self, _week_id: &str, _completed: bool) -> Result<(), AppError> {
        Ok(())
    }

    async fn change_target_status(
        &self,
        _target_id: &str,
        _completed: bool,
    ) -> Result<(), AppError> {
        Ok(())
    }

    async fn update_course(
        &self,
        _course_id: &str,
        _draft: &CourseContentDraft,
    ) -> Result<(), AppError> {
        Ok(())
    }

    async fn create_courses(
        &self,
        _courses: &[CourseDraft],
        _departments: &[DepartmentDraft],
    ) -> Result<(), AppError> {
        Ok(())
    }
}
