use std::future::Future;
use std::sync::Arc;

use tracing::warn;

use crate::backend::BackendClient;
use crate::completion::ToggleFlag;
use crate::error::AppError;
use crate::models::{Course, CourseStatus};

/// Submits completion flips to the backend, one outstanding request per
/// entity, adopting each value only once the backend acknowledges it.
pub struct CompletionTracker {
    backend: Arc<dyn BackendClient>,
}

impl CompletionTracker {
    pub fn new(backend: Arc<dyn BackendClient>) -> Self {
        Self { backend }
    }

    pub async fn flip_week(&self, week_id: &str, flag: &mut ToggleFlag) -> Result<bool, AppError> {
        self.flip(flag, |completed| {
            let backend = self.backend.clone();
            let week_id = week_id.to_string();
            async move { backend.change_week_status(&week_id, completed).await }
        })
        .await
    }

    pub async fn flip_target(
        &self,
        target_id: &str,
        flag: &mut ToggleFlag,
    ) -> Result<bool, AppError> {
        self.flip(flag, |completed| {
            let backend = self.backend.clone();
            let target_id = target_id.to_string();
            async move { backend.change_target_status(&target_id, completed).await }
        })
        .await
    }

    async fn flip<F, Fut>(&self, flag: &mut ToggleFlag, submit: F) -> Result<bool, AppError>
    where
        F: Fn(bool) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        // A flip requested while another is outstanding stays queued; the
        // drain loop below submits it after the acknowledgement.
        let Some(mut desired) = flag.request() else {
            return Ok(flag.stored());
        };

        loop {
            match submit(desired).await {
                Ok(()) => match flag.acknowledge() {
                    Some(next) => desired = next,
                    None => return Ok(flag.stored()),
                },
                Err(err) => {
                    warn!("Status flip rejected, reverting: {}", err);
                    flag.reject();
                    return Err(err);
                }
            }
        }
    }

    /// Fires the status mutation and refetches the course; the mutation's
    /// own response is never trusted for display.
    pub async fn set_course_status(
        &self,
        course_id: &str,
        status: CourseStatus,
    ) -> Result<Course, AppError> {
        self.backend.update_course_status(course_id, status).await?;
        self.backend.get_course(course_id).await
    }
}
