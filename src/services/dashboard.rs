use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::backend::BackendClient;
use crate::error::AppError;
use crate::models::ScheduleEntry;
use crate::schedule::{self, ScheduleWindow};

/// A schedule window together with the courses taught in it.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub window: ScheduleWindow,
    pub entries: Vec<ScheduleEntry>,
}

pub struct ScheduleService {
    backend: Arc<dyn BackendClient>,
}

impl ScheduleService {
    pub fn new(backend: Arc<dyn BackendClient>) -> Self {
        Self { backend }
    }

    /// Loads the window containing `reference` and the courses with at least
    /// one week dated inside it. An empty window is a valid result.
    pub async fn load(&self, reference: NaiveDate) -> Result<DashboardView, AppError> {
        let window = schedule::window_for(reference);
        let mut entries = self.backend.get_schedule(window.monday).await?;

        for entry in &mut entries {
            entry
                .weeks
                .retain(|week| match week.date {
                    Some(date) => window.monday <= date && date <= window.sunday,
                    None => false,
                });
            entry.weeks.sort_by_key(|week| week.serial);
        }
        entries.retain(|entry| !entry.weeks.is_empty());

        entries.sort_by(|a, b| {
            a.course
                .department
                .cmp(&b.course.department)
                .then(a.course.serial.cmp(&b.course.serial))
        });

        info!("Loaded schedule {}: {} courses", window.label, entries.len());

        Ok(DashboardView { window, entries })
    }

    /// `load` shifted one week forward from `reference`.
    pub async fn load_next(&self, reference: NaiveDate) -> Result<DashboardView, AppError> {
        self.load(schedule::next_week(reference)).await
    }

    /// `load` shifted one week back from `reference`.
    pub async fn load_previous(&self, reference: NaiveDate) -> Result<DashboardView, AppError> {
        self.load(schedule::previous_week(reference)).await
    }
}
