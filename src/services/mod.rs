pub mod dashboard;
pub mod generator;
pub mod tracker;

pub use dashboard::{DashboardView, ScheduleService};
pub use generator::CourseGenerator;
pub use tracker::CompletionTracker;
