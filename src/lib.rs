pub mod backend;
pub mod completion;
pub mod error;
pub mod generation;
pub mod models;
pub mod progress;
pub mod schedule;
pub mod services;
pub mod sorting;

pub use error::AppError;
