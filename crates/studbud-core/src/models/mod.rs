//! Data models for plans, tasks, and related types.

mod filters;
mod overview;
mod plan;
mod status;
mod summary;
mod task;


pub use filters::PlanFilter;
pub use overview::StudyOverview;
pub use plan::Plan;
pub use status::{PlanStatus, PlanType, Priority, TaskStatus};
pub use summary::PlanSummary;
pub use task::Task;
