//! Plan summary types for list views.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Plan, PlanStatus, PlanType, TaskStatus};

/// Summary information about a plan with task statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Title of the plan
    pub title: String,
    /// The kind of plan
    pub plan_type: PlanType,
    /// Subject the plan was generated for
    pub subject: String,
    /// First day of the study window
    pub start_date: Date,
    /// Last day of the study window (inclusive)
    pub end_date: Date,
    /// Total budgeted hours
    pub total_hours: f64,
    /// Hours completed so far
    pub completed_hours: f64,
    /// Plan status
    pub status: PlanStatus,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Total number of tasks
    pub total_tasks: u32,
    /// Number of completed tasks
    pub completed_tasks: u32,
    /// Number of pending tasks
    pub pending_tasks: u32,
}

impl PlanSummary {
    /// Completion as a fraction of the total budgeted hours, in `0.0..=100.0`.
    pub fn progress_percent(&self) -> f64 {
        if self.total_hours > 0.0 {
            (self.completed_hours / self.total_hours * 100.0).min(100.0)
        } else {
            0.0
        }
    }
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let total_tasks = plan.tasks.len() as u32;
        let completed_tasks = plan
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Completed)
            .count() as u32;

        Self {
            id: plan.id,
            title: plan.title.clone(),
            plan_type: plan.plan_type,
            subject: plan.subject.clone(),
            start_date: plan.start_date,
            end_date: plan.end_date,
            total_hours: plan.total_hours,
            completed_hours: plan.completed_hours,
            status: plan.status,
            created_at: plan.created_at,
            total_tasks,
            completed_tasks,
            pending_tasks: total_tasks - completed_tasks,
        }
    }
}
