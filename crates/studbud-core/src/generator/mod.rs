//! Deterministic schedule generation.
//!
//! Given validated creation parameters, the generator produces a complete
//! task schedule without any I/O or randomness: the same input always
//! yields the same draft. Each plan type has its own strategy.

mod exam;
mod project;
mod subject;
mod topics;


use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{PlanType, Priority};
use crate::params::CreatePlan;

/// A generated schedule before it is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDraft {
    /// Calendar days in the window, both endpoints inclusive
    pub total_days: i64,
    /// Total budgeted hours over the window
    pub total_hours: f64,
    /// Generated tasks, in generation order
    pub tasks: Vec<TaskDraft>,
}

/// A single generated task before it is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Date,
    pub estimated_hours: f64,
    pub priority: Priority,
    pub category: String,
}

/// Generate the task schedule for a creation request.
///
/// The caller is expected to have validated the parameters first. Due
/// dates are not clamped to the window; short ranges can place a few
/// dates past the end date, and callers display them as generated.
pub fn generate(params: &CreatePlan) -> PlanDraft {
    let total_days = params.total_days();
    let total_hours = total_days as f64 * params.daily_hours;

    let tasks = match params.plan_type {
        PlanType::Exam => exam::generate_tasks(params, total_days),
        PlanType::Project => project::generate_tasks(params, total_days),
        PlanType::Subject => subject::generate_tasks(params, total_days),
    };

    PlanDraft {
        total_days,
        total_hours,
        tasks,
    }
}

/// High when the topic appears in the declared weaknesses, Medium otherwise.
fn topic_priority(params: &CreatePlan, topic: &str) -> Priority {
    if params.weaknesses.iter().any(|weakness| weakness == topic) {
        Priority::High
    } else {
        Priority::Medium
    }
}
