//! Plan model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{PlanStatus, PlanType, Task};

/// A generated study schedule with metadata, aggregate hours, and an
/// ordered task list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Title of the plan
    pub title: String,

    /// The kind of plan, which selected the generation strategy
    pub plan_type: PlanType,

    /// Free-text subject the plan was generated for
    pub subject: String,

    /// First day of the study window
    pub start_date: Date,

    /// Last day of the study window (inclusive)
    pub end_date: Date,

    /// Daily time budget in hours
    pub daily_hours: f64,

    /// Total budgeted hours, fixed at creation: total days times daily hours
    pub total_hours: f64,

    /// Sum of completed hours over all tasks, recomputed on every task toggle
    pub completed_hours: f64,

    /// User-declared weak topics, elevating matching task priorities
    #[serde(default)]
    pub weaknesses: Vec<String>,

    /// Preferred learning methods (informational only)
    #[serde(default)]
    pub learning_methods: Vec<String>,

    /// Free-text goals (informational only)
    pub goals: Option<String>,

    /// Status of the plan
    #[serde(default)]
    pub status: PlanStatus,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    /// Generated tasks, in generation order (not necessarily date order)
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Plan {
    /// Number of calendar days in the plan window, both endpoints inclusive.
    pub fn total_days(&self) -> i64 {
        i64::from((self.end_date - self.start_date).get_days()) + 1
    }

    /// Completion as a fraction of the total budgeted hours, in `0.0..=100.0`.
    pub fn progress_percent(&self) -> f64 {
        if self.total_hours > 0.0 {
            (self.completed_hours / self.total_hours * 100.0).min(100.0)
        } else {
            0.0
        }
    }
}
