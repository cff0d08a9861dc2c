//! Task model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Priority, TaskStatus};

/// A single schedulable unit of study work within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the parent plan
    pub plan_id: u64,

    /// Brief title of the task
    pub title: String,

    /// Longer description of what the task covers
    pub description: Option<String>,

    /// Calendar date the task is due
    pub due_date: Date,

    /// Effort estimate in hours (always positive)
    pub estimated_hours: f64,

    /// Hours credited on completion: 0 while pending, the full estimate
    /// once completed
    pub completed_hours: f64,

    /// Task priority
    pub priority: Priority,

    /// Current completion state
    pub status: TaskStatus,

    /// Category label grouping tasks for display (e.g. "Foundation",
    /// "Practice", "Review", or a project phase name)
    pub category: String,

    /// Order of the task within the plan's generation sequence (0-indexed)
    pub order: u32,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last updated (UTC)
    pub updated_at: Timestamp,
}
