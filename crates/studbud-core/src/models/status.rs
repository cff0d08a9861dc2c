//! Status and priority enumerations for plans and tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Plan is actively being worked on
    #[default]
    Active,

    /// Plan is temporarily on hold
    Paused,

    /// Plan has been marked finished by the user
    Completed,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PlanStatus::Active),
            "paused" => Ok(PlanStatus::Paused),
            "completed" => Ok(PlanStatus::Completed),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Paused => "paused",
            PlanStatus::Completed => "completed",
        }
    }

    /// The status a pause/resume toggle transitions to.
    ///
    /// Active plans pause; paused and completed plans resume to active.
    pub fn toggled(&self) -> Self {
        match self {
            PlanStatus::Active => PlanStatus::Paused,
            PlanStatus::Paused | PlanStatus::Completed => PlanStatus::Active,
        }
    }
}

/// Type-safe enumeration of task statuses.
///
/// Task completion is binary: a task is either pending or completed, and
/// its completed hours are either zero or its full estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task has not been completed yet
    #[default]
    Pending,

    /// Task has been completed
    Completed,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl TaskStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "✓ Completed",
            TaskStatus::Pending => "○ Pending",
        }
    }
}

/// Task priority levels.
///
/// Generation assigns High to tasks touching user-declared weaknesses and
/// to final-phase work; Low exists for completeness of the scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// The kind of study plan, which selects the generation strategy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// Exam preparation: foundation/practice/review phases
    #[default]
    Exam,

    /// Project work: research/planning/development/finalization phases
    Project,

    /// Subject mastery: weekly study/practice pairs per topic
    Subject,
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exam" => Ok(PlanType::Exam),
            "project" => Ok(PlanType::Project),
            "subject" => Ok(PlanType::Subject),
            _ => Err(format!("Invalid plan type: {s}")),
        }
    }
}

impl PlanType {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Exam => "exam",
            PlanType::Project => "project",
            PlanType::Subject => "subject",
        }
    }
}
