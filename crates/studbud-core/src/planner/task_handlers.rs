//! Task handler operations that return formatted wrapper types for the
//! Planner.

use super::Planner;
use crate::{
    display::{Tasks, UpdateResult},
    error::Result,
    models::{Task, TaskStatus},
    params::Id,
    PlannerError,
};

impl Planner {
    /// Handle listing all tasks for a plan.
    ///
    /// Returns a Tasks wrapper in generation order for consistent list
    /// display. A missing plan is an error, so an empty listing always
    /// means an existing plan without tasks rather than a bad ID.
    pub async fn list_tasks(&self, params: &Id) -> Result<Tasks> {
        if !self.plan_exists(params).await? {
            return Err(PlannerError::PlanNotFound { id: params.id });
        }
        let tasks = self.get_tasks(params).await?;
        Ok(Tasks(tasks))
    }

    /// Handle showing a single task.
    ///
    /// Returns None if the task doesn't exist.
    pub async fn show_task(&self, params: &Id) -> Result<Option<Task>> {
        self.get_task(params).await
    }

    /// Handle toggling a task's completion state.
    ///
    /// Returns an update result describing the transition and the hours
    /// credited or reset.
    pub async fn toggle_task_result(&self, params: &Id) -> Result<UpdateResult<Task>> {
        let task = self.toggle_task(params).await?;
        let change = match task.status {
            TaskStatus::Completed => format!(
                "Marked task as completed ({:.1} hours credited)",
                task.completed_hours
            ),
            TaskStatus::Pending => "Marked task as pending (hours reset)".to_string(),
        };
        Ok(UpdateResult::with_changes(task, vec![change]))
    }
}
