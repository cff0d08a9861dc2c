//! Task queries and the completion toggle.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension, Transaction};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    generator::TaskDraft,
    models::{Priority, Task, TaskStatus},
};

// Optimized SQL queries as const strings for compile-time optimization
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (plan_id, title, description, due_date, estimated_hours, completed_hours, priority, status, category, task_order, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7, ?8, ?9, ?10, ?10)";
const SELECT_TASKS_BY_PLAN_SQL: &str = "SELECT id, plan_id, title, description, due_date, estimated_hours, completed_hours, priority, status, category, task_order, created_at, updated_at FROM tasks WHERE plan_id = ?1 ORDER BY task_order";
const SELECT_TASK_BY_ID_SQL: &str = "SELECT id, plan_id, title, description, due_date, estimated_hours, completed_hours, priority, status, category, task_order, created_at, updated_at FROM tasks WHERE id = ?1";
const UPDATE_TASK_TOGGLE_SQL: &str =
    "UPDATE tasks SET status = ?1, completed_hours = ?2, updated_at = ?3 WHERE id = ?4";
const RECOMPUTE_PLAN_HOURS_SQL: &str = "UPDATE plans SET completed_hours = (SELECT COALESCE(SUM(completed_hours), 0) FROM tasks WHERE plan_id = ?1), updated_at = ?2 WHERE id = ?1";

/// Inserts generated tasks for a freshly created plan inside the caller's
/// transaction, preserving generation order.
pub(super) fn insert_draft_tasks(
    tx: &Transaction,
    plan_id: u64,
    drafts: &[TaskDraft],
    now_str: &str,
) -> Result<()> {
    let mut stmt = tx
        .prepare(INSERT_TASK_SQL)
        .db_context("Failed to prepare task insert")?;

    for (order, draft) in drafts.iter().enumerate() {
        stmt.execute(params![
            plan_id as i64,
            &draft.title,
            &draft.description,
            draft.due_date.to_string(),
            draft.estimated_hours,
            draft.priority.as_str(),
            TaskStatus::Pending.as_str(),
            &draft.category,
            order as i64,
            now_str,
        ])
        .map_err(|e| PlannerError::database_error("Failed to insert task", e))?;
    }

    Ok(())
}

impl super::Database {
    /// Helper function to construct a Task from a database row
    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        let priority_str: String = row.get(7)?;
        let priority = priority_str.parse::<Priority>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                7,
                Type::Text,
                format!("Invalid priority: {priority_str}").into(),
            )
        })?;

        let status_str: String = row.get(8)?;
        let status = status_str.parse::<TaskStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                8,
                Type::Text,
                format!("Invalid status: {status_str}").into(),
            )
        })?;

        Ok(Task {
            id: row.get::<_, i64>(0)? as u64,
            plan_id: row.get::<_, i64>(1)? as u64,
            title: row.get(2)?,
            description: row.get(3)?,
            due_date: row.get::<_, String>(4)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            estimated_hours: row.get(5)?,
            completed_hours: row.get(6)?,
            priority,
            status,
            category: row.get(9)?,
            order: row.get::<_, i64>(10)? as u32,
            created_at: row
                .get::<_, String>(11)?
                .parse::<Timestamp>()
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(11, Type::Text, Box::new(e))
                })?,
            updated_at: row
                .get::<_, String>(12)?
                .parse::<Timestamp>()
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(12, Type::Text, Box::new(e))
                })?,
        })
    }

    /// Retrieves all tasks for a given plan, in generation order.
    pub fn get_tasks(&self, plan_id: u64) -> Result<Vec<Task>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASKS_BY_PLAN_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let tasks = stmt
            .query_map(params![plan_id as i64], Self::build_task_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query tasks", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch tasks", e))?;

        Ok(tasks)
    }

    /// Retrieves a single task by its ID.
    pub fn get_task(&self, task_id: u64) -> Result<Option<Task>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASK_BY_ID_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let task = stmt
            .query_row(params![task_id as i64], Self::build_task_from_row)
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to get task", e))?;

        Ok(task)
    }

    /// Toggles a task's completion state and recomputes its plan's
    /// completed hours.
    ///
    /// Completing a task credits its full estimate; un-completing it resets
    /// its credited hours to zero. The task update and the plan aggregate
    /// recomputation happen in one transaction so the invariant
    /// `plan.completed_hours == sum of task completed_hours` holds at every
    /// commit point. Returns the updated task.
    pub fn toggle_task(&mut self, task_id: u64) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let task = tx
            .query_row(
                SELECT_TASK_BY_ID_SQL,
                params![task_id as i64],
                Self::build_task_from_row,
            )
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to query task", e))?
            .ok_or(PlannerError::TaskNotFound { id: task_id })?;

        let (new_status, new_completed_hours) = match task.status {
            TaskStatus::Pending => (TaskStatus::Completed, task.estimated_hours),
            TaskStatus::Completed => (TaskStatus::Pending, 0.0),
        };

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_TASK_TOGGLE_SQL,
            params![
                new_status.as_str(),
                new_completed_hours,
                &now_str,
                task_id as i64
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to toggle task", e))?;

        tx.execute(
            RECOMPUTE_PLAN_HOURS_SQL,
            params![task.plan_id as i64, &now_str],
        )
        .map_err(|e| PlannerError::database_error("Failed to recompute plan hours", e))?;

        let updated = tx
            .query_row(
                SELECT_TASK_BY_ID_SQL,
                params![task_id as i64],
                Self::build_task_from_row,
            )
            .map_err(|e| PlannerError::database_error("Failed to query toggled task", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(updated)
    }
}
