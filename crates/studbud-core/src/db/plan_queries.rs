//! Plan CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    generator::PlanDraft,
    models::{Plan, PlanFilter, PlanStatus, PlanSummary, PlanType, StudyOverview},
    params::CreatePlan,
};

// Optimized SQL queries as const strings for compile-time optimization
const INSERT_PLAN_SQL: &str = "INSERT INTO plans (title, plan_type, subject, start_date, end_date, daily_hours, total_hours, completed_hours, weaknesses, learning_methods, goals, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, ?8, ?9, ?10, ?11, ?12, ?12)";
const SELECT_PLAN_SQL: &str = "SELECT id, title, plan_type, subject, start_date, end_date, daily_hours, total_hours, completed_hours, weaknesses, learning_methods, goals, status, created_at, updated_at FROM plans WHERE id = ?1";
const SELECT_PLAN_STATUS_SQL: &str = "SELECT status FROM plans WHERE id = ?1";
const UPDATE_PLAN_STATUS_SQL: &str = "UPDATE plans SET status = ?1, updated_at = ?2 WHERE id = ?3";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const DELETE_PLAN_TASKS_SQL: &str = "DELETE FROM tasks WHERE plan_id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

// Base query for plan listing
const PLAN_SUMMARY_COLUMNS: &str = "id, title, plan_type, subject, start_date, end_date, total_hours, completed_hours, status, created_at, total_tasks, completed_tasks";
const PLAN_SUMMARIES_VIEW: &str = "plan_summaries";

// Overview aggregates are recomputed from the live tables on every call, so
// deleted plans stop contributing immediately.
const OVERVIEW_PLANS_SQL: &str = "SELECT COUNT(*), COALESCE(SUM(CASE WHEN status = 'active' THEN 1 ELSE 0 END), 0), COALESCE(SUM(CASE WHEN status = 'completed' THEN 1 ELSE 0 END), 0), COALESCE(SUM(completed_hours), 0) FROM plans";
const OVERVIEW_PENDING_TASKS_SQL: &str =
    "SELECT COUNT(*) FROM tasks WHERE status = 'pending'";

/// Joins a string list into the comma-separated form stored in the database.
fn join_list(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

/// Splits a stored comma-separated list back into values.
fn split_list(stored: Option<String>) -> Vec<String> {
    stored
        .map(|s| s.split(',').map(String::from).collect())
        .unwrap_or_default()
}

impl super::Database {
    /// Helper function to construct a Plan from a database row, without tasks
    fn build_plan_from_row(row: &rusqlite::Row) -> rusqlite::Result<Plan> {
        let plan_type_str: String = row.get(2)?;
        let plan_type = plan_type_str.parse::<PlanType>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Text,
                format!("Invalid plan type: {plan_type_str}").into(),
            )
        })?;

        let status_str: String = row.get(12)?;
        let status = status_str.parse::<PlanStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                12,
                Type::Text,
                format!("Invalid plan status: {status_str}").into(),
            )
        })?;

        Ok(Plan {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            plan_type,
            subject: row.get(3)?,
            start_date: row.get::<_, String>(4)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            end_date: row.get::<_, String>(5)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            daily_hours: row.get(6)?,
            total_hours: row.get(7)?,
            completed_hours: row.get(8)?,
            weaknesses: split_list(row.get(9)?),
            learning_methods: split_list(row.get(10)?),
            goals: row.get(11)?,
            status,
            created_at: row
                .get::<_, String>(13)?
                .parse::<Timestamp>()
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(13, Type::Text, Box::new(e))
                })?,
            updated_at: row
                .get::<_, String>(14)?
                .parse::<Timestamp>()
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(14, Type::Text, Box::new(e))
                })?,
            tasks: Vec::new(),
        })
    }

    /// Creates a new plan together with its generated tasks.
    ///
    /// The plan row and every task row are inserted in a single transaction;
    /// a failure rolls back the whole schedule.
    pub fn create_plan(&mut self, request: &CreatePlan, draft: &PlanDraft) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                &request.title,
                request.plan_type.as_str(),
                &request.subject,
                request.start_date.to_string(),
                request.end_date.to_string(),
                request.daily_hours,
                draft.total_hours,
                join_list(&request.weaknesses).as_deref(),
                join_list(&request.learning_methods).as_deref(),
                request.goals.as_deref(),
                PlanStatus::Active.as_str(),
                &now_str,
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert plan", e))?;

        let plan_id = tx.last_insert_rowid() as u64;

        super::task_queries::insert_draft_tasks(&tx, plan_id, &draft.tasks, &now_str)?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_plan(plan_id)?
            .ok_or(PlannerError::PlanNotFound { id: plan_id })
    }

    /// Retrieves a plan by its ID, with its tasks in generation order.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let mut plan = stmt
            .query_row(params![id as i64], Self::build_plan_from_row)
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to query plan", e))?;

        // Eagerly load tasks if plan exists
        if let Some(ref mut plan) = plan {
            plan.tasks = self.get_tasks(plan.id)?;
        }

        Ok(plan)
    }

    /// Lists plan summaries with optional filtering, newest first.
    pub fn list_plans(&self, filter: Option<&PlanFilter>) -> Result<Vec<PlanSummary>> {
        let mut query = format!("SELECT {PLAN_SUMMARY_COLUMNS} FROM {PLAN_SUMMARIES_VIEW}");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref title) = f.title_contains {
                conditions.push("title LIKE ?");
                params_vec.push(Box::new(format!("%{title}%")));
            }

            if let Some(ref subject) = f.subject_contains {
                conditions.push("subject LIKE ?");
                params_vec.push(Box::new(format!("%{subject}%")));
            }

            if let Some(ref after) = f.created_after {
                conditions.push("created_at >= ?");
                params_vec.push(Box::new(after.to_string()));
            }

            if let Some(ref before) = f.created_before {
                conditions.push("created_at <= ?");
                params_vec.push(Box::new(before.to_string()));
            }

            if let Some(ref status) = f.status {
                conditions.push("status = ?");
                params_vec.push(Box::new(status.as_str().to_string()));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_at DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let summaries = stmt
            .query_map(&params_refs[..], Self::build_summary_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query plans", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch plans", e))?;

        Ok(summaries)
    }

    /// Helper function to construct a PlanSummary from a summary-view row
    fn build_summary_from_row(row: &rusqlite::Row) -> rusqlite::Result<PlanSummary> {
        let plan_type_str: String = row.get(2)?;
        let plan_type = plan_type_str.parse::<PlanType>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Text,
                format!("Invalid plan type: {plan_type_str}").into(),
            )
        })?;

        let status_str: String = row.get(8)?;
        let status = status_str.parse::<PlanStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                8,
                Type::Text,
                format!("Invalid plan status: {status_str}").into(),
            )
        })?;

        let total_tasks = row.get::<_, i64>(10)? as u32;
        let completed_tasks = row.get::<_, i64>(11)? as u32;

        Ok(PlanSummary {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            plan_type,
            subject: row.get(3)?,
            start_date: row.get::<_, String>(4)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            end_date: row.get::<_, String>(5)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            total_hours: row.get(6)?,
            completed_hours: row.get(7)?,
            status,
            created_at: row.get::<_, String>(9)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e))
            })?,
            total_tasks,
            completed_tasks,
            pending_tasks: total_tasks - completed_tasks,
        })
    }

    /// Reports whether a plan row exists.
    pub fn plan_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .map_err(|e| PlannerError::database_error("Failed to check plan existence", e))
    }

    /// Toggles a plan between active and paused.
    ///
    /// Completed plans resume to active. Returns the updated plan.
    pub fn toggle_plan_status(&mut self, id: u64) -> Result<Plan> {
        let current = self.plan_status(id)?;
        self.set_plan_status(id, current.toggled())
    }

    /// Marks a plan as completed, regardless of its current status.
    pub fn complete_plan(&mut self, id: u64) -> Result<Plan> {
        // Existence check keeps the not-found error ahead of the update
        self.plan_status(id)?;
        self.set_plan_status(id, PlanStatus::Completed)
    }

    fn plan_status(&self, id: u64) -> Result<PlanStatus> {
        let status_str: Option<String> = self
            .connection
            .query_row(SELECT_PLAN_STATUS_SQL, params![id as i64], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to query plan status", e))?;

        match status_str {
            None => Err(PlannerError::PlanNotFound { id }),
            Some(s) => s
                .parse::<PlanStatus>()
                .map_err(|_| PlannerError::Configuration {
                    message: format!("Invalid plan status stored for plan {id}: {s}"),
                }),
        }
    }

    fn set_plan_status(&mut self, id: u64, status: PlanStatus) -> Result<Plan> {
        let now_str = Timestamp::now().to_string();
        self.connection
            .execute(
                UPDATE_PLAN_STATUS_SQL,
                params![status.as_str(), &now_str, id as i64],
            )
            .map_err(|e| PlannerError::database_error("Failed to update plan status", e))?;

        self.get_plan(id)?.ok_or(PlannerError::PlanNotFound { id })
    }

    /// Permanently deletes a plan and all its tasks from the database.
    /// This operation cannot be undone.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        // Check if plan exists
        let exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .map_err(|e| PlannerError::database_error("Failed to check plan existence", e))?;

        if !exists {
            return Err(PlannerError::PlanNotFound { id });
        }

        // Delete all tasks associated with this plan first
        // (Foreign key constraints should handle this automatically, but we'll be
        // explicit)
        tx.execute(DELETE_PLAN_TASKS_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan tasks", e))?;

        // Delete the plan itself
        tx.execute(DELETE_PLAN_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Computes aggregate statistics across all plans and tasks.
    pub fn overview(&self) -> Result<StudyOverview> {
        let (total_plans, active_plans, completed_plans, total_completed_hours): (
            i64,
            i64,
            i64,
            f64,
        ) = self
            .connection
            .query_row(OVERVIEW_PLANS_SQL, [], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })
            .map_err(|e| PlannerError::database_error("Failed to query plan overview", e))?;

        let pending_tasks: i64 = self
            .connection
            .query_row(OVERVIEW_PENDING_TASKS_SQL, [], |row| row.get(0))
            .map_err(|e| PlannerError::database_error("Failed to query pending task count", e))?;

        Ok(StudyOverview {
            total_plans: total_plans as u32,
            active_plans: active_plans as u32,
            completed_plans: completed_plans as u32,
            pending_tasks: pending_tasks as u32,
            total_completed_hours,
        })
    }
}
