//! Plan operations for the Planner.

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    generator,
    models::{Plan, PlanFilter, PlanSummary, StudyOverview},
    params::{CreatePlan, Id},
};

impl Planner {
    /// Creates a new plan and generates its task schedule.
    ///
    /// The request is validated, the schedule is generated deterministically
    /// from the parameters, and the plan is stored together with all its
    /// tasks in one transaction. The returned plan has its tasks loaded.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            // Generation is pure computation; run it alongside the inserts
            let draft = generator::generate(&params);
            let mut db = Database::new(&db_path)?;
            db.create_plan(&params, &draft)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a plan by its ID, with tasks loaded.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists plan summaries with optional filtering, newest first.
    pub async fn list_plans(&self, filter: Option<PlanFilter>) -> Result<Vec<PlanSummary>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans(filter.as_ref())
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Reports whether a plan exists without loading it.
    pub async fn plan_exists(&self, params: &Id) -> Result<bool> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.plan_exists(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Toggles a plan between active and paused; completed plans resume
    /// to active.
    pub async fn toggle_plan_status(&self, params: &Id) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.toggle_plan_status(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Marks a plan as completed.
    pub async fn complete_plan(&self, params: &Id) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.complete_plan(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a plan and all its associated tasks.
    /// This operation cannot be undone.
    pub async fn delete_plan_by_id(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_plan(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Computes aggregate statistics across all plans and tasks.
    pub async fn overview(&self) -> Result<StudyOverview> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.overview()
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
