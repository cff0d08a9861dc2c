//! Plan handler operations that return formatted wrapper types for the
//! Planner.

use super::Planner;
use crate::{
    display::{CreateResult, PlanSummaries, UpdateResult},
    error::Result,
    models::{Plan, PlanFilter, PlanStatus, StudyOverview},
    params::{CreatePlan, DeletePlan, Id, ListPlans},
};

impl Planner {
    /// Handle listing plans with optional status filtering.
    ///
    /// Returns summaries with task count information for consistent list
    /// display. An absent status filter lists plans of every status.
    pub async fn list_plans_summary(&self, params: &ListPlans) -> Result<PlanSummaries> {
        let filter = Some(PlanFilter::from(params));
        let summaries = self.list_plans(filter).await?;
        Ok(PlanSummaries(summaries))
    }

    /// Handle showing a complete plan with all its tasks.
    ///
    /// Returns None if the plan doesn't exist.
    pub async fn show_plan_with_tasks(&self, params: &Id) -> Result<Option<Plan>> {
        self.get_plan(params).await
    }

    /// Handle creating a new plan with its generated schedule.
    ///
    /// Returns a creation result wrapping the stored plan and its tasks.
    pub async fn create_plan_result(&self, params: &CreatePlan) -> Result<CreateResult<Plan>> {
        let plan = self.create_plan(params).await?;
        Ok(CreateResult::new(plan))
    }

    /// Handle toggling a plan between active and paused.
    ///
    /// Returns an update result describing the status transition.
    pub async fn toggle_plan_result(&self, params: &Id) -> Result<UpdateResult<Plan>> {
        let plan = self.toggle_plan_status(params).await?;
        let change = match plan.status {
            PlanStatus::Active => "Resumed plan (status: active)",
            PlanStatus::Paused => "Paused plan (status: paused)",
            PlanStatus::Completed => "Completed plan (status: completed)",
        };
        Ok(UpdateResult::with_changes(plan, vec![change.to_string()]))
    }

    /// Handle marking a plan as completed.
    pub async fn complete_plan_result(&self, params: &Id) -> Result<UpdateResult<Plan>> {
        let plan = self.complete_plan(params).await?;
        Ok(UpdateResult::with_changes(
            plan,
            vec!["Marked plan as completed".to_string()],
        ))
    }

    /// Handle permanently deleting a plan with confirmation.
    ///
    /// Permanently removes a plan and all its associated tasks from the
    /// database. This operation cannot be undone. Uses get-before-delete
    /// pattern to return the plan details for confirmation.
    ///
    /// Requires explicit confirmation via the `confirmed` field to prevent
    /// accidental deletion. Returns an error if confirmation is not
    /// provided.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidRequest` if `confirmed` field is false
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<Option<Plan>> {
        // Check confirmation flag first
        if !params.confirmed {
            return Err(crate::PlannerError::InvalidRequest {
                field: "confirmed".to_string(),
                reason: "Plan deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.".to_string(),
            });
        }

        // Convert to Id params for internal operations
        let id_params = Id { id: params.id };
        let plan = self.get_plan(&id_params).await?;

        if plan.is_some() {
            self.delete_plan_by_id(&id_params).await?;
        }

        Ok(plan)
    }

    /// Handle the dashboard overview of all study activity.
    pub async fn overview_result(&self) -> Result<StudyOverview> {
        self.overview().await
    }
}
