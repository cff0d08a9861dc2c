//! Tests for the planner module.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    models::{PlanStatus, PlanType, TaskStatus},
    params::{CreatePlan, DeletePlan, Id, ListPlans},
    PlannerError,
};

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn exam_request() -> CreatePlan {
    CreatePlan {
        title: "Math Final".to_string(),
        plan_type: PlanType::Exam,
        subject: "Math".to_string(),
        start_date: date(2024, 1, 1),
        end_date: date(2024, 1, 31),
        daily_hours: 2.0,
        weaknesses: vec!["Algebra".to_string()],
        learning_methods: vec!["Flashcards".to_string()],
        goals: Some("Pass with distinction".to_string()),
    }
}

#[tokio::test]
async fn test_create_plan_persists_generated_schedule() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&exam_request())
        .await
        .expect("Failed to create plan");

    assert_eq!(plan.title, "Math Final");
    assert_eq!(plan.status, PlanStatus::Active);
    assert_eq!(plan.total_hours, 62.0);
    assert_eq!(plan.completed_hours, 0.0);
    assert_eq!(plan.tasks.len(), 10);
    assert!(plan.tasks.iter().all(|t| t.status == TaskStatus::Pending));
    assert!(plan.tasks.iter().all(|t| t.plan_id == plan.id));

    // tasks come back in generation order
    let orders: Vec<u32> = plan.tasks.iter().map(|t| t.order).collect();
    assert_eq!(orders, (0..10).collect::<Vec<u32>>());

    // stored lists survive the round trip
    assert_eq!(plan.weaknesses, vec!["Algebra".to_string()]);
    assert_eq!(plan.learning_methods, vec!["Flashcards".to_string()]);
    assert_eq!(plan.goals.as_deref(), Some("Pass with distinction"));
}

#[tokio::test]
async fn test_create_plan_rejects_invalid_request() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = exam_request();
    params.end_date = date(2023, 12, 1);

    let result = planner.create_plan(&params).await;
    assert!(matches!(
        result,
        Err(PlannerError::InvalidRequest { .. })
    ));

    // nothing was persisted
    let summaries = planner
        .list_plans_summary(&ListPlans::default())
        .await
        .expect("Failed to list plans");
    assert!(summaries.is_empty());
}

#[tokio::test]
async fn test_list_plans_summary_with_status_filter() {
    let (_temp_dir, planner) = create_test_planner().await;

    let first = planner
        .create_plan(&exam_request())
        .await
        .expect("Failed to create plan");

    let mut second_params = exam_request();
    second_params.title = "Paused Plan".to_string();
    let second = planner
        .create_plan(&second_params)
        .await
        .expect("Failed to create plan");

    planner
        .toggle_plan_status(&Id { id: second.id })
        .await
        .expect("Failed to pause plan");

    let all = planner
        .list_plans_summary(&ListPlans::default())
        .await
        .expect("Failed to list plans");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].total_tasks, 10);
    assert_eq!(all[0].pending_tasks, 10);

    let active = planner
        .list_plans_summary(&ListPlans {
            status: Some(PlanStatus::Active),
        })
        .await
        .expect("Failed to list active plans");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, first.id);

    let paused = planner
        .list_plans_summary(&ListPlans {
            status: Some(PlanStatus::Paused),
        })
        .await
        .expect("Failed to list paused plans");
    assert_eq!(paused.len(), 1);
    assert_eq!(paused[0].id, second.id);
}

#[tokio::test]
async fn test_toggle_task_updates_plan_aggregate() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&exam_request())
        .await
        .expect("Failed to create plan");
    let task = plan.tasks[0].clone();

    let toggled = planner
        .toggle_task(&Id { id: task.id })
        .await
        .expect("Failed to toggle task");
    assert_eq!(toggled.status, TaskStatus::Completed);
    assert_eq!(toggled.completed_hours, task.estimated_hours);

    let plan = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(plan.completed_hours, task.estimated_hours);

    // toggling back resets the credited hours
    let toggled = planner
        .toggle_task(&Id { id: task.id })
        .await
        .expect("Failed to toggle task back");
    assert_eq!(toggled.status, TaskStatus::Pending);
    assert_eq!(toggled.completed_hours, 0.0);

    let plan = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(plan.completed_hours, 0.0);
}

#[tokio::test]
async fn test_toggle_task_aggregate_matches_task_sum() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&exam_request())
        .await
        .expect("Failed to create plan");

    for task in plan.tasks.iter().take(3) {
        planner
            .toggle_task(&Id { id: task.id })
            .await
            .expect("Failed to toggle task");
    }

    let plan = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("Failed to get plan")
        .expect("Plan should exist");

    let expected: f64 = plan
        .tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .map(|t| t.estimated_hours)
        .sum();
    assert_eq!(plan.completed_hours, expected);
}

#[tokio::test]
async fn test_toggle_missing_task_fails() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner.toggle_task(&Id { id: 999 }).await;
    assert!(matches!(
        result,
        Err(PlannerError::TaskNotFound { id: 999 })
    ));
}

#[tokio::test]
async fn test_toggle_plan_status_cycle() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&exam_request())
        .await
        .expect("Failed to create plan");
    let id = Id { id: plan.id };

    let paused = planner
        .toggle_plan_status(&id)
        .await
        .expect("Failed to toggle plan");
    assert_eq!(paused.status, PlanStatus::Paused);

    let resumed = planner
        .toggle_plan_status(&id)
        .await
        .expect("Failed to toggle plan");
    assert_eq!(resumed.status, PlanStatus::Active);

    let completed = planner
        .complete_plan(&id)
        .await
        .expect("Failed to complete plan");
    assert_eq!(completed.status, PlanStatus::Completed);

    // toggling a completed plan resumes it
    let reopened = planner
        .toggle_plan_status(&id)
        .await
        .expect("Failed to toggle plan");
    assert_eq!(reopened.status, PlanStatus::Active);
}

#[tokio::test]
async fn test_toggle_missing_plan_fails() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner.toggle_plan_status(&Id { id: 42 }).await;
    assert!(matches!(result, Err(PlannerError::PlanNotFound { id: 42 })));
}

#[tokio::test]
async fn test_delete_plan_requires_confirmation() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&exam_request())
        .await
        .expect("Failed to create plan");

    let result = planner
        .delete_plan(&DeletePlan {
            id: plan.id,
            confirmed: false,
        })
        .await;
    assert!(matches!(
        result,
        Err(PlannerError::InvalidRequest { .. })
    ));

    // the plan is still there
    assert!(planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("Failed to get plan")
        .is_some());
}

#[tokio::test]
async fn test_delete_plan_removes_tasks_and_overview_contribution() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&exam_request())
        .await
        .expect("Failed to create plan");

    planner
        .toggle_task(&Id {
            id: plan.tasks[0].id,
        })
        .await
        .expect("Failed to toggle task");

    let before = planner.overview().await.expect("Failed to get overview");
    assert_eq!(before.total_plans, 1);
    assert_eq!(before.pending_tasks, 9);
    assert!(before.total_completed_hours > 0.0);

    let deleted = planner
        .delete_plan(&DeletePlan {
            id: plan.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete plan")
        .expect("Deleted plan details should be returned");
    assert_eq!(deleted.id, plan.id);

    assert!(planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("Failed to get plan")
        .is_none());
    assert!(planner
        .get_tasks(&Id { id: plan.id })
        .await
        .expect("Failed to get tasks")
        .is_empty());

    // the overview no longer counts the deleted plan
    let after = planner.overview().await.expect("Failed to get overview");
    assert_eq!(after.total_plans, 0);
    assert_eq!(after.pending_tasks, 0);
    assert_eq!(after.total_completed_hours, 0.0);
}

#[tokio::test]
async fn test_delete_missing_plan_returns_none() {
    let (_temp_dir, planner) = create_test_planner().await;

    let deleted = planner
        .delete_plan(&DeletePlan {
            id: 7,
            confirmed: true,
        })
        .await
        .expect("Delete of missing plan should not error");
    assert!(deleted.is_none());
}

#[tokio::test]
async fn test_overview_counts_by_status() {
    let (_temp_dir, planner) = create_test_planner().await;

    let first = planner
        .create_plan(&exam_request())
        .await
        .expect("Failed to create plan");

    let mut second_params = exam_request();
    second_params.title = "Second".to_string();
    planner
        .create_plan(&second_params)
        .await
        .expect("Failed to create plan");

    planner
        .complete_plan(&Id { id: first.id })
        .await
        .expect("Failed to complete plan");

    let overview = planner.overview().await.expect("Failed to get overview");
    assert_eq!(overview.total_plans, 2);
    assert_eq!(overview.active_plans, 1);
    assert_eq!(overview.completed_plans, 1);
    assert_eq!(overview.pending_tasks, 20);
}

#[tokio::test]
async fn test_list_tasks_missing_plan_fails() {
    let (_temp_dir, planner) = create_test_planner().await;

    // a populated store must still reject listings for a bad plan ID
    planner
        .create_plan(&exam_request())
        .await
        .expect("Failed to create plan");

    let result = planner.list_tasks(&Id { id: 999 }).await;
    assert!(matches!(
        result,
        Err(PlannerError::PlanNotFound { id: 999 })
    ));
}

#[tokio::test]
async fn test_show_missing_plan_returns_none() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .show_plan_with_tasks(&Id { id: 1 })
        .await
        .expect("Failed to show plan");
    assert!(plan.is_none());

    let task = planner
        .show_task(&Id { id: 1 })
        .await
        .expect("Failed to show task");
    assert!(task.is_none());
}
