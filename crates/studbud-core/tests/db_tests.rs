use jiff::civil::date;
use studbud_core::{
    generator,
    models::{PlanFilter, PlanStatus, PlanType, TaskStatus},
    params::CreatePlan,
    Database, PlannerError,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn subject_request(title: &str) -> CreatePlan {
    CreatePlan {
        title: title.to_string(),
        plan_type: PlanType::Subject,
        subject: "History".to_string(),
        start_date: date(2024, 2, 1),
        end_date: date(2024, 2, 29),
        daily_hours: 1.5,
        weaknesses: Vec::new(),
        learning_methods: Vec::new(),
        goals: None,
    }
}

fn insert_plan(db: &mut Database, params: &CreatePlan) -> studbud_core::Plan {
    let draft = generator::generate(params);
    db.create_plan(params, &draft).expect("Failed to create plan")
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_schema_is_idempotent() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let _first = Database::new(temp_file.path()).expect("Failed to create database");
    // Reopening an existing database re-runs the schema and migrations
    let _second = Database::new(temp_file.path()).expect("Failed to reopen database");
}

#[test]
fn test_create_plan_stores_tasks() {
    let (_temp_file, mut db) = create_test_db();

    let params = subject_request("History Mastery");
    let plan = insert_plan(&mut db, &params);

    assert!(plan.id > 0);
    assert_eq!(plan.title, "History Mastery");
    assert_eq!(plan.plan_type, PlanType::Subject);
    // 4 history topics, a study/practice pair each
    assert_eq!(plan.tasks.len(), 8);
    assert!(plan.tasks.iter().all(|t| t.completed_hours == 0.0));
}

#[test]
fn test_get_plan_loads_tasks_in_order() {
    let (_temp_file, mut db) = create_test_db();

    let created = insert_plan(&mut db, &subject_request("Ordered"));
    let retrieved = db
        .get_plan(created.id)
        .expect("Failed to get plan")
        .expect("Plan should exist");

    assert_eq!(retrieved.id, created.id);
    let orders: Vec<u32> = retrieved.tasks.iter().map(|t| t.order).collect();
    assert_eq!(orders, (0..8).collect::<Vec<u32>>());
}

#[test]
fn test_get_missing_plan_returns_none() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_plan(123).expect("Query should succeed").is_none());
}

#[test]
fn test_plan_exists() {
    let (_temp_file, mut db) = create_test_db();

    let plan = insert_plan(&mut db, &subject_request("Existing"));
    assert!(db.plan_exists(plan.id).expect("Query should succeed"));
    assert!(!db.plan_exists(plan.id + 1).expect("Query should succeed"));
}

#[test]
fn test_list_plans_with_filters() {
    let (_temp_file, mut db) = create_test_db();

    insert_plan(&mut db, &subject_request("World History"));
    insert_plan(&mut db, &subject_request("Art History"));
    let third = insert_plan(&mut db, &subject_request("Paused One"));
    db.toggle_plan_status(third.id)
        .expect("Failed to pause plan");

    let all = db.list_plans(None).expect("Failed to list plans");
    assert_eq!(all.len(), 3);

    let filter = PlanFilter {
        title_contains: Some("History".to_string()),
        ..Default::default()
    };
    let by_title = db.list_plans(Some(&filter)).expect("Failed to list plans");
    assert_eq!(by_title.len(), 2);

    let active = db
        .list_plans(Some(&PlanFilter::with_status(PlanStatus::Active)))
        .expect("Failed to list plans");
    assert_eq!(active.len(), 2);
}

#[test]
fn test_toggle_task_recomputes_plan_hours() {
    let (_temp_file, mut db) = create_test_db();

    let plan = insert_plan(&mut db, &subject_request("Toggle"));
    let first = &plan.tasks[0];
    let second = &plan.tasks[1];

    db.toggle_task(first.id).expect("Failed to toggle task");
    db.toggle_task(second.id).expect("Failed to toggle task");

    let reloaded = db
        .get_plan(plan.id)
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(
        reloaded.completed_hours,
        first.estimated_hours + second.estimated_hours
    );

    let untoggled = db.toggle_task(first.id).expect("Failed to toggle back");
    assert_eq!(untoggled.status, TaskStatus::Pending);
    assert_eq!(untoggled.completed_hours, 0.0);

    let reloaded = db
        .get_plan(plan.id)
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(reloaded.completed_hours, second.estimated_hours);
}

#[test]
fn test_toggle_missing_task_fails() {
    let (_temp_file, mut db) = create_test_db();
    let result = db.toggle_task(55);
    assert!(matches!(result, Err(PlannerError::TaskNotFound { id: 55 })));
}

#[test]
fn test_delete_plan_removes_tasks() {
    let (_temp_file, mut db) = create_test_db();

    let plan = insert_plan(&mut db, &subject_request("Doomed"));
    db.delete_plan(plan.id).expect("Failed to delete plan");

    assert!(db.get_plan(plan.id).expect("Query should succeed").is_none());
    assert!(db
        .get_tasks(plan.id)
        .expect("Query should succeed")
        .is_empty());
}

#[test]
fn test_delete_missing_plan_fails() {
    let (_temp_file, mut db) = create_test_db();
    let result = db.delete_plan(404);
    assert!(matches!(
        result,
        Err(PlannerError::PlanNotFound { id: 404 })
    ));
}

#[test]
fn test_overview_aggregates() {
    let (_temp_file, mut db) = create_test_db();

    let first = insert_plan(&mut db, &subject_request("First"));
    insert_plan(&mut db, &subject_request("Second"));

    db.toggle_task(first.tasks[0].id)
        .expect("Failed to toggle task");
    db.complete_plan(first.id).expect("Failed to complete plan");

    let overview = db.overview().expect("Failed to compute overview");
    assert_eq!(overview.total_plans, 2);
    assert_eq!(overview.active_plans, 1);
    assert_eq!(overview.completed_plans, 1);
    assert_eq!(overview.pending_tasks, 15);
    assert_eq!(
        overview.total_completed_hours,
        first.tasks[0].estimated_hours
    );
}
