use jiff::civil::date;
use studbud_core::{models::PlanType, params::CreatePlan, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, studbud_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// A 31-day exam request used across tests.
pub fn exam_request() -> CreatePlan {
    CreatePlan {
        title: "Math Final".to_string(),
        plan_type: PlanType::Exam,
        subject: "Math".to_string(),
        start_date: date(2024, 1, 1),
        end_date: date(2024, 1, 31),
        daily_hours: 2.0,
        weaknesses: vec!["Algebra".to_string()],
        learning_methods: Vec::new(),
        goals: None,
    }
}
