//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain
//! objects with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{PlanSummary, Task};

/// Newtype wrapper for displaying collections of plan summaries.
///
/// This provides clean Display formatting for plan collections without title
/// handling, allowing consumers to handle titles separately. Handles empty
/// collections gracefully.
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the plan summary at the given index.
    pub fn get(&self, index: usize) -> Option<&PlanSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSummaries {
    type Item = PlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{}", plan)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of tasks.
///
/// Handles empty collections gracefully and formats each task using the
/// existing Task Display trait.
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the task at the given index.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{}", task)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::models::{PlanStatus, PlanType, Priority, TaskStatus};

    fn create_test_plan_summary() -> PlanSummary {
        PlanSummary {
            id: 1,
            title: "Test Plan".to_string(),
            plan_type: PlanType::Exam,
            subject: "Math".to_string(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 31),
            total_hours: 62.0,
            completed_hours: 6.0,
            status: PlanStatus::Active,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            total_tasks: 3,
            completed_tasks: 1,
            pending_tasks: 2,
        }
    }

    fn create_test_task() -> Task {
        Task {
            id: 1,
            plan_id: 1,
            title: "Test Task".to_string(),
            description: Some("A test task".to_string()),
            due_date: date(2024, 1, 5),
            estimated_hours: 6.0,
            completed_hours: 0.0,
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            category: "Foundation".to_string(),
            order: 0,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_plan_summaries_display() {
        // Test with plans
        let plans = vec![create_test_plan_summary()];
        let summaries = PlanSummaries(plans);
        let output = format!("{}", summaries);
        assert!(output.contains("Test Plan"));
        assert!(output.contains("ID: 1"));
        assert!(output.contains("(1/3)"));

        // Test empty collection
        let empty_summaries = PlanSummaries(vec![]);
        let empty_output = format!("{}", empty_summaries);
        assert_eq!(empty_output, "No plans found.\n");

        // Test multiple plans
        let plan1 = create_test_plan_summary();
        let mut plan2 = create_test_plan_summary();
        plan2.id = 2;
        plan2.title = "Second Plan".to_string();
        let plans = vec![plan1, plan2];
        let summaries = PlanSummaries(plans);
        let output = format!("{}", summaries);
        assert!(output.contains("## Test Plan"));
        assert!(output.contains("## Second Plan"));
        // Verify it doesn't start with a title header
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn test_tasks_display_empty() {
        let tasks = Tasks(vec![]);
        let output = format!("{}", tasks);
        assert_eq!(output, "No tasks found.\n");
    }

    #[test]
    fn test_tasks_display_single_task() {
        let task = create_test_task();
        let tasks = Tasks(vec![task]);
        let output = format!("{}", tasks);

        assert!(output.contains("Test Task"));
        assert!(output.contains("○ Pending"));
        assert!(output.contains("Due: 2024-01-05"));
        assert!(output.contains("Foundation"));
    }

    #[test]
    fn test_tasks_display_multiple_tasks() {
        let task1 = create_test_task();
        let mut task2 = create_test_task();
        task2.id = 2;
        task2.title = "Second Task".to_string();
        task2.status = TaskStatus::Completed;
        task2.completed_hours = task2.estimated_hours;

        let tasks = Tasks(vec![task1, task2]);
        let output = format!("{}", tasks);

        assert!(output.contains("Test Task"));
        assert!(output.contains("Second Task"));
        assert!(output.contains("○ Pending"));
        assert!(output.contains("✓ Completed"));
    }
}
