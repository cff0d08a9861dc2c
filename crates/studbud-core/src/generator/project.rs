//! Project schedule: four fixed phases walked in order.

use jiff::ToSpan;

use super::{topics::PROJECT_PHASES, TaskDraft};
use crate::models::Priority;
use crate::params::CreatePlan;

pub(super) fn generate_tasks(params: &CreatePlan, total_days: i64) -> Vec<TaskDraft> {
    let mut tasks = Vec::new();
    let phase_count = PROJECT_PHASES.len() as i64;
    let days_per_phase = total_days / phase_count;

    let estimated_hours = (params.daily_hours * 1.5).round().max(2.0);

    for (phase_index, (phase, activities)) in PROJECT_PHASES.iter().enumerate() {
        // Only the last phase carries urgency.
        let priority = if phase_index == PROJECT_PHASES.len() - 1 {
            Priority::High
        } else {
            Priority::Medium
        };

        let activity_count = activities.len() as i64;
        for (activity_index, activity) in activities.iter().enumerate() {
            let offset = phase_index as i64 * days_per_phase
                + days_per_phase * (activity_index as i64 + 1) / activity_count;
            tasks.push(TaskDraft {
                title: (*activity).to_string(),
                description: format!("Complete {activity} for {} project", params.subject),
                due_date: params.start_date + offset.days(),
                estimated_hours,
                priority,
                category: (*phase).to_string(),
            });
        }
    }

    tasks
}
