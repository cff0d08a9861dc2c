//! Subject mastery schedule: weekly study and practice pairs per topic.

use jiff::ToSpan;

use super::{topic_priority, topics, TaskDraft};
use crate::params::CreatePlan;

pub(super) fn generate_tasks(params: &CreatePlan, total_days: i64) -> Vec<TaskDraft> {
    let mut tasks = Vec::new();
    let subject_topics = topics::subject_topics(&params.subject);

    let weeks = (total_days / 7).max(1);
    let topics_per_week = (subject_topics.len() as i64 / weeks).max(1);

    for (index, topic) in subject_topics.iter().enumerate() {
        let week = index as i64 / topics_per_week;
        let study_date = params.start_date + (7 * (week + 1)).days();
        let priority = topic_priority(params, topic);

        tasks.push(TaskDraft {
            title: format!("Study {topic}"),
            description: format!("Learn and understand {topic} concepts"),
            due_date: study_date,
            estimated_hours: params.daily_hours * 3.0,
            priority,
            category: "Learning".to_string(),
        });

        // Practice trails the study task by three days, even when that
        // lands past the end of the window.
        tasks.push(TaskDraft {
            title: format!("Practice {topic}"),
            description: format!("Apply {topic} knowledge through exercises"),
            due_date: study_date + 3.days(),
            estimated_hours: params.daily_hours * 2.0,
            priority,
            category: "Practice".to_string(),
        });
    }

    tasks
}
