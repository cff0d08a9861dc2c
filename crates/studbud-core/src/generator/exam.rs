//! Exam preparation schedule: foundation, practice, review, assessment.

use jiff::ToSpan;

use super::{topic_priority, topics, TaskDraft};
use crate::models::Priority;
use crate::params::CreatePlan;

/// The window splits into three phases by fraction of total days:
/// foundation 40%, practice 35%, and review takes whatever remains.
pub(super) fn generate_tasks(params: &CreatePlan, total_days: i64) -> Vec<TaskDraft> {
    let mut tasks = Vec::new();
    let subject_topics = topics::subject_topics(&params.subject);

    let foundation_days = total_days * 2 / 5;
    let practice_days = total_days * 35 / 100;
    let review_days = total_days - foundation_days - practice_days;

    // Foundation covers at most the first three topics, spaced evenly
    // across the foundation window.
    for (index, topic) in subject_topics.iter().take(3).enumerate() {
        let offset = foundation_days * (index as i64 + 1) / 3;
        tasks.push(TaskDraft {
            title: format!("Master {topic} Fundamentals"),
            description: format!("Study core concepts and basic principles of {topic}"),
            due_date: params.start_date + offset.days(),
            estimated_hours: params.daily_hours * 3.0,
            priority: topic_priority(params, topic),
            category: "Foundation".to_string(),
        });
    }

    // Practice gets one task per topic, starting right after foundation.
    let topic_count = subject_topics.len() as i64;
    for (index, topic) in subject_topics.iter().enumerate() {
        let offset = foundation_days + practice_days * (index as i64 + 1) / topic_count;
        tasks.push(TaskDraft {
            title: format!("{topic} Practice Problems"),
            description: format!(
                "Complete practice exercises and solve sample problems for {topic}"
            ),
            due_date: params.start_date + offset.days(),
            estimated_hours: params.daily_hours * 2.0,
            priority: topic_priority(params, topic),
            category: "Practice".to_string(),
        });
    }

    let review_start = foundation_days + practice_days;
    let review_offset = review_start + review_days * 3 / 5;
    tasks.push(TaskDraft {
        title: "Comprehensive Review".to_string(),
        description: "Review all topics and focus on identified weaknesses".to_string(),
        due_date: params.start_date + review_offset.days(),
        estimated_hours: params.daily_hours * 4.0,
        priority: Priority::High,
        category: "Review".to_string(),
    });

    // The final mock exam lands on the last day of the window.
    tasks.push(TaskDraft {
        title: "Mock Exams".to_string(),
        description: "Take practice exams under timed conditions".to_string(),
        due_date: params.end_date,
        estimated_hours: params.daily_hours * 2.0,
        priority: Priority::High,
        category: "Assessment".to_string(),
    });

    tasks
}
