//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation
//! of concerns. The implementations produce markdown for rich terminal
//! display.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Plan, PlanStatus, PlanSummary, PlanType, Priority, StudyOverview, Task};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Type: {}", self.plan_type)?;
        writeln!(f, "- Subject: {}", self.subject)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(
            f,
            "- Window: {} to {} ({} days)",
            self.start_date,
            self.end_date,
            self.total_days()
        )?;
        writeln!(f, "- Daily budget: {} hours", self.daily_hours)?;
        writeln!(
            f,
            "- Progress: {:.1}/{:.1} hours ({:.0}%)",
            self.completed_hours,
            self.total_hours,
            self.progress_percent()
        )?;
        if !self.weaknesses.is_empty() {
            writeln!(f, "- Weaknesses: {}", self.weaknesses.join(", "))?;
        }
        if !self.learning_methods.is_empty() {
            writeln!(f, "- Learning methods: {}", self.learning_methods.join(", "))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        // Goals as a paragraph
        if let Some(goals) = &self.goals {
            writeln!(f)?;
            writeln!(f, "{goals}")?;
        }

        if !self.tasks.is_empty() {
            writeln!(f, "\n## Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                write!(f, "{}", task)?;
            }
        } else {
            writeln!(f, "\nNo tasks in this plan.")?;
        }

        Ok(())
    }
}

impl Task {
    /// Format the task using the clean, compact display format.
    ///
    /// This uses the same format whether the task is displayed standalone
    /// or within a plan context.
    fn fmt_task(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        writeln!(f, "- Due: {}", self.due_date)?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        writeln!(
            f,
            "- Hours: {:.1}/{:.1}",
            self.completed_hours, self.estimated_hours
        )?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_task(f)
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_tasks > 0 {
            format!(" ({}/{})", self.completed_tasks, self.total_tasks)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;

        writeln!(f, "- **Type**: {}", self.plan_type)?;
        writeln!(f, "- **Subject**: {}", self.subject)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(f, "- **Window**: {} to {}", self.start_date, self.end_date)?;
        writeln!(
            f,
            "- **Progress**: {:.1}/{:.1} hours ({:.0}%)",
            self.completed_hours,
            self.total_hours,
            self.progress_percent()
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Add blank line after each plan

        Ok(())
    }
}

impl fmt::Display for StudyOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Study Overview")?;
        writeln!(f)?;
        writeln!(f, "- Total plans: {}", self.total_plans)?;
        writeln!(f, "- Active plans: {}", self.active_plans)?;
        writeln!(f, "- Completed plans: {}", self.completed_plans)?;
        writeln!(f, "- Pending tasks: {}", self.pending_tasks)?;
        writeln!(f, "- Hours studied: {:.1}", self.total_completed_hours)?;

        Ok(())
    }
}
