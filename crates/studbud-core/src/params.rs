//! Parameter types for planner operations.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{PlanStatus, PlanType},
};

/// Daily study budget bounds accepted by [`CreatePlan::validate`], in hours.
pub const MIN_DAILY_HOURS: f64 = 1.0;
pub const MAX_DAILY_HOURS: f64 = 12.0;

/// Identifier parameter for operations addressing a single plan or task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Id {
    /// Row ID of the target record
    pub id: u64,
}

/// Parameters for creating a plan and generating its task schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Title of the plan
    pub title: String,

    /// The kind of plan, selecting the generation strategy
    pub plan_type: PlanType,

    /// Free-text subject, matched against topic catalogs
    pub subject: String,

    /// First day of the study window
    pub start_date: Date,

    /// Last day of the study window (inclusive)
    pub end_date: Date,

    /// Daily time budget in hours
    pub daily_hours: f64,

    /// Topics the user feels weak in; matching generated tasks get
    /// High priority
    #[serde(default)]
    pub weaknesses: Vec<String>,

    /// Preferred learning methods (stored, not interpreted)
    #[serde(default)]
    pub learning_methods: Vec<String>,

    /// Free-text goals (stored, not interpreted)
    #[serde(default)]
    pub goals: Option<String>,
}

impl CreatePlan {
    /// Check the request before generation.
    ///
    /// The window must span more than one day (`end_date > start_date`)
    /// and the daily budget must fall within the accepted range.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PlannerError::invalid_request("title", "must not be empty"));
        }
        if self.subject.trim().is_empty() {
            return Err(PlannerError::invalid_request("subject", "must not be empty"));
        }
        if self.end_date <= self.start_date {
            return Err(PlannerError::invalid_request(
                "end_date",
                "must be later than start_date",
            ));
        }
        if !(MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&self.daily_hours) {
            return Err(PlannerError::invalid_request(
                "daily_hours",
                "must be between 1 and 12 hours",
            ));
        }
        Ok(())
    }

    /// Number of calendar days in the requested window, both endpoints
    /// inclusive.
    pub fn total_days(&self) -> i64 {
        i64::from((self.end_date - self.start_date).get_days()) + 1
    }
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Restrict the listing to plans with this status
    pub status: Option<PlanStatus>,
}

/// Parameters for deleting a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeletePlan {
    /// Row ID of the plan to delete
    pub id: u64,

    /// Deletion only proceeds when set; unconfirmed requests are rejected
    pub confirmed: bool,
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn valid_request() -> CreatePlan {
        CreatePlan {
            title: "Math exam prep".to_string(),
            plan_type: PlanType::Exam,
            subject: "Math".to_string(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 31),
            daily_hours: 2.0,
            weaknesses: Vec::new(),
            learning_methods: Vec::new(),
            goals: None,
        }
    }

    #[test]
    fn test_validate_accepts_valid_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let mut params = valid_request();
        params.title = "  ".to_string();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_subject() {
        let mut params = valid_request();
        params.subject = String::new();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let mut params = valid_request();
        params.end_date = date(2023, 12, 31);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_single_day_window() {
        let mut params = valid_request();
        params.end_date = params.start_date;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_two_day_window() {
        let mut params = valid_request();
        params.end_date = date(2024, 1, 2);
        assert!(params.validate().is_ok());
        assert_eq!(params.total_days(), 2);
    }

    #[test]
    fn test_validate_rejects_out_of_range_daily_hours() {
        let mut params = valid_request();
        params.daily_hours = 0.5;
        assert!(params.validate().is_err());
        params.daily_hours = 13.0;
        assert!(params.validate().is_err());
        params.daily_hours = 12.0;
        assert!(params.validate().is_ok());
    }
}
