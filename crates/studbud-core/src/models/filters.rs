//! Filter types for querying plans.

use jiff::Timestamp;

use super::PlanStatus;

/// Filter options for querying plans.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Filter by plan title (case-insensitive partial match)
    pub title_contains: Option<String>,

    /// Filter by subject (case-insensitive partial match)
    pub subject_contains: Option<String>,

    /// Filter by creation date range
    pub created_after: Option<Timestamp>,
    pub created_before: Option<Timestamp>,

    /// Filter by plan status; `None` returns plans of every status
    pub status: Option<PlanStatus>,
}

impl PlanFilter {
    /// Filter restricted to a single status.
    pub fn with_status(status: PlanStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl From<&crate::params::ListPlans> for PlanFilter {
    /// Convert ListPlans parameters to a PlanFilter for plan queries.
    ///
    /// An absent status in the parameters means "all plans"; otherwise the
    /// filter matches the requested status exactly.
    fn from(params: &crate::params::ListPlans) -> Self {
        Self {
            status: params.status,
            ..Default::default()
        }
    }
}
