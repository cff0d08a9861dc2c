//! Cross-plan aggregate statistics for the dashboard view.

use serde::{Deserialize, Serialize};

/// Aggregate counts and hours across every plan in the store.
///
/// Deleting a plan removes its contribution from all of these figures,
/// since they are recomputed from the live tables on each query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StudyOverview {
    /// Total number of plans
    pub total_plans: u32,
    /// Plans currently active
    pub active_plans: u32,
    /// Plans marked completed
    pub completed_plans: u32,
    /// Tasks still pending across all plans
    pub pending_tasks: u32,
    /// Sum of completed hours across all plans
    pub total_completed_hours: f64,
}
