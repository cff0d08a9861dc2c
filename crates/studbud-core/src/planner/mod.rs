//! High-level planner API for managing study plans and tasks.
//!
//! This module provides the main [`Planner`] interface for interacting with
//! the Studbud study planning system. The planner acts as the central
//! coordinator between the application layers and the database: plan
//! creation runs the schedule generator and persists the result, and every
//! mutation keeps the plan aggregates consistent.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (plan_handlers, │───▶│ (plan_ops,      │───▶│   (via db/)     │
//! │  task_handlers) │    │  task_ops)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface      Business Logic         Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_handlers`]: High-level plan operations (create, list, show, toggle, etc.)
//! - [`task_handlers`]: High-level task operations (list, show, toggle)
//! - [`plan_ops`]: Lower-level plan database operations and queries
//! - [`task_ops`]: Lower-level task database operations and queries
//!
//! # Usage Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use studbud_core::{
//!     models::PlanType,
//!     params::CreatePlan,
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new().build().await?;
//!
//! // Create a plan; its task schedule is generated and stored with it
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         title: "Calculus final".to_string(),
//!         plan_type: PlanType::Exam,
//!         subject: "Math".to_string(),
//!         start_date: date(2024, 1, 1),
//!         end_date: date(2024, 1, 31),
//!         daily_hours: 2.0,
//!         weaknesses: vec!["Calculus".to_string()],
//!         learning_methods: Vec::new(),
//!         goals: None,
//!     })
//!     .await?;
//! println!("Created plan {} with {} tasks", plan.id, plan.tasks.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

// Module declarations
pub mod builder;
pub mod plan_handlers;
pub mod plan_ops;
pub mod task_handlers;
pub mod task_ops;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::PlannerBuilder;

/// Main planner interface for managing plans and tasks.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
