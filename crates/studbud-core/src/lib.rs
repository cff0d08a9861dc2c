//! Core library for the Studbud study planning application.
//!
//! This crate provides the core business logic for generating and tracking
//! study plans: the deterministic schedule generator, database operations,
//! data models, and error handling.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! This separation allows the same data to be formatted differently depending
//! on context (lists vs. individual items, creation results vs. updates)
//! while maintaining consistency across all output.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use studbud_core::{models::PlanType, params::CreatePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a planner instance
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Create a plan; the task schedule is generated from the request
//! let create_params = CreatePlan {
//!     title: "Biology midterm".to_string(),
//!     plan_type: PlanType::Exam,
//!     subject: "Biology".to_string(),
//!     start_date: date(2024, 3, 1),
//!     end_date: date(2024, 3, 21),
//!     daily_hours: 2.0,
//!     weaknesses: vec!["Physics".to_string()],
//!     learning_methods: Vec::new(),
//!     goals: None,
//! };
//!
//! let plan = planner.create_plan(&create_params).await?;
//! println!("Created plan: {}", plan);
//!
//! // List plans as summaries
//! use studbud_core::params::ListPlans;
//! let plans = planner.list_plans_summary(&ListPlans::default()).await?;
//! for plan in &plans {
//!     println!("Plan: {}", plan.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, OperationStatus, PlanSummaries, Tasks, UpdateResult,
};
pub use error::{PlannerError, Result};
pub use generator::{PlanDraft, TaskDraft};
pub use models::{
    Plan, PlanFilter, PlanStatus, PlanSummary, PlanType, Priority, StudyOverview, Task, TaskStatus,
};
pub use params::{CreatePlan, DeletePlan, Id, ListPlans};
pub use planner::{Planner, PlannerBuilder};
