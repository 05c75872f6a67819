//! tour-guide-rs: client for a remote trip-itinerary service
//!
//! A search always yields something to display: when the service cannot be
//! reached, answers with a non-2xx status, or sends a body without an
//! `itinerary`, a deterministic placeholder plan is substituted and the
//! failure is reported as a warning.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tour_guide_rs::{Session, TourPlanner, UserIdentity};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = TourPlanner::from_env()?;
//!
//!     let mut session = Session::new();
//!     session.login(UserIdentity::new("Ana", "ana@example.com"));
//!
//!     let outcome = planner.plan_for_session(&session, "Paris", "4").await?;
//!     if let Some(warning) = &outcome.warning {
//!         eprintln!("showing placeholder plan: {}", warning);
//!     }
//!     println!("{}-Day Tour of {}", outcome.plan.days, outcome.plan.city);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod schemas;
pub mod services;
pub mod types;

pub use config::TourGuideConfig;
pub use crate::core::{
    fallback_plan, DayCountPolicy, PlanOutcome, PlanSource, Session, TourPlanner, TEMPLATE_DAYS,
};
pub use error::{FetchError, Result, TourGuideError};
pub use services::{validate_response, HttpPlanTransport, PlanTransport};
pub use types::{
    Activity, ActivityKind, Attraction, BudgetEstimate, DayPlan, DaysInput, FoodItem,
    ItineraryPlan, ItineraryRequest, UserIdentity, DEFAULT_DAYS,
};

#[cfg(feature = "cli")]
pub mod cli;
