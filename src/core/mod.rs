pub mod fallback;
pub mod outcome;
pub mod planner;
pub mod session;

pub use fallback::{fallback_plan, DayCountPolicy, TEMPLATE_DAYS};
pub use outcome::{PlanOutcome, PlanSource};
pub use planner::TourPlanner;
pub use session::Session;
