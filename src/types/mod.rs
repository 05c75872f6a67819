pub mod identity;
pub mod itinerary;
pub mod request;
mod lenient;

pub use identity::UserIdentity;
pub use itinerary::{
    Activity, ActivityKind, Attraction, BudgetEstimate, DayPlan, FoodItem, ItineraryPlan,
};
pub use request::{DaysInput, ItineraryRequest, DEFAULT_DAYS};
