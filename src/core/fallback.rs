//! Placeholder itinerary used when the remote service gives us nothing usable.
//!
//! The plan is a fixed three-day template with the city name spliced into
//! every place name. Budget and highlights are constant.

use crate::types::{Activity, ActivityKind, Attraction, BudgetEstimate, DayPlan, ItineraryPlan};

/// Number of days the template can fill.
pub const TEMPLATE_DAYS: usize = 3;

/// Which day count goes into the header of a truncated placeholder plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayCountPolicy {
    /// Keep the count the caller asked for, even past the template length.
    #[default]
    Requested,
    /// Report the number of days actually in the itinerary.
    Delivered,
}

/// Synthesize the placeholder plan for `city` and `days`.
///
/// The itinerary holds `min(days, TEMPLATE_DAYS)` entries.
pub fn fallback_plan(city: &str, days: u32, policy: DayCountPolicy) -> ItineraryPlan {
    let mut itinerary = template_days(city);
    itinerary.truncate(days as usize);

    let header_days = match policy {
        DayCountPolicy::Requested => days,
        DayCountPolicy::Delivered => itinerary.len() as u32,
    };

    ItineraryPlan {
        city: city.to_string(),
        days: header_days,
        main_attractions: template_attractions(city),
        local_foods: Vec::new(),
        itinerary,
        highlights: [
            "Historic landmarks and architecture",
            "Local culinary experiences",
            "Cultural museums and galleries",
            "Scenic viewpoints and photo spots",
            "Traditional markets and shopping",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        budget: BudgetEstimate {
            accommodation: "$80-150/night".to_string(),
            food: "$25-40/day".to_string(),
            activities: "$20-50/day".to_string(),
            transport: "$15-30/day".to_string(),
        },
    }
}

fn attraction(
    name: String,
    description: String,
    category: &str,
    must_visit: bool,
    best_time: &str,
) -> Attraction {
    Attraction {
        name,
        description,
        category: Some(category.to_string()),
        must_visit: Some(must_visit),
        best_time: Some(best_time.to_string()),
    }
}

fn template_attractions(city: &str) -> Vec<Attraction> {
    vec![
        attraction(
            format!("{city} Historic Center"),
            format!("The heart of {city} with historic architecture"),
            "historical",
            true,
            "morning",
        ),
        attraction(
            format!("{city} Main Cathedral"),
            format!("Iconic religious landmark of {city}"),
            "religious",
            true,
            "any",
        ),
        attraction(
            format!("{city} Central Market"),
            "Traditional market with local goods and food".to_string(),
            "cultural",
            true,
            "morning",
        ),
        attraction(
            format!("{city} Museum"),
            format!("Learn about {city}'s history and culture"),
            "cultural",
            false,
            "afternoon",
        ),
        attraction(
            format!("{city} Scenic Viewpoint"),
            format!("Best panoramic views of {city}"),
            "natural",
            true,
            "evening",
        ),
    ]
}

fn step(
    time: &str,
    activity: impl Into<String>,
    description: &str,
    kind: ActivityKind,
    related: Option<String>,
) -> Activity {
    Activity {
        time: time.to_string(),
        activity: activity.into(),
        description: description.to_string(),
        kind,
        related_attraction: related,
    }
}

fn template_days(city: &str) -> Vec<DayPlan> {
    let place = |suffix: &str| format!("{city} {suffix}");

    vec![
        DayPlan {
            day: 1,
            title: format!("Welcome to {city}"),
            main_attraction: place("Historic Center"),
            activities: vec![
                step(
                    "09:00",
                    place("Historic Center Tour"),
                    "Explore the historic downtown area",
                    ActivityKind::Sightseeing,
                    Some(place("Historic Center")),
                ),
                step(
                    "12:00",
                    "Local Cuisine Lunch",
                    "Try authentic local dishes",
                    ActivityKind::Food,
                    Some(place("Central Market")),
                ),
                step(
                    "14:00",
                    place("Museum Visit"),
                    "Discover local history and culture",
                    ActivityKind::Activity,
                    Some(place("Museum")),
                ),
                step(
                    "18:00",
                    place("Scenic Viewpoint"),
                    "Perfect photo opportunity",
                    ActivityKind::Sightseeing,
                    Some(place("Scenic Viewpoint")),
                ),
            ],
        },
        DayPlan {
            day: 2,
            title: "Cultural Immersion".to_string(),
            main_attraction: place("Main Cathedral"),
            activities: vec![
                step(
                    "08:00",
                    place("Central Market Visit"),
                    "Experience local market culture",
                    ActivityKind::Activity,
                    Some(place("Central Market")),
                ),
                step(
                    "10:30",
                    place("Main Cathedral Tour"),
                    "Visit the iconic religious landmark",
                    ActivityKind::Sightseeing,
                    Some(place("Main Cathedral")),
                ),
                step(
                    "13:00",
                    "Cooking Class",
                    "Learn to make local specialties",
                    ActivityKind::Food,
                    None,
                ),
                step(
                    "16:00",
                    "Historical District",
                    "Walk through centuries of history",
                    ActivityKind::Sightseeing,
                    None,
                ),
            ],
        },
        DayPlan {
            day: 3,
            title: "Adventure & Relaxation".to_string(),
            main_attraction: place("Scenic Viewpoint"),
            activities: vec![
                step(
                    "09:00",
                    "Outdoor Activity",
                    "Hiking or nature exploration",
                    ActivityKind::Activity,
                    None,
                ),
                step(
                    "12:00",
                    "Picnic Lunch",
                    "Enjoy nature with local treats",
                    ActivityKind::Food,
                    None,
                ),
                step(
                    "15:00",
                    "Spa & Wellness",
                    "Relax and rejuvenate",
                    ActivityKind::Activity,
                    None,
                ),
                step(
                    "19:00",
                    place("Scenic Viewpoint Sunset"),
                    "Celebrate your journey with amazing views",
                    ActivityKind::Sightseeing,
                    Some(place("Scenic Viewpoint")),
                ),
            ],
        },
    ]
}
