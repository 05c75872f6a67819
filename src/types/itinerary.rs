use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::lenient::{lenient_count, null_as_default};

/// Multi-day trip plan, either returned by the itinerary service or
/// synthesized locally when the service is unavailable.
///
/// Every field except `itinerary` defaults when absent or `null` so that a
/// remote body is accepted as-is once the itinerary is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ItineraryPlan {
    /// Destination city the plan was generated for
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub city: String,
    /// Day count reported in the plan header
    #[serde(default, deserialize_with = "lenient_count")]
    #[schemars(with = "u32")]
    pub days: u32,
    /// Points of interest, most important first
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<Attraction>")]
    pub main_attractions: Vec<Attraction>,
    /// Dishes or venues worth trying
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<FoodItem>")]
    pub local_foods: Vec<FoodItem>,
    /// Day-by-day schedule
    pub itinerary: Vec<DayPlan>,
    /// Short selling points for the trip
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<String>")]
    pub highlights: Vec<String>,
    /// Rough cost ranges per category
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "BudgetEstimate")]
    pub budget: BudgetEstimate,
}

impl ItineraryPlan {
    /// Food-type activities across all days, in schedule order, capped at `limit`.
    pub fn food_activities(&self, limit: usize) -> Vec<&Activity> {
        self.itinerary
            .iter()
            .flat_map(|day| day.activities.iter())
            .filter(|activity| activity.kind == ActivityKind::Food)
            .take(limit)
            .collect()
    }

    /// Total number of scheduled activities.
    pub fn activity_count(&self) -> usize {
        self.itinerary.iter().map(|day| day.activities.len()).sum()
    }
}

/// A point of interest. Category, must-visit and best-time hints are optional
/// because the service does not always provide them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Attraction {
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub description: String,
    /// e.g. "historical", "natural", "cultural", "modern", "religious"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub must_visit: Option<bool>,
    /// e.g. "morning", "afternoon", "evening", "any"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FoodItem {
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<String>,
}

/// One day of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DayPlan {
    /// 1-based day counter
    #[serde(default, deserialize_with = "lenient_count")]
    #[schemars(with = "u32")]
    pub day: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub main_attraction: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<Activity>")]
    pub activities: Vec<Activity>,
}

/// A timed entry within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Activity {
    /// Local start time as "HH:MM"
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub activity: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub description: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    #[schemars(with = "ActivityKind")]
    pub kind: ActivityKind,
    #[serde(
        rename = "attraction_related",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub related_attraction: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Sightseeing,
    Food,
    Accommodation,
    #[default]
    Activity,
    /// Any type the service sends that is not one of the above
    #[serde(other)]
    Other,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Sightseeing => "sightseeing",
            ActivityKind::Food => "food",
            ActivityKind::Accommodation => "accommodation",
            ActivityKind::Activity => "activity",
            ActivityKind::Other => "other",
        }
    }
}

/// Free-text cost ranges, e.g. "$80-150/night".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BudgetEstimate {
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub accommodation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub food: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub activities: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub transport: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_field_names() {
        let activity = Activity {
            time: "09:00".to_string(),
            activity: "Old Town Walk".to_string(),
            description: "Guided walk".to_string(),
            kind: ActivityKind::Sightseeing,
            related_attraction: Some("Old Town".to_string()),
        };

        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(value["type"], "sightseeing");
        assert_eq!(value["attraction_related"], "Old Town");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_unknown_activity_type_maps_to_other() {
        let activity: Activity = serde_json::from_value(json!({
            "time": "20:00",
            "activity": "Night tram",
            "description": "",
            "type": "transport"
        }))
        .unwrap();
        assert_eq!(activity.kind, ActivityKind::Other);
        assert!(activity.related_attraction.is_none());
    }

    #[test]
    fn test_minimal_plan_defaults() {
        let plan: ItineraryPlan = serde_json::from_value(json!({
            "itinerary": [{"day": 1, "title": "Arrival", "main_attraction": "Harbour", "activities": []}]
        }))
        .unwrap();
        assert_eq!(plan.itinerary.len(), 1);
        assert!(plan.city.is_empty());
        assert_eq!(plan.budget, BudgetEstimate::default());
    }

    #[test]
    fn test_food_activities_respects_order_and_limit() {
        let food = |time: &str| Activity {
            time: time.to_string(),
            activity: format!("Meal at {}", time),
            description: String::new(),
            kind: ActivityKind::Food,
            related_attraction: None,
        };
        let plan = ItineraryPlan {
            city: "Lima".to_string(),
            days: 2,
            main_attractions: Vec::new(),
            local_foods: Vec::new(),
            itinerary: vec![
                DayPlan {
                    day: 1,
                    title: "One".to_string(),
                    main_attraction: "Plaza".to_string(),
                    activities: vec![food("12:00"), food("19:00")],
                },
                DayPlan {
                    day: 2,
                    title: "Two".to_string(),
                    main_attraction: "Coast".to_string(),
                    activities: vec![food("08:00")],
                },
            ],
            highlights: Vec::new(),
            budget: BudgetEstimate::default(),
        };

        let meals = plan.food_activities(2);
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].time, "12:00");
        assert_eq!(meals[1].time, "19:00");
        assert_eq!(plan.activity_count(), 3);
    }
}
