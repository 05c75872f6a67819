use std::fmt::{self, Write};

use crate::{
    core::PlanOutcome,
    types::{Attraction, UserIdentity},
};

const MAX_ATTRACTIONS: usize = 6;
const MAX_FOOD: usize = 4;

pub fn category_label(category: Option<&str>) -> &'static str {
    match category {
        Some("historical") => "Historic",
        Some("natural") => "Nature",
        Some("cultural") => "Culture",
        Some("modern") => "Modern",
        Some("religious") => "Religious",
        _ => "Landmark",
    }
}

pub fn best_time_label(best_time: Option<&str>) -> &'static str {
    match best_time {
        Some("morning") => "morning",
        Some("afternoon") => "afternoon",
        Some("evening") => "evening",
        _ => "any time",
    }
}

fn attraction_line(attraction: &Attraction) -> String {
    let marker = if attraction.must_visit.unwrap_or(false) {
        " *"
    } else {
        ""
    };
    format!(
        "  [{}] {}{} ({}) - {}",
        category_label(attraction.category.as_deref()),
        attraction.name,
        marker,
        best_time_label(attraction.best_time.as_deref()),
        attraction.description
    )
}

/// Plain-text rendering of a search result.
pub fn render_outcome(
    outcome: &PlanOutcome,
    user: Option<&UserIdentity>,
) -> Result<String, fmt::Error> {
    let plan = &outcome.plan;
    let mut out = String::new();

    if let Some(user) = user {
        writeln!(out, "Welcome, {}", user.name)?;
    }
    if let Some(warning) = &outcome.warning {
        writeln!(out, "Error: {}", warning)?;
    }

    writeln!(
        out,
        "{}-Day Tour of {} ({} activities)",
        plan.days,
        plan.city,
        plan.activity_count()
    )?;
    writeln!(out)?;

    writeln!(out, "Budget")?;
    writeln!(out, "  Accommodation: {}", plan.budget.accommodation)?;
    writeln!(out, "  Food:          {}", plan.budget.food)?;
    writeln!(out, "  Activities:    {}", plan.budget.activities)?;
    writeln!(out, "  Transport:     {}", plan.budget.transport)?;

    if !plan.main_attractions.is_empty() {
        writeln!(out)?;
        writeln!(out, "Top Attractions")?;
        for attraction in plan.main_attractions.iter().take(MAX_ATTRACTIONS) {
            writeln!(out, "{}", attraction_line(attraction))?;
        }
    }

    let food = plan.food_activities(MAX_FOOD);
    if !food.is_empty() {
        writeln!(out)?;
        writeln!(out, "Local Food")?;
        for item in food {
            writeln!(out, "  {} - {}", item.activity, item.description)?;
        }
    }

    for day in &plan.itinerary {
        writeln!(out)?;
        writeln!(out, "Day {} - {}", day.day, day.title)?;
        writeln!(out, "  Focus: {}", day.main_attraction)?;
        for activity in &day.activities {
            writeln!(
                out,
                "  {}  {} [{}] - {}",
                activity.time,
                activity.activity,
                activity.kind.label(),
                activity.description
            )?;
        }
    }

    if !plan.highlights.is_empty() {
        writeln!(out)?;
        writeln!(out, "Highlights")?;
        for highlight in &plan.highlights {
            writeln!(out, "  - {}", highlight)?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{DayCountPolicy, PlanOutcome},
        error::FetchError,
        types::ItineraryRequest,
    };

    #[test]
    fn test_fallback_rendering() {
        let request = ItineraryRequest::new("Paris", "5", None).unwrap();
        let outcome = PlanOutcome::resolve(
            Err(FetchError::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            }),
            &request,
            DayCountPolicy::Requested,
        );
        let user = UserIdentity::new("Ana", "ana@example.com");

        let text = render_outcome(&outcome, Some(&user)).unwrap();
        assert!(text.starts_with("Welcome, Ana\nError: API Error: 500 Internal Server Error\n"));
        assert!(text.contains("5-Day Tour of Paris (12 activities)"));
        assert!(text.contains("[Historic] Paris Historic Center * (morning)"));
        assert!(text.contains("[Culture] Paris Museum (afternoon)"));
        assert!(text.contains("Day 3 - Adventure & Relaxation"));
        assert!(!text.contains("Day 4"));
        assert!(text.contains("Local Food\n  Local Cuisine Lunch"));
    }

    #[test]
    fn test_labels_default() {
        assert_eq!(category_label(None), "Landmark");
        assert_eq!(category_label(Some("volcanic")), "Landmark");
        assert_eq!(best_time_label(Some("any")), "any time");
    }
}
