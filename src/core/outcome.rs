use serde::{Deserialize, Serialize};
use tracing::warn;

use super::fallback::{fallback_plan, DayCountPolicy};
use crate::{
    error::FetchError,
    types::{ItineraryPlan, ItineraryRequest},
};

/// Where a displayed plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanSource {
    Remote,
    Fallback,
}

/// What the display layer gets after a search: always a plan, plus a warning
/// when the plan is a local placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub plan: ItineraryPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub source: PlanSource,
}

impl PlanOutcome {
    pub fn remote(plan: ItineraryPlan) -> Self {
        Self {
            plan,
            warning: None,
            source: PlanSource::Remote,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == PlanSource::Fallback
    }

    /// Substitute the placeholder plan for a failed fetch.
    pub fn fallback(
        request: &ItineraryRequest,
        error: &FetchError,
        policy: DayCountPolicy,
    ) -> Self {
        warn!(
            target: "tour_guide::planner",
            code = error.error_code(),
            city = %request.city,
            "using placeholder itinerary: {}",
            error
        );

        Self {
            plan: fallback_plan(&request.city, request.days, policy),
            warning: Some(error.to_string()),
            source: PlanSource::Fallback,
        }
    }

    /// Turn a fetch result into something displayable.
    pub fn resolve(
        result: Result<ItineraryPlan, FetchError>,
        request: &ItineraryRequest,
        policy: DayCountPolicy,
    ) -> Self {
        match result {
            Ok(plan) => Self::remote(plan),
            Err(err) => Self::fallback(request, &err, policy),
        }
    }
}
