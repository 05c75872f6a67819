use std::sync::Arc;

use tracing::{debug, info};

use super::{fallback::DayCountPolicy, outcome::PlanOutcome, session::Session};
use crate::{
    config::TourGuideConfig,
    error::{FetchError, Result, TourGuideError},
    services::{validate_response, HttpPlanTransport, PlanTransport},
    types::{DaysInput, ItineraryPlan, ItineraryRequest},
};

/// Requests itineraries and guarantees the caller something to display.
///
/// The planner holds no per-request state, so concurrent calls are allowed;
/// keeping a single search in flight is up to the caller.
#[derive(Debug, Clone)]
pub struct TourPlanner {
    transport: Arc<dyn PlanTransport>,
    day_count_policy: DayCountPolicy,
}

impl TourPlanner {
    pub fn new<T: PlanTransport + 'static>(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            day_count_policy: DayCountPolicy::default(),
        }
    }

    pub fn from_config(config: &TourGuideConfig) -> Result<Self> {
        Ok(Self::new(HttpPlanTransport::new(config)?))
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(&TourGuideConfig::from_env()?)
    }

    pub fn with_day_count_policy(mut self, policy: DayCountPolicy) -> Self {
        self.day_count_policy = policy;
        self
    }

    /// Single remote attempt, errors returned as-is.
    pub async fn fetch_plan(
        &self,
        request: &ItineraryRequest,
    ) -> std::result::Result<ItineraryPlan, FetchError> {
        info!(
            target: "tour_guide::planner",
            city = %request.city,
            days = request.days,
            "requesting itinerary"
        );
        if let Ok(body) = serde_json::to_string(request) {
            debug!(target: "tour_guide::planner", body = %body, "request body");
        }

        let payload = self.transport.post_plan(request).await?;
        let plan = validate_response(payload)?;

        info!(
            target: "tour_guide::planner",
            city = %plan.city,
            days = plan.itinerary.len(),
            "received itinerary"
        );
        Ok(plan)
    }

    /// Plan a trip. Only a blank `city` is an error, and it is raised before
    /// any request goes out; remote failures yield a placeholder plan with a
    /// warning instead.
    pub async fn plan_trip(
        &self,
        city: &str,
        days: impl Into<DaysInput>,
        requester_id: Option<&str>,
    ) -> Result<PlanOutcome> {
        let request = ItineraryRequest::new(city, days, requester_id.map(str::to_string))?;
        let result = self.fetch_plan(&request).await;
        Ok(PlanOutcome::resolve(result, &request, self.day_count_policy))
    }

    /// [`plan_trip`](Self::plan_trip) on behalf of the logged-in user.
    pub async fn plan_for_session(
        &self,
        session: &Session,
        city: &str,
        days: impl Into<DaysInput>,
    ) -> Result<PlanOutcome> {
        let requester_id = session.requester_id().ok_or_else(|| {
            TourGuideError::Input("Log in before planning a trip".to_string())
        })?;
        self.plan_trip(city, days, Some(&requester_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserIdentity;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingTransport {
        seen: Mutex<Vec<ItineraryRequest>>,
    }

    #[async_trait]
    impl PlanTransport for RecordingTransport {
        async fn post_plan(
            &self,
            request: &ItineraryRequest,
        ) -> std::result::Result<Value, FetchError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(json!({"city": request.city, "days": request.days, "itinerary": []}))
        }
    }

    #[derive(Debug)]
    struct Unreachable;

    #[async_trait]
    impl PlanTransport for Unreachable {
        async fn post_plan(
            &self,
            _: &ItineraryRequest,
        ) -> std::result::Result<Value, FetchError> {
            Err(FetchError::Transport("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_blank_city_sends_nothing() {
        let transport = Arc::new(RecordingTransport::default());
        let planner = TourPlanner {
            transport: transport.clone(),
            day_count_policy: DayCountPolicy::Requested,
        };

        let err = planner.plan_trip("  ", "2", None).await.unwrap_err();
        assert!(matches!(err, TourGuideError::Input(_)));
        assert!(transport.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_session_email_becomes_requester() {
        let transport = Arc::new(RecordingTransport::default());
        let planner = TourPlanner {
            transport: transport.clone(),
            day_count_policy: DayCountPolicy::Requested,
        };
        let mut session = Session::new();
        session.login(UserIdentity::new("Ana", "ana@example.com"));

        let outcome = planner.plan_for_session(&session, "Lisbon", "x").await.unwrap();
        assert!(!outcome.is_fallback());

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].requester_id.as_deref(), Some("ana@example.com"));
        assert_eq!(seen[0].days, 3);
    }

    #[tokio::test]
    async fn test_anonymous_session_refused() {
        let planner = TourPlanner::new(Unreachable);
        let err = planner
            .plan_for_session(&Session::new(), "Lisbon", 2u32)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INPUT_ERROR");
    }

    #[test]
    fn test_delivered_policy_applies_to_fallback() {
        let planner =
            TourPlanner::new(Unreachable).with_day_count_policy(DayCountPolicy::Delivered);
        let outcome = tokio_test::block_on(planner.plan_trip("Porto", 7u32, None)).unwrap();
        assert!(outcome.is_fallback());
        assert_eq!(outcome.plan.days, 3);
        assert_eq!(outcome.plan.itinerary.len(), 3);
    }
}
