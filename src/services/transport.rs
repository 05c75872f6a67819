use async_trait::async_trait;
use serde_json::Value;

use crate::{error::FetchError, types::ItineraryRequest};

/// Outbound leg of the itinerary exchange.
///
/// Implementations send one request and hand back the parsed JSON body of a
/// 2xx response. Shape checks on that body happen in the planner, not here.
#[async_trait]
pub trait PlanTransport: Send + Sync + std::fmt::Debug {
    async fn post_plan(&self, request: &ItineraryRequest) -> Result<Value, FetchError>;
}
